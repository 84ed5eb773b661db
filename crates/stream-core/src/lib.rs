//! Shared foundation for synthetic-stream analysis
//!
//! This crate provides the pieces every other stream crate builds on:
//!
//! - [`Error`] / [`Result`]: the unified error type
//! - [`DataPoint`]: a value with its monotonically increasing stream index
//! - [`BoundedHistory`]: the fixed-capacity reference window for detectors
//! - [`PointSource`]: the pull-based seam between producers and consumers
//! - [`stats`]: the mean / population-std kernels the detectors share

pub mod error;
pub mod history;
pub mod source;
pub mod stats;
pub mod types;

pub use error::{Error, Result};
pub use history::BoundedHistory;
pub use source::PointSource;
pub use types::DataPoint;
