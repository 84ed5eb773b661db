//! Online anomaly detection over a synthetic or real point stream
//!
//! Two complementary detectors run against a shared bounded history:
//!
//! - [`ZScoreDetector`]: flags a single point whose deviation from the
//!   recent mean exceeds a multiple of the recent standard deviation
//! - [`WindowMeanDetector`]: flags a trailing window whose mean is large
//!   relative to its own dispersion, indicating a sustained shift rather
//!   than one outlier
//!
//! [`StreamAnalyzer`] ties them together: it pulls points from any
//! [`stream_core::PointSource`], maintains the history, and yields one
//! [`StreamRecord`] per point in strict generation order.
//!
//! # Example
//!
//! ```rust
//! use stream_detect::{AnalyzerConfig, StreamAnalyzer};
//! use stream_core::DataPoint;
//!
//! let points = (0..30u64).map(|i| DataPoint::new(i, (i % 3) as f64));
//! let analyzer = StreamAnalyzer::new(points, AnalyzerConfig::default()).unwrap();
//! for record in analyzer.records() {
//!     let record = record.unwrap();
//!     assert!(!record.is_anomaly);
//! }
//! ```

pub mod analyzer;
pub mod pattern;
pub mod traits;
pub mod types;
pub mod zscore;

pub use analyzer::{AnalyzerConfig, Records, StreamAnalyzer};
pub use pattern::{WindowMeanDetector, WindowParameters};
pub use traits::{DetectorProperties, PointClassifier, WindowClassifier};
pub use types::{PointVerdict, StreamRecord};
pub use zscore::{ZScoreDetector, ZScoreParameters};
