//! Stochastic time-series synthesis
//!
//! This crate generates an unbounded univariate series from a configurable
//! model:
//!
//! ```text
//! value = trend + seasonality + noise   (+ injected irregularities)
//! ```
//!
//! - **Trend**: linear (`0.01 * index`) or sinusoidal (`5 * sin(0.01 * index)`)
//! - **Seasonality**: `amplitude * sin(2 pi * index / period)`
//! - **Noise**: `Normal(0, noise_level)`
//!
//! Irregularities make the stream interesting to analyze: a one-time trend
//! jump on a fixed grid, periodic redraws of the seasonal amplitude, and
//! random spikes. All of them are parameterized by [`IrregularityProfile`]
//! and every stochastic term can be pinned or disabled, so tests can force
//! any of them deterministically.
//!
//! # Example
//!
//! ```rust
//! use stream_synth::{IrregularityProfile, StreamGenerator, SynthConfig, TrendKind};
//!
//! let config = SynthConfig {
//!     trend: TrendKind::Sinusoidal,
//!     seasonality_period: 100.0,
//!     seasonality_amplitude: 15.0,
//!     noise_level: 3.0,
//!     ..SynthConfig::default()
//! };
//! let generator = StreamGenerator::seeded(config, IrregularityProfile::default(), 42).unwrap();
//! for point in generator.take(5) {
//!     println!("{point}");
//! }
//! ```

pub mod config;
pub mod generator;

pub use config::{IrregularityProfile, SynthConfig, TrendKind};
pub use generator::{GeneratorState, StreamGenerator};
