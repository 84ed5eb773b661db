//! Synthetic stream generation with online anomaly detection
//!
//! A facade over the workspace crates:
//!
//! - [`stream_core`]: errors, data points, the bounded history, the source seam
//! - [`stream_synth`]: the stochastic generator (trend + seasonality + noise
//!   + injected irregularities)
//! - [`stream_detect`]: the z-score point detector, the window-mean pattern
//!   detector, and the orchestrating analyzer
//!
//! # Example
//!
//! ```rust
//! use anomaly_stream::{
//!     AnalyzerConfig, IrregularityProfile, StreamAnalyzer, StreamGenerator, SynthConfig,
//! };
//!
//! let generator =
//!     StreamGenerator::seeded(SynthConfig::default(), IrregularityProfile::default(), 42)
//!         .unwrap();
//! let analyzer = StreamAnalyzer::new(generator, AnalyzerConfig::default()).unwrap();
//!
//! for record in analyzer.records().take(100) {
//!     let record = record.unwrap();
//!     if !record.is_normal() {
//!         println!("{record}");
//!     }
//! }
//! ```

pub use stream_core::{BoundedHistory, DataPoint, Error, PointSource, Result};
pub use stream_detect::{
    AnalyzerConfig, DetectorProperties, PointClassifier, PointVerdict, Records, StreamAnalyzer,
    StreamRecord, WindowClassifier, WindowMeanDetector, WindowParameters, ZScoreDetector,
    ZScoreParameters,
};
pub use stream_synth::{
    GeneratorState, IrregularityProfile, StreamGenerator, SynthConfig, TrendKind,
};
