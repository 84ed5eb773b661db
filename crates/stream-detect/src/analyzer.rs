//! The online analysis loop
//!
//! Pull-based and strictly sequential: one point is pulled from the source,
//! appended to the bounded history, classified by both detectors against the
//! updated history, and yielded as a [`StreamRecord`]. Records come out in
//! generation order, exactly one per input point.
//!
//! The analyzer owns all mutable state (history, source); nothing here is
//! shared across threads. Pacing between steps belongs to the consumer.

use tracing::{debug, warn};

use stream_core::{BoundedHistory, Error, PointSource, Result};

use crate::pattern::{WindowMeanDetector, WindowParameters};
use crate::traits::{DetectorProperties, PointClassifier, WindowClassifier};
use crate::types::StreamRecord;
use crate::zscore::{ZScoreDetector, ZScoreParameters};

/// Analyzer configuration, validated eagerly at construction
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzerConfig {
    /// Capacity of the retained history both detectors classify against
    pub history_capacity: usize,
    /// Point-anomaly detection parameters
    pub zscore: ZScoreParameters,
    /// Unusual-pattern detection parameters
    pub pattern: WindowParameters,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            history_capacity: 200,
            zscore: ZScoreParameters::default(),
            pattern: WindowParameters::default(),
        }
    }
}

/// Orchestrates generation, history maintenance, and classification.
///
/// Terminates only when the source ends or fails; a failure is surfaced once
/// as [`Error::StreamFailure`], after which the analyzer yields nothing more.
#[derive(Debug)]
pub struct StreamAnalyzer<S: PointSource> {
    source: S,
    history: BoundedHistory,
    point_detector: ZScoreDetector,
    pattern_detector: WindowMeanDetector,
    done: bool,
}

impl<S: PointSource> StreamAnalyzer<S> {
    /// Create an analyzer over a point source.
    ///
    /// The history capacity must cover the point detector's activation
    /// length, otherwise point classification could never produce
    /// statistics. A pattern window longer than the capacity is accepted
    /// but can never activate, so it is logged loudly.
    pub fn new(source: S, config: AnalyzerConfig) -> Result<Self> {
        let point_detector = ZScoreDetector::with_parameters(config.zscore.clone())?;
        let pattern_detector = WindowMeanDetector::with_parameters(config.pattern.clone())?;

        if config.history_capacity < point_detector.minimum_samples() {
            return Err(Error::config(format!(
                "history capacity {} is below the point-detector activation length {}",
                config.history_capacity,
                point_detector.minimum_samples()
            )));
        }
        if pattern_detector.minimum_samples() > config.history_capacity {
            warn!(
                window = pattern_detector.minimum_samples(),
                capacity = config.history_capacity,
                "pattern window exceeds history capacity; the pattern detector will never activate"
            );
        }

        Ok(Self {
            source,
            history: BoundedHistory::new(config.history_capacity)?,
            point_detector,
            pattern_detector,
            done: false,
        })
    }

    /// The retained history, oldest first
    pub fn history(&self) -> &BoundedHistory {
        &self.history
    }

    /// Pull, classify, and yield one step.
    ///
    /// `Ok(None)` once the source ends (or after a prior failure); `Err` on
    /// a failed pull, for which no partial record is emitted.
    pub fn advance(&mut self) -> Result<Option<StreamRecord>> {
        if self.done {
            return Ok(None);
        }

        let point = match self.source.next_point() {
            Ok(Some(point)) => point,
            Ok(None) => {
                self.done = true;
                return Ok(None);
            }
            Err(e) => {
                self.done = true;
                return Err(match e {
                    failure @ Error::StreamFailure(_) => failure,
                    other => Error::StreamFailure(other.to_string()),
                });
            }
        };

        self.history.push(point);
        let verdict = self.point_detector.classify(&self.history);
        let is_unusual_pattern = self.pattern_detector.classify(&self.history);

        if verdict.is_anomaly {
            debug!(
                index = point.index,
                value = point.value,
                algorithm = self.point_detector.algorithm_name(),
                "point anomaly detected"
            );
        }
        if is_unusual_pattern {
            debug!(
                index = point.index,
                algorithm = self.pattern_detector.algorithm_name(),
                "unusual pattern detected"
            );
        }

        Ok(Some(StreamRecord {
            point,
            is_anomaly: verdict.is_anomaly,
            is_unusual_pattern,
            window_mean: verdict.mean,
            window_std: verdict.std_dev,
        }))
    }

    /// Consume the analyzer as an iterator of classified records.
    ///
    /// The iterator fuses after end-of-stream or the first failure.
    pub fn records(self) -> Records<S> {
        Records { analyzer: self }
    }
}

/// Iterator adapter over [`StreamAnalyzer::advance`]
#[derive(Debug)]
pub struct Records<S: PointSource> {
    analyzer: StreamAnalyzer<S>,
}

impl<S: PointSource> Iterator for Records<S> {
    type Item = Result<StreamRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.analyzer.advance() {
            Ok(Some(record)) => Some(Ok(record)),
            Ok(None) => None,
            Err(e) => Some(Err(e)),
        }
    }
}
