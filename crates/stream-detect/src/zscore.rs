//! Z-score point-anomaly detection
//!
//! The newest point is compared against the mean and population standard
//! deviation of the full retained history (newest point included). The test
//! is multiplicative, `|x - mean| > threshold * std`; a zero-spread history
//! can never flag a point.

use stream_core::{stats, BoundedHistory, Error, Result};

use crate::traits::{DetectorProperties, PointClassifier};
use crate::types::PointVerdict;

/// Z-score detection parameters
#[derive(Debug, Clone, PartialEq)]
pub struct ZScoreParameters {
    /// Deviation multiplier (typically 3)
    pub threshold: f64,
    /// History length at which the detector activates
    pub min_samples: usize,
}

impl Default for ZScoreParameters {
    fn default() -> Self {
        Self {
            threshold: 3.0,
            min_samples: 6,
        }
    }
}

/// Whether a value deviates from the window distribution by more than
/// `threshold` standard deviations. Strict: a point exactly on the boundary
/// is not flagged.
pub fn deviation_exceeds(value: f64, mean: f64, std_dev: f64, threshold: f64) -> bool {
    (value - mean).abs() > threshold * std_dev
}

/// Z-score point-anomaly detector
#[derive(Debug, Clone)]
pub struct ZScoreDetector {
    params: ZScoreParameters,
}

impl ZScoreDetector {
    /// Create a detector with the given deviation threshold
    pub fn new(threshold: f64) -> Result<Self> {
        Self::with_parameters(ZScoreParameters {
            threshold,
            ..ZScoreParameters::default()
        })
    }

    pub fn with_parameters(params: ZScoreParameters) -> Result<Self> {
        if !(params.threshold > 0.0) {
            return Err(Error::out_of_range(
                "zscore threshold",
                params.threshold,
                "> 0",
            ));
        }
        if params.min_samples == 0 {
            return Err(Error::config("zscore min_samples must be positive"));
        }
        Ok(Self { params })
    }

    pub fn parameters(&self) -> &ZScoreParameters {
        &self.params
    }
}

impl Default for ZScoreDetector {
    fn default() -> Self {
        Self {
            params: ZScoreParameters::default(),
        }
    }
}

impl DetectorProperties for ZScoreDetector {
    fn algorithm_name(&self) -> &'static str {
        "z-score"
    }

    fn minimum_samples(&self) -> usize {
        self.params.min_samples
    }
}

impl PointClassifier for ZScoreDetector {
    fn classify(&self, history: &BoundedHistory) -> PointVerdict {
        if history.len() < self.params.min_samples {
            return PointVerdict::absent();
        }
        let newest = match history.latest() {
            Some(point) => point.value,
            None => return PointVerdict::absent(),
        };

        let values: Vec<f64> = history.values().collect();
        let (mean, std_dev) = stats::mean_and_std(&values);
        let is_anomaly = deviation_exceeds(newest, mean, std_dev, self.params.threshold);

        PointVerdict::computed(is_anomaly, mean, std_dev)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use stream_core::DataPoint;

    fn history_of(values: &[f64]) -> BoundedHistory {
        let mut history = BoundedHistory::new(200).unwrap();
        for (i, &v) in values.iter().enumerate() {
            history.push(DataPoint::new(i as u64, v));
        }
        history
    }

    #[test]
    fn test_boundary_is_strict() {
        // At mean 0, std 1, threshold 3: exactly 3.0 is on the boundary and
        // not flagged; the tiniest excess is.
        assert!(!deviation_exceeds(3.0, 0.0, 1.0, 3.0));
        assert!(deviation_exceeds(3.0001, 0.0, 1.0, 3.0));
        assert!(!deviation_exceeds(-3.0, 0.0, 1.0, 3.0));
        assert!(deviation_exceeds(-3.0001, 0.0, 1.0, 3.0));
    }

    #[test]
    fn test_zero_spread_flags_nothing() {
        assert!(!deviation_exceeds(5.0, 5.0, 0.0, 3.0));

        let history = history_of(&[5.0; 10]);
        let verdict = ZScoreDetector::default().classify(&history);
        assert!(!verdict.is_anomaly);
        assert_eq!(verdict.std_dev, Some(0.0));
    }

    #[test]
    fn test_absent_below_activation() {
        let detector = ZScoreDetector::default();
        let mut history = BoundedHistory::new(200).unwrap();

        for i in 0..5u64 {
            history.push(DataPoint::new(i, i as f64));
            let verdict = detector.classify(&history);
            assert_eq!(verdict, PointVerdict::absent(), "length {}", i + 1);
        }

        // Sixth point activates the detector
        history.push(DataPoint::new(5, 5.0));
        let verdict = detector.classify(&history);
        assert!(verdict.mean.is_some());
        assert!(verdict.std_dev.is_some());
        assert_relative_eq!(verdict.mean.unwrap(), 2.5);
    }

    #[test]
    fn test_outlier_is_flagged() {
        // Twenty zeros and one large excursion: the newest point sits about
        // 4.5 standard deviations out even with itself included in the
        // window.
        let mut values = vec![0.0; 20];
        values.push(50.0);
        let history = history_of(&values);

        let verdict = ZScoreDetector::default().classify(&history);
        assert!(verdict.is_anomaly);
    }

    #[test]
    fn test_inlier_is_not_flagged() {
        let values: Vec<f64> = (0..30).map(|i| (i % 5) as f64).collect();
        let history = history_of(&values);

        let verdict = ZScoreDetector::default().classify(&history);
        assert!(!verdict.is_anomaly);
    }

    #[test]
    fn test_parameter_validation() {
        assert!(ZScoreDetector::new(0.0).is_err());
        assert!(ZScoreDetector::new(-3.0).is_err());
        assert!(ZScoreDetector::new(f64::NAN).is_err());
        assert!(ZScoreDetector::new(2.5).is_ok());
    }
}
