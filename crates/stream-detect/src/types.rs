//! Types produced by online stream classification

use std::fmt;

use stream_core::DataPoint;

/// Verdict of the point detector for the newest point.
///
/// Statistics are `None` until enough history exists to compute them; absent
/// means "not computed", which is distinct from "computed and normal".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointVerdict {
    /// Whether the newest point deviates from the recent distribution
    pub is_anomaly: bool,
    /// Mean of the reference window, if computed
    pub mean: Option<f64>,
    /// Population standard deviation of the reference window, if computed
    pub std_dev: Option<f64>,
}

impl PointVerdict {
    /// Verdict for a history too short to classify
    pub fn absent() -> Self {
        Self {
            is_anomaly: false,
            mean: None,
            std_dev: None,
        }
    }

    /// Verdict backed by computed window statistics
    pub fn computed(is_anomaly: bool, mean: f64, std_dev: f64) -> Self {
        Self {
            is_anomaly,
            mean: Some(mean),
            std_dev: Some(std_dev),
        }
    }
}

/// One fully classified stream step.
///
/// Produced once per input point, in strict generation order, and immutable
/// thereafter; renderers consume these.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StreamRecord {
    /// The point this record classifies
    pub point: DataPoint,
    /// Point-anomaly flag (z-score exceeds the threshold)
    pub is_anomaly: bool,
    /// Unusual-pattern flag (sustained shift in the trailing window)
    pub is_unusual_pattern: bool,
    /// Mean of the point-detector reference window, if computed
    pub window_mean: Option<f64>,
    /// Population std of the point-detector reference window, if computed
    pub window_std: Option<f64>,
}

impl StreamRecord {
    /// Whether this step raised no flag at all
    pub fn is_normal(&self) -> bool {
        !self.is_anomaly && !self.is_unusual_pattern
    }
}

impl fmt::Display for StreamRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.point)?;
        if self.is_anomaly {
            write!(f, " [anomaly]")?;
        }
        if self.is_unusual_pattern {
            write!(f, " [unusual pattern]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_constructors() {
        let absent = PointVerdict::absent();
        assert!(!absent.is_anomaly);
        assert_eq!(absent.mean, None);
        assert_eq!(absent.std_dev, None);

        let computed = PointVerdict::computed(true, 1.5, 0.5);
        assert!(computed.is_anomaly);
        assert_eq!(computed.mean, Some(1.5));
        assert_eq!(computed.std_dev, Some(0.5));
    }

    #[test]
    fn test_record_display() {
        let record = StreamRecord {
            point: DataPoint::new(12, 99.5),
            is_anomaly: true,
            is_unusual_pattern: false,
            window_mean: Some(1.0),
            window_std: Some(2.0),
        };
        assert_eq!(record.to_string(), "[12] 99.5000 [anomaly]");
        assert!(!record.is_normal());
    }
}
