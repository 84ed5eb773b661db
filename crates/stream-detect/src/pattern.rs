//! Unusual-pattern detection over a trailing window
//!
//! Complements the point detector: instead of asking whether one point is
//! far out, it asks whether the trailing window as a whole shows a sustained
//! directional shift. The window is unusual when its mean is large relative
//! to its own dispersion, `|mean| > threshold * std`.
//!
//! Zero-dispersion windows keep the same strict comparison: a constant
//! nonzero window flags (`|mean| > 0`), a constant zero window compares
//! `0 > 0` and does not.

use stream_core::{stats, BoundedHistory, Error, Result};

use crate::traits::{DetectorProperties, WindowClassifier};

/// Window classification parameters
#[derive(Debug, Clone, PartialEq)]
pub struct WindowParameters {
    /// Trailing window length
    pub window: usize,
    /// Mean-to-dispersion multiplier
    pub threshold: f64,
}

impl Default for WindowParameters {
    fn default() -> Self {
        Self {
            window: 50,
            threshold: 1.0,
        }
    }
}

/// Trailing-window mean-shift detector
#[derive(Debug, Clone)]
pub struct WindowMeanDetector {
    params: WindowParameters,
}

impl WindowMeanDetector {
    /// Create a detector over a trailing window of the given length
    pub fn new(window: usize) -> Result<Self> {
        Self::with_parameters(WindowParameters {
            window,
            ..WindowParameters::default()
        })
    }

    pub fn with_parameters(params: WindowParameters) -> Result<Self> {
        if params.window == 0 {
            return Err(Error::config("pattern window must be positive"));
        }
        if !(params.threshold >= 0.0) {
            return Err(Error::out_of_range(
                "pattern threshold",
                params.threshold,
                ">= 0",
            ));
        }
        Ok(Self { params })
    }

    pub fn parameters(&self) -> &WindowParameters {
        &self.params
    }
}

impl Default for WindowMeanDetector {
    fn default() -> Self {
        Self {
            params: WindowParameters::default(),
        }
    }
}

impl DetectorProperties for WindowMeanDetector {
    fn algorithm_name(&self) -> &'static str {
        "window-mean"
    }

    fn minimum_samples(&self) -> usize {
        self.params.window
    }
}

impl WindowClassifier for WindowMeanDetector {
    fn classify(&self, history: &BoundedHistory) -> bool {
        if history.len() < self.params.window {
            return false;
        }
        // Length was checked, so the trailing request cannot underflow
        let window = match history.trailing_values(self.params.window) {
            Ok(values) => values,
            Err(_) => return false,
        };
        let (mean, std_dev) = stats::mean_and_std(&window);
        mean.abs() > self.params.threshold * std_dev
    }
}
