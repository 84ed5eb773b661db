//! Generator configuration
//!
//! All parameters are validated eagerly at generator construction; a bad
//! configuration never produces a single point.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use stream_core::{Error, Result};

/// Shape of the slow, non-periodic component of the series
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendKind {
    /// trend = 0.01 * index
    Linear,
    /// trend = 5 * sin(0.01 * index)
    Sinusoidal,
}

impl fmt::Display for TrendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrendKind::Linear => write!(f, "linear"),
            TrendKind::Sinusoidal => write!(f, "sinusoidal"),
        }
    }
}

impl FromStr for TrendKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "linear" => Ok(TrendKind::Linear),
            "sinusoidal" => Ok(TrendKind::Sinusoidal),
            other => Err(Error::config(format!(
                "unknown trend kind {other:?}, expected \"linear\" or \"sinusoidal\""
            ))),
        }
    }
}

/// Configuration of the synthetic series
#[derive(Debug, Clone, PartialEq)]
pub struct SynthConfig {
    /// Trend component shape
    pub trend: TrendKind,
    /// Period of the seasonal oscillation, in points (> 0)
    pub seasonality_period: f64,
    /// Initial seasonal amplitude (>= 0; redrawn at runtime by the
    /// amplitude-drift irregularity)
    pub seasonality_amplitude: f64,
    /// Standard deviation of the per-point Gaussian noise (>= 0)
    pub noise_level: f64,
    /// Pacing hint between points. Consumed by the wrapping application,
    /// never by the generator itself; values are identical at any pace.
    pub delay: Duration,
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            trend: TrendKind::Linear,
            seasonality_period: 50.0,
            seasonality_amplitude: 10.0,
            noise_level: 1.0,
            delay: Duration::from_millis(100),
        }
    }
}

impl SynthConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.seasonality_period > 0.0) {
            return Err(Error::out_of_range(
                "seasonality_period",
                self.seasonality_period,
                "> 0",
            ));
        }
        if !(self.seasonality_amplitude >= 0.0) {
            return Err(Error::out_of_range(
                "seasonality_amplitude",
                self.seasonality_amplitude,
                ">= 0",
            ));
        }
        if !(self.noise_level >= 0.0) {
            return Err(Error::out_of_range("noise_level", self.noise_level, ">= 0"));
        }
        Ok(())
    }
}

/// Parameters of the injected irregularities.
///
/// The defaults reproduce the canonical irregular stream: a one-time trend
/// jump on the 50-point grid, an amplitude redraw every 75 points, and a 5%
/// chance of a +/-50 spike per point.
#[derive(Debug, Clone, PartialEq)]
pub struct IrregularityProfile {
    /// Grid on which the one-time trend shift can fire (> 0)
    pub trend_shift_interval: u64,
    /// Mean of the trend-shift jump
    pub trend_shift_mean: f64,
    /// Standard deviation of the trend-shift jump (>= 0)
    pub trend_shift_std: f64,
    /// Grid on which the seasonal amplitude is redrawn (> 0)
    pub amplitude_interval: u64,
    /// Inclusive range the amplitude is redrawn from (0 <= lo <= hi)
    pub amplitude_range: (f64, f64),
    /// Per-point probability of a spike/drop (in [0, 1])
    pub spike_probability: f64,
    /// Magnitude of a spike/drop; sign is chosen equiprobably (>= 0)
    pub spike_magnitude: f64,
}

impl Default for IrregularityProfile {
    fn default() -> Self {
        Self {
            trend_shift_interval: 50,
            trend_shift_mean: 30.0,
            trend_shift_std: 5.0,
            amplitude_interval: 75,
            amplitude_range: (5.0, 20.0),
            spike_probability: 0.05,
            spike_magnitude: 50.0,
        }
    }
}

impl IrregularityProfile {
    /// A profile with every irregularity neutralized: no trend jump, no
    /// spikes, and the amplitude pinned to `amplitude` on every redraw.
    ///
    /// With zero noise this makes the whole stream deterministic, which the
    /// boundary tests rely on.
    pub fn quiet(amplitude: f64) -> Self {
        Self {
            trend_shift_mean: 0.0,
            trend_shift_std: 0.0,
            amplitude_range: (amplitude, amplitude),
            spike_probability: 0.0,
            spike_magnitude: 0.0,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.trend_shift_interval == 0 {
            return Err(Error::config("trend_shift_interval must be positive"));
        }
        if self.amplitude_interval == 0 {
            return Err(Error::config("amplitude_interval must be positive"));
        }
        if !(self.trend_shift_std >= 0.0) {
            return Err(Error::out_of_range(
                "trend_shift_std",
                self.trend_shift_std,
                ">= 0",
            ));
        }
        let (lo, hi) = self.amplitude_range;
        if !(0.0 <= lo && lo <= hi) {
            return Err(Error::config(format!(
                "amplitude_range ({lo}, {hi}) must satisfy 0 <= lo <= hi"
            )));
        }
        if !(0.0..=1.0).contains(&self.spike_probability) {
            return Err(Error::out_of_range(
                "spike_probability",
                self.spike_probability,
                "in [0, 1]",
            ));
        }
        if !(self.spike_magnitude >= 0.0) {
            return Err(Error::out_of_range(
                "spike_magnitude",
                self.spike_magnitude,
                ">= 0",
            ));
        }
        Ok(())
    }
}
