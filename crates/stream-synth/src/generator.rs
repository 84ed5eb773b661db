//! The stochastic stream generator
//!
//! Produces an unbounded pull-based sequence of points from a trend +
//! seasonality + noise model, with three kinds of injected irregularities:
//! a one-time trend shift, periodic redraws of the seasonal amplitude, and
//! random spikes. The random source is injected so callers can pin or
//! suppress every stochastic term.

use std::f64::consts::PI;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use tracing::debug;

use stream_core::{DataPoint, Error, Result};

use crate::config::{IrregularityProfile, SynthConfig, TrendKind};

/// Mutable per-instance generator state.
///
/// Owned exclusively by one generator and mutated once per emitted point, so
/// independent generators never interfere.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorState {
    /// Index of the next point to emit
    pub index: u64,
    /// Latched once the one-time trend shift has fired
    pub trend_shifted: bool,
    /// Live seasonal amplitude, redrawn by the drift irregularity
    pub seasonality_amplitude: f64,
}

/// Infinite generator of synthetic data points.
///
/// The generator never terminates on its own; consumers stop pulling when
/// they are done. Restarting means constructing a new instance with fresh
/// state.
#[derive(Debug, Clone)]
pub struct StreamGenerator<R: Rng> {
    config: SynthConfig,
    profile: IrregularityProfile,
    noise: Normal<f64>,
    trend_shift: Normal<f64>,
    state: GeneratorState,
    rng: R,
}

impl StreamGenerator<StdRng> {
    /// Create a generator seeded for reproducible output
    pub fn seeded(config: SynthConfig, profile: IrregularityProfile, seed: u64) -> Result<Self> {
        Self::new(config, profile, StdRng::seed_from_u64(seed))
    }

    /// Create a generator with OS-sourced entropy
    pub fn from_entropy(config: SynthConfig, profile: IrregularityProfile) -> Result<Self> {
        Self::new(config, profile, StdRng::from_entropy())
    }
}

impl<R: Rng> StreamGenerator<R> {
    /// Create a generator over an injected random source.
    ///
    /// Configuration and profile are validated here; an invalid combination
    /// never emits a point.
    pub fn new(config: SynthConfig, profile: IrregularityProfile, rng: R) -> Result<Self> {
        config.validate()?;
        profile.validate()?;

        let noise = Normal::new(0.0, config.noise_level)
            .map_err(|e| Error::config(format!("noise distribution: {e}")))?;
        let trend_shift = Normal::new(profile.trend_shift_mean, profile.trend_shift_std)
            .map_err(|e| Error::config(format!("trend-shift distribution: {e}")))?;

        let state = GeneratorState {
            index: 0,
            trend_shifted: false,
            seasonality_amplitude: config.seasonality_amplitude,
        };

        Ok(Self {
            config,
            profile,
            noise,
            trend_shift,
            state,
            rng,
        })
    }

    pub fn config(&self) -> &SynthConfig {
        &self.config
    }

    pub fn profile(&self) -> &IrregularityProfile {
        &self.profile
    }

    /// Current generator state (index, shift latch, live amplitude)
    pub fn state(&self) -> &GeneratorState {
        &self.state
    }

    /// Emit the next point.
    ///
    /// Model components are evaluated against the pre-increment index, then
    /// irregularities are applied in a fixed order: trend shift, amplitude
    /// redraw, spike. The amplitude redraw takes effect from the *next*
    /// point; the current point still uses the amplitude it was computed
    /// with.
    pub fn next_point(&mut self) -> DataPoint {
        let index = self.state.index;
        let t = index as f64;

        let mut trend = match self.config.trend {
            TrendKind::Linear => 0.01 * t,
            TrendKind::Sinusoidal => 5.0 * (0.01 * t).sin(),
        };
        let seasonality = self.state.seasonality_amplitude
            * (2.0 * PI * t / self.config.seasonality_period).sin();
        let mut noise = self.noise.sample(&mut self.rng);

        // One-time trend shift, latched for the generator's lifetime. The
        // grid includes index 0, so the shift fires on the very first point.
        if index % self.profile.trend_shift_interval == 0 && !self.state.trend_shifted {
            self.state.trend_shifted = true;
            let jump = self.trend_shift.sample(&mut self.rng);
            trend += jump;
            debug!(index, jump, "trend shift injected");
        }

        if index % self.profile.amplitude_interval == 0 {
            let (lo, hi) = self.profile.amplitude_range;
            self.state.seasonality_amplitude = self.rng.gen_range(lo..=hi);
            debug!(
                index,
                amplitude = self.state.seasonality_amplitude,
                "seasonality amplitude redrawn"
            );
        }

        if self.rng.gen_bool(self.profile.spike_probability) {
            let magnitude = self.profile.spike_magnitude;
            noise += if self.rng.gen_bool(0.5) {
                magnitude
            } else {
                -magnitude
            };
        }

        self.state.index += 1;
        DataPoint::new(index, trend + seasonality + noise)
    }
}

/// The generator is an infinite lazy sequence; `next` always yields.
impl<R: Rng> Iterator for StreamGenerator<R> {
    type Item = DataPoint;

    fn next(&mut self) -> Option<DataPoint> {
        Some(self.next_point())
    }
}
