//! Basic statistics over value windows
//!
//! The shared computational layer for the detectors. Both detectors classify
//! against the mean and the population (biased) standard deviation of a value
//! window, so those two live here.

/// Arithmetic mean of a window.
///
/// Callers guard against empty windows; an empty slice yields NaN.
pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation of a window around a precomputed mean.
///
/// Population (not sample) variance: deviations are averaged over the full
/// window length. A constant window yields exactly 0.
pub fn population_std(values: &[f64], mean: f64) -> f64 {
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/// Mean and population standard deviation in one call
pub fn mean_and_std(values: &[f64]) -> (f64, f64) {
    let m = mean(values);
    (m, population_std(values, m))
}
