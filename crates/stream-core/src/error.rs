//! Error types for stream generation and analysis
//!
//! Provides a unified error type for all anomaly-stream crates.

use thiserror::Error;

/// Core error type for stream operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid configuration supplied at construction time
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// Terminal failure while pulling from an upstream source
    #[error("Stream failure: {0}")]
    StreamFailure(String),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Create an error for a window request the history cannot satisfy
    pub fn window_underflow(expected: usize, actual: usize) -> Self {
        Self::InsufficientData { expected, actual }
    }

    /// Create an error for an out-of-range numeric parameter
    pub fn out_of_range(name: &str, value: f64, constraint: &str) -> Self {
        Self::Configuration(format!("{name} = {value} violates constraint {constraint}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Configuration("seasonality_period must be positive".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid configuration: seasonality_period must be positive"
        );

        let err = Error::InsufficientData {
            expected: 50,
            actual: 12,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient data: expected at least 50 samples, got 12"
        );

        let err = Error::StreamFailure("upstream closed".to_string());
        assert_eq!(err.to_string(), "Stream failure: upstream closed");
    }

    #[test]
    fn test_error_helpers() {
        match Error::window_underflow(10, 3) {
            Error::InsufficientData { expected, actual } => {
                assert_eq!(expected, 10);
                assert_eq!(actual, 3);
            }
            _ => panic!("Wrong error type"),
        }

        let err = Error::out_of_range("noise_level", -1.0, ">= 0");
        assert_eq!(
            err.to_string(),
            "Invalid configuration: noise_level = -1 violates constraint >= 0"
        );
    }

    #[test]
    fn test_error_from_anyhow() {
        let err: Error = anyhow::anyhow!("custom failure").into();
        match err {
            Error::Other(_) => assert!(err.to_string().contains("custom failure")),
            _ => panic!("Wrong error type"),
        }
    }
}
