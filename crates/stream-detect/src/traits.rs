//! Core traits for online detection
//!
//! Detectors are stateless classifiers over a [`BoundedHistory`]: the
//! analyzer owns the history and hands each detector a read-only view after
//! every append. Detectors resolve their own short-history edge cases
//! internally rather than surfacing errors.

use stream_core::BoundedHistory;

use crate::types::PointVerdict;

/// Properties of a detector that don't depend on the history contents
pub trait DetectorProperties {
    /// Name of the detection algorithm
    fn algorithm_name(&self) -> &'static str;

    /// Minimum history length before the detector activates
    fn minimum_samples(&self) -> usize;
}

/// Classifies the newest point against the recent distribution
pub trait PointClassifier: DetectorProperties {
    /// Classify the most recently appended point.
    ///
    /// Below the activation length the verdict is absent (not anomalous, no
    /// statistics).
    fn classify(&self, history: &BoundedHistory) -> PointVerdict;
}

/// Classifies the trailing window as a whole
pub trait WindowClassifier: DetectorProperties {
    /// Whether the trailing window shows a sustained unusual pattern.
    ///
    /// Below the activation length the answer is `false`.
    fn classify(&self, history: &BoundedHistory) -> bool;
}
