//! Bounded history buffer
//!
//! A fixed-capacity, oldest-first buffer over the most recent stream points.
//! Both detectors use it as their statistical reference window, so eviction
//! must be exact: once the buffer is full, every push removes exactly the
//! oldest element.

use std::collections::VecDeque;

use crate::error::{Error, Result};
use crate::types::DataPoint;

/// Fixed-capacity ordered buffer retaining the most recent points.
///
/// Push is O(1) amortized. Iteration order is oldest first.
#[derive(Debug, Clone)]
pub struct BoundedHistory {
    buf: VecDeque<DataPoint>,
    capacity: usize,
}

impl BoundedHistory {
    /// Create a history retaining at most `capacity` points.
    ///
    /// A zero capacity cannot hold any reference window and is rejected.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::config("history capacity must be positive"));
        }
        Ok(Self {
            buf: VecDeque::with_capacity(capacity),
            capacity,
        })
    }

    /// Append a point, evicting the oldest one if the buffer is full.
    pub fn push(&mut self, point: DataPoint) {
        if self.buf.len() == self.capacity {
            self.buf.pop_front();
        }
        self.buf.push_back(point);
    }

    /// Number of points currently retained
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Whether the history is empty
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Maximum number of points retained
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Most recently appended point, if any
    pub fn latest(&self) -> Option<&DataPoint> {
        self.buf.back()
    }

    /// Iterate over retained points, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &DataPoint> {
        self.buf.iter()
    }

    /// Iterate over retained values, oldest first
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.buf.iter().map(|p| p.value)
    }

    /// Copy of the current contents, oldest first
    pub fn snapshot(&self) -> Vec<DataPoint> {
        self.buf.iter().copied().collect()
    }

    /// The last `k` values, oldest first.
    ///
    /// Fails when fewer than `k` points are retained; callers that must not
    /// fail check `len()` first.
    pub fn trailing_values(&self, k: usize) -> Result<Vec<f64>> {
        if self.buf.len() < k {
            return Err(Error::window_underflow(k, self.buf.len()));
        }
        Ok(self
            .buf
            .iter()
            .skip(self.buf.len() - k)
            .map(|p| p.value)
            .collect())
    }

    /// Mean of the last `k` values
    pub fn trailing_mean(&self, k: usize) -> Result<f64> {
        let tail = self.trailing_values(k)?;
        Ok(crate::stats::mean(&tail))
    }
}
