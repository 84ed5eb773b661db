//! The upstream seam between producers and the analyzer
//!
//! Producers are pull-based: one point per call, with the consumer in control
//! of pacing and lifetime. The trait is fallible so that real sources (or
//! test stubs) can surface terminal pull failures; infallible producers go
//! through the blanket iterator impl.

use crate::error::Result;
use crate::types::DataPoint;

/// A pull-based source of data points.
///
/// `Ok(None)` signals end of stream; `Err` is a terminal upstream failure.
pub trait PointSource {
    /// Pull the next point from the source
    fn next_point(&mut self) -> Result<Option<DataPoint>>;
}

/// Any infallible iterator of points is a source that never fails.
impl<I> PointSource for I
where
    I: Iterator<Item = DataPoint>,
{
    fn next_point(&mut self) -> Result<Option<DataPoint>> {
        Ok(self.next())
    }
}
