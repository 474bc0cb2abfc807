//! The `OutputWriter` trait implemented by backend writers.

use crate::{JourneySnapshotRow, ObstacleEventRow, OutputResult};

/// Trait implemented by log writers (CSV today; the seam exists so other
/// backends can be added without touching the observer).
///
/// All methods are infallible from the observer's perspective — errors are
/// stored internally and retrieved with
/// [`EngineOutputObserver::take_error`][crate::EngineOutputObserver::take_error].
pub trait OutputWriter {
    /// Write one traveler snapshot row.
    fn write_snapshot(&mut self, row: &JourneySnapshotRow) -> OutputResult<()>;

    /// Write one obstacle event row.
    fn write_event(&mut self, row: &ObstacleEventRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
