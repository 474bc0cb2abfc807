//! Grid-subsystem error type.

use thiserror::Error;

use gw_core::GridCoord;

/// Errors produced by `gw-grid`.
///
/// All variants are recoverable result values; a coordinate from a malformed
/// upstream query surfaces as `OutOfBounds` rather than being clamped.
#[derive(Debug, Error)]
pub enum GridError {
    #[error("grid dimensions {width}×{height} must both be positive")]
    InvalidDimension { width: i32, height: i32 },

    #[error("coordinate {0} is outside the grid")]
    OutOfBounds(GridCoord),

    #[error("{a} and {b} are not 4-adjacent")]
    NotAdjacent { a: GridCoord, b: GridCoord },

    #[error("edge cost {0} must be finite and positive")]
    InvalidCost(f32),

    #[error("no path from {from} to {to}")]
    NoPath { from: GridCoord, to: GridCoord },
}

pub type GridResult<T> = Result<T, GridError>;
