use gw_grid::GridError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum JourneyError {
    #[error("planning failed: {0}")]
    Planning(#[from] GridError),
}

pub type JourneyResult<T> = Result<T, JourneyError>;
