use gw_core::CoreError;
use gw_grid::GridError;
use gw_journey::JourneyError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("engine configuration error: {0}")]
    Config(#[from] CoreError),

    #[error("scenario table required when spawn_interval_ticks > 0")]
    MissingScenarios,

    #[error("grid error: {0}")]
    Grid(#[from] GridError),

    #[error("journey error: {0}")]
    Journey(#[from] JourneyError),
}

pub type SimResult<T> = Result<T, SimError>;
