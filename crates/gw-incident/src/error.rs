//! Incident-subsystem error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IncidentError {
    #[error("scenario parse error: {0}")]
    Parse(String),

    #[error("scenario table must not be empty")]
    EmptyTable,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type IncidentResult<T> = Result<T, IncidentError>;
