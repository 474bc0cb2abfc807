//! Core error type.
//!
//! Sub-crates define their own error enums (`GridError`, `IncidentError`, …)
//! and convert `CoreError` in via `#[from]` where configuration flows through
//! them.  Keeping this crate's surface to one variant avoids a grab-bag enum
//! nothing fully uses.

use thiserror::Error;

/// Errors produced by `gw-core` itself.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `gw-core`.
pub type CoreResult<T> = Result<T, CoreError>;
