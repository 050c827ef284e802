// crates/eventdb-core/src/error.rs
use thiserror::Error;

/// Errors raised at the catalog boundary.
///
/// Matching and filtering never fail; everything here comes from reading a
/// catalog, validating its events, or committing a selection.
#[derive(Debug, Error)]
pub enum EventDbError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Snapshot error: {0}")]
    Bincode(#[from] bincode::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unsupported catalog format: {0}")]
    UnsupportedFormat(String),

    #[error("Event {id} has no location")]
    MissingLocation { id: String },

    #[error("Event at position {index} has no id")]
    MissingId { index: usize },

    #[error("Duplicate event id: {0}")]
    DuplicateId(String),

    #[error("Unknown city: {0}")]
    UnknownCity(String),
}

pub type Result<T> = std::result::Result<T, EventDbError>;
