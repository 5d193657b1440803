use thiserror::Error;

use crate::logging::LoggingError;

/// Unified result type for the fit checker crate.
pub type Result<T> = std::result::Result<T, FitError>;

/// Errors surfaced by the fit checker.
#[derive(Debug, Error)]
pub enum FitError {
    #[error("{field} must be greater than zero (got {value})")]
    InvalidDimension { field: &'static str, value: f64 },
    #[error("room has no floor area to lay out")]
    DegenerateRoom,
    #[error("canvas of {canvas_size}px cannot hold {padding}px padding on both sides")]
    InvalidCanvas { canvas_size: f64, padding: f64 },
    #[error("furniture item `{0}` not found")]
    ItemNotFound(String),
    #[error("furniture item `{0}` appears more than once in the catalog")]
    DuplicateItem(String),
    #[error("furniture item `{id}` is invalid: {reason}")]
    InvalidItem { id: String, reason: String },
    #[error("configuration error: {0}")]
    Config(String),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("logging error: {0}")]
    Logging(#[from] LoggingError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
