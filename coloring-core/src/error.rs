//! Error types for canvas operations.

use thiserror::Error;

use crate::export::ExportError;

/// Result type for canvas operations.
pub type CanvasResult<T> = Result<T, CanvasError>;

/// Errors that can occur in canvas operations.
#[derive(Debug, Error)]
pub enum CanvasError {
    /// Requested texture pattern is not known.
    #[error("Unsupported texture pattern: {0}")]
    UnsupportedPattern(String),

    /// Color string could not be parsed.
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// Gallery category or page does not exist.
    #[error("Page not found: {0}")]
    PageNotFound(String),

    /// Scene serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Export failed.
    #[error(transparent)]
    Export(#[from] ExportError),
}
