//! Renderer error types.

use coloring_core::ExportError;
use thiserror::Error;

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// Errors that can occur while converting a scene.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The SVG scene description could not be parsed.
    #[error("SVG parsing failed: {0}")]
    Svg(String),

    /// Rasterization failed.
    #[error("Rasterization failed: {0}")]
    Rasterize(String),

    /// Image encoding failed.
    #[error("{format} encoding failed: {message}")]
    Encode {
        /// Target format name.
        format: &'static str,
        /// Encoder message.
        message: String,
    },
}

impl From<RenderError> for ExportError {
    fn from(err: RenderError) -> Self {
        ExportError::Conversion(err.to_string())
    }
}
