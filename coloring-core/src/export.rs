//! The interface between the canvas and an export backend.
//!
//! Implementations live in `coloring-renderer`; the canvas only sees the
//! [`SceneExport`] trait, chosen once when the session starts.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Scene;

/// Errors raised while exporting a scene.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The requested output format is not supported.
    #[error("Unsupported export format: {0}")]
    UnsupportedFormat(String),

    /// The destination could not be written.
    #[error("Failed to write {}: {source}", .path.display())]
    Io {
        /// Path that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The scene could not be converted to the requested format.
    #[error("Conversion failed: {0}")]
    Conversion(String),
}

/// Raster formats a scene can be exported to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// PNG image.
    Png,
    /// JPEG image.
    Jpeg,
}

impl ExportFormat {
    /// Upper-case format name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Png => "PNG",
            Self::Jpeg => "JPEG",
        }
    }

    /// Infer the format from a save-dialog path: `.png` is PNG,
    /// anything else is JPEG.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        let is_png = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));
        if is_png {
            Self::Png
        } else {
            Self::Jpeg
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, ExportError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "png" => Ok(Self::Png),
            "jpeg" | "jpg" => Ok(Self::Jpeg),
            _ => Err(ExportError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// What an export actually produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// The requested format was written at the requested path.
    Written {
        /// Path written.
        path: PathBuf,
        /// Format written.
        format: ExportFormat,
    },
    /// The raster backend is unavailable; a vector document was written
    /// instead, at a different path.
    Degraded {
        /// Format the caller asked for.
        requested: ExportFormat,
        /// Path of the vector document actually written.
        written: PathBuf,
    },
}

impl ExportOutcome {
    /// Path of the file that now exists.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Written { path, .. } => path,
            Self::Degraded { written, .. } => written,
        }
    }

    /// Whether the output differs from what was requested.
    #[must_use]
    pub fn is_degraded(&self) -> bool {
        matches!(self, Self::Degraded { .. })
    }
}

impl fmt::Display for ExportOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Written { path, format } => {
                write!(f, "Saved {format} image to {}", path.display())
            }
            Self::Degraded { requested, written } => write!(
                f,
                "Image saved as {}. Convert to {requested} using external tools.",
                written.display()
            ),
        }
    }
}

/// A strategy for turning a scene into a file.
pub trait SceneExport {
    /// Short name for logging.
    fn name(&self) -> &'static str;

    /// Write `scene` to `path` as `format`, or report what was written
    /// instead.
    ///
    /// # Errors
    ///
    /// Returns an error if the scene cannot be converted or the
    /// destination cannot be written.
    fn export(
        &self,
        scene: &Scene,
        path: &Path,
        format: ExportFormat,
    ) -> Result<ExportOutcome, ExportError>;
}
