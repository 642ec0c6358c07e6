//! Vector fallback used when no raster backend is available.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use coloring_core::{ExportError, ExportFormat, ExportOutcome, Scene, SceneExport};

use crate::export::{write_atomically, ExportConfig};
use crate::svg;

/// Suffix appended to the requested path. Never empty, so the requested
/// path itself is never written.
pub const VECTOR_SUFFIX: &str = ".svg";

/// Writes the SVG scene description next to the requested path.
///
/// The requested path itself is never created; the caller is told where
/// the document went so it can be converted externally.
pub struct VectorExporter {
    config: ExportConfig,
}

impl VectorExporter {
    /// Create a new exporter with the given configuration.
    #[must_use]
    pub fn new(config: ExportConfig) -> Self {
        Self { config }
    }

    /// Path the document is written to for a requested `path`.
    #[must_use]
    pub fn fallback_path(path: &Path) -> PathBuf {
        let mut name = OsString::from(path.as_os_str());
        name.push(VECTOR_SUFFIX);
        PathBuf::from(name)
    }
}

impl Default for VectorExporter {
    fn default() -> Self {
        Self::new(ExportConfig::default())
    }
}

impl SceneExport for VectorExporter {
    fn name(&self) -> &'static str {
        "vector"
    }

    fn export(
        &self,
        scene: &Scene,
        path: &Path,
        format: ExportFormat,
    ) -> Result<ExportOutcome, ExportError> {
        let written = Self::fallback_path(path);
        let document = svg::render_scene(scene, self.config.background);
        write_atomically(&written, document.as_bytes())?;

        tracing::debug!("Wrote {format} fallback document to {}", written.display());
        Ok(ExportOutcome::Degraded {
            requested: format,
            written,
        })
    }
}
