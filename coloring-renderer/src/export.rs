//! Export configuration and strategy selection.
//!
//! The strategy is picked once, when a session starts: the raster
//! exporter when it was compiled in, otherwise the vector fallback.

use std::io::Write;
use std::path::Path;

use coloring_core::{Color, ExportError, SceneExport};

use crate::vector::VectorExporter;

/// Configuration for scene export.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Background painted behind the scene.
    pub background: Color,
    /// JPEG quality 1-100 (default: 85).
    pub jpeg_quality: u8,
    /// Use the vector fallback even when raster export is available.
    pub prefer_vector: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            background: Color::WHITE,
            jpeg_quality: 85,
            prefer_vector: false,
        }
    }
}

/// Whether this build can rasterize scenes.
#[must_use]
pub fn raster_available() -> bool {
    cfg!(feature = "raster")
}

/// Pick the export strategy for a session.
#[must_use]
pub fn select_exporter(config: ExportConfig) -> Box<dyn SceneExport> {
    if config.prefer_vector {
        tracing::info!("Vector export requested, saving SVG documents");
        return Box::new(VectorExporter::new(config));
    }
    preferred_exporter(config)
}

#[cfg(feature = "raster")]
fn preferred_exporter(config: ExportConfig) -> Box<dyn SceneExport> {
    Box::new(crate::raster::RasterExporter::new(config))
}

#[cfg(not(feature = "raster"))]
fn preferred_exporter(config: ExportConfig) -> Box<dyn SceneExport> {
    tracing::warn!("Raster export unavailable, falling back to SVG documents");
    Box::new(VectorExporter::new(config))
}

/// Write `bytes` to `path` through a temporary file in the same
/// directory, so a failed write never leaves a partial file at `path`.
pub(crate) fn write_atomically(path: &Path, bytes: &[u8]) -> Result<(), ExportError> {
    let io_err = |source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    };

    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(io_err)?;
    tmp.write_all(bytes).map_err(io_err)?;
    tmp.as_file().sync_all().map_err(io_err)?;
    tmp.persist(path).map_err(|e| io_err(e.error))?;

    tracing::debug!("Wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}
