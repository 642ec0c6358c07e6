//! Raster export: SVG description rasterized with resvg, encoded as PNG
//! or JPEG.

use std::path::Path;

use coloring_core::{ExportError, ExportFormat, ExportOutcome, Scene, SceneExport};
use image::ImageEncoder;

use crate::error::{RenderError, RenderResult};
use crate::export::{write_atomically, ExportConfig};
use crate::svg;

/// Writes the scene as a raster image in the requested format.
pub struct RasterExporter {
    config: ExportConfig,
}

impl RasterExporter {
    /// Create a new exporter with the given configuration.
    #[must_use]
    pub fn new(config: ExportConfig) -> Self {
        Self { config }
    }

    /// Create an exporter with default configuration.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(ExportConfig::default())
    }

    /// Encode the scene without writing it anywhere.
    ///
    /// # Errors
    ///
    /// Returns an error if rasterizing or encoding fails.
    pub fn encode(&self, scene: &Scene, format: ExportFormat) -> RenderResult<Vec<u8>> {
        let svg = svg::render_scene(scene, self.config.background);
        let pixmap = rasterize_svg(&svg)?;
        match format {
            ExportFormat::Png => pixmap.encode_png().map_err(|e| RenderError::Encode {
                format: "PNG",
                message: e.to_string(),
            }),
            ExportFormat::Jpeg => self.encode_jpeg(&pixmap),
        }
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn encode_jpeg(&self, pixmap: &tiny_skia::Pixmap) -> RenderResult<Vec<u8>> {
        let (width, height) = (pixmap.width(), pixmap.height());
        let bg = self.config.background;
        let mut rgb_data = Vec::with_capacity((width * height * 3) as usize);
        for pixel in pixmap.data().chunks_exact(4) {
            // tiny-skia stores premultiplied alpha
            let inv = 1.0 - f32::from(pixel[3]) / 255.0;
            rgb_data.push(f32::from(bg.r).mul_add(inv, f32::from(pixel[0])) as u8);
            rgb_data.push(f32::from(bg.g).mul_add(inv, f32::from(pixel[1])) as u8);
            rgb_data.push(f32::from(bg.b).mul_add(inv, f32::from(pixel[2])) as u8);
        }

        let mut buf = std::io::Cursor::new(Vec::new());
        let encoder =
            image::codecs::jpeg::JpegEncoder::new_with_quality(&mut buf, self.config.jpeg_quality);
        encoder
            .write_image(&rgb_data, width, height, image::ExtendedColorType::Rgb8)
            .map_err(|e| RenderError::Encode {
                format: "JPEG",
                message: e.to_string(),
            })?;

        Ok(buf.into_inner())
    }
}

impl SceneExport for RasterExporter {
    fn name(&self) -> &'static str {
        "raster"
    }

    fn export(
        &self,
        scene: &Scene,
        path: &Path,
        format: ExportFormat,
    ) -> Result<ExportOutcome, ExportError> {
        let bytes = self.encode(scene, format)?;
        write_atomically(path, &bytes)?;
        Ok(ExportOutcome::Written {
            path: path.to_path_buf(),
            format,
        })
    }
}

/// Rasterize an SVG string to a tiny-skia Pixmap.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn rasterize_svg(svg_string: &str) -> RenderResult<tiny_skia::Pixmap> {
    let opt = usvg::Options::default();
    let tree =
        usvg::Tree::from_str(svg_string, &opt).map_err(|e| RenderError::Svg(e.to_string()))?;

    let px_w = tree.size().width().round() as u32;
    let px_h = tree.size().height().round() as u32;

    let mut pixmap = tiny_skia::Pixmap::new(px_w.max(1), px_h.max(1))
        .ok_or_else(|| RenderError::Rasterize(format!("cannot allocate {px_w}x{px_h} pixmap")))?;

    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    Ok(pixmap)
}
