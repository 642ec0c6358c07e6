//! # Coloring Desktop
//!
//! Desktop host for the coloring book.
//!
//! The host owns the gallery and, once a page is picked, one coloring
//! session. Input arrives as [`InputEvent`](coloring_core::InputEvent)s;
//! a recorded event script stands in for the windowing toolkit.
//!
//! ## Usage
//!
//! ```bash
//! cargo run -p coloring-desktop -- --category Animals --page 1 \
//!     --script strokes.json --output art.png
//! ```
//!
//! ## Architecture
//!
//! - `CliArgs` - Command-line arguments parsed with clap
//! - `DesktopConfig` - Canvas, export and page selection settings
//! - `ColoringApp` - Gallery plus the active coloring workspace

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]

mod app;

pub use app::{ColoringApp, ScriptReport};

use std::path::PathBuf;

use clap::Parser;
use coloring_core::CanvasConfig;
use coloring_renderer::ExportConfig;

/// Command-line arguments for coloring-desktop.
#[derive(Debug, Clone, Parser)]
#[command(name = "coloring-desktop")]
#[command(about = "Freehand coloring book")]
#[command(version)]
pub struct CliArgs {
    /// Gallery category to open
    #[arg(long, default_value = "Nature")]
    pub category: String,

    /// Page within the category (1-based)
    #[arg(
        long,
        default_value = "1",
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub page: usize,

    /// Canvas width in pixels
    #[arg(long, default_value = "800")]
    pub width: u32,

    /// Canvas height in pixels
    #[arg(long, default_value = "600")]
    pub height: u32,

    /// JSON file with recorded input events to replay
    #[arg(long, env = "COLORING_SCRIPT")]
    pub script: Option<PathBuf>,

    /// Save the finished page to this path
    #[arg(long, env = "COLORING_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Output format (png or jpeg); inferred from the output path if omitted
    #[arg(long)]
    pub format: Option<String>,

    /// Always save SVG documents instead of raster images
    #[arg(long, env = "COLORING_VECTOR_ONLY")]
    pub vector_only: bool,

    /// JPEG quality 1-100
    #[arg(long, default_value = "85", value_parser = clap::value_parser!(u8).range(1..=100))]
    pub jpeg_quality: u8,
}

/// Desktop application configuration.
#[derive(Debug, Clone)]
pub struct DesktopConfig {
    /// Window title.
    pub title: String,
    /// Canvas settings for new sessions.
    pub canvas: CanvasConfig,
    /// Export settings.
    pub export: ExportConfig,
    /// Category to open.
    pub category: String,
    /// Zero-based page index.
    pub page_index: usize,
    /// Event script to replay.
    pub script: Option<PathBuf>,
    /// Final save destination.
    pub output: Option<PathBuf>,
    /// Final save format.
    pub format: Option<String>,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl DesktopConfig {
    /// Create a new desktop configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: "Artistic Coloring Book".to_string(),
            canvas: CanvasConfig::default(),
            export: ExportConfig::default(),
            category: "Nature".to_string(),
            page_index: 0,
            script: None,
            output: None,
            format: None,
        }
    }
}

impl From<CliArgs> for DesktopConfig {
    fn from(args: CliArgs) -> Self {
        Self {
            canvas: CanvasConfig {
                width: args.width,
                height: args.height,
                ..CanvasConfig::default()
            },
            export: ExportConfig {
                jpeg_quality: args.jpeg_quality,
                prefer_vector: args.vector_only,
                ..ExportConfig::default()
            },
            category: args.category,
            page_index: args.page.saturating_sub(1),
            script: args.script,
            output: args.output,
            format: args.format,
            ..Self::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let args = CliArgs::parse_from(["coloring-desktop"]);
        let config = DesktopConfig::from(args);
        assert_eq!(config.canvas.width, 800);
        assert_eq!(config.canvas.height, 600);
        assert_eq!(config.category, "Nature");
        assert_eq!(config.page_index, 0);
        assert_eq!(config.export.jpeg_quality, 85);
        assert!(!config.export.prefer_vector);
    }

    #[test]
    fn test_cli_overrides() {
        let args = CliArgs::parse_from([
            "coloring-desktop",
            "--category",
            "Fantasy",
            "--page",
            "3",
            "--width",
            "400",
            "--vector-only",
            "--output",
            "art.png",
        ]);
        let config = DesktopConfig::from(args);
        assert_eq!(config.category, "Fantasy");
        assert_eq!(config.page_index, 2);
        assert_eq!(config.canvas.width, 400);
        assert!(config.export.prefer_vector);
        assert_eq!(config.output, Some(PathBuf::from("art.png")));
    }

    #[test]
    fn test_page_is_one_based() {
        assert!(CliArgs::try_parse_from(["coloring-desktop", "--page", "0"]).is_err());
        let args = CliArgs::try_parse_from(["coloring-desktop", "--page", "1"]).unwrap();
        assert_eq!(DesktopConfig::from(args).page_index, 0);
    }

    #[test]
    fn test_cli_keeps_title() {
        let config = DesktopConfig::from(CliArgs::parse_from(["coloring-desktop"]));
        assert_eq!(config.title, DesktopConfig::new().title);
    }

    #[test]
    fn test_jpeg_quality_range() {
        assert!(CliArgs::try_parse_from(["coloring-desktop", "--jpeg-quality", "0"]).is_err());
    }
}
