//! # Coloring Renderer
//!
//! Turns a coloring [`Scene`](coloring_core::Scene) into a file.
//!
//! ## Export Strategies
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │        SceneExport (coloring-core)          │
//! ├──────────────────────┬──────────────────────┤
//! │ RasterExporter       │ VectorExporter       │
//! │ SVG → resvg → PNG/JPG│ SVG → path + ".svg"  │
//! │ (feature "raster")   │ (always available)   │
//! └──────────────────────┴──────────────────────┘
//! ```
//!
//! [`select_exporter`] picks one when the session starts.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod export;
#[cfg(feature = "raster")]
pub mod raster;
pub mod svg;
pub mod vector;

pub use error::{RenderError, RenderResult};
pub use export::{raster_available, select_exporter, ExportConfig};
#[cfg(feature = "raster")]
pub use raster::RasterExporter;
pub use vector::{VectorExporter, VECTOR_SUFFIX};
