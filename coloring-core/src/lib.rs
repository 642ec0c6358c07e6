//! # Coloring Core
//!
//! Core logic for the coloring canvas: freehand stroke capture, brush
//! state, decorative texture overlays, zoom, and the interface through
//! which a scene is exported.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                CanvasState                  │
//! │   InputEvent ──► handler ──► EventOutcome   │
//! ├──────────────────────┬──────────────────────┤
//! │  Scene               │  BrushState          │
//! │  - StrokeLog         │  - color             │
//! │  - Overlays          │  - width (clamped)   │
//! │  - ViewTransform     │                      │
//! ├──────────────────────┴──────────────────────┤
//! │  SceneExport (raster / vector fallback)     │
//! └─────────────────────────────────────────────┘
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod brush;
pub mod config;
pub mod error;
pub mod event;
pub mod export;
pub mod gallery;
pub mod geometry;
pub mod overlay;
pub mod scene;
pub mod state;
pub mod stroke;
pub mod view;

pub use brush::{BrushState, Color};
pub use config::{BrushConfig, CanvasConfig};
pub use error::{CanvasError, CanvasResult};
pub use event::InputEvent;
pub use export::{ExportError, ExportFormat, ExportOutcome, SceneExport};
pub use gallery::{Gallery, PageRef};
pub use geometry::Point;
pub use overlay::{Overlay, OverlayLine, OverlayPattern};
pub use scene::{Primitive, Scene};
pub use state::{CanvasState, EventOutcome};
pub use stroke::{Segment, Stroke, StrokeId, StrokeLog};
pub use view::ViewTransform;

/// Coloring core version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
