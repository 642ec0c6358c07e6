//! Input events delivered by the windowing toolkit.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// All input events the coloring canvas reacts to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum InputEvent {
    /// Primary button pressed on the canvas.
    PointerPress {
        /// X coordinate.
        x: f32,
        /// Y coordinate.
        y: f32,
    },

    /// Pointer moved with the primary button held.
    PointerDrag {
        /// X coordinate.
        x: f32,
        /// Y coordinate.
        y: f32,
    },

    /// Result of the color picker dialog.
    ColorPicked {
        /// Color as `#rrggbb` or a color name.
        color: String,
    },

    /// Brush size slider moved.
    BrushSize {
        /// Requested width.
        value: i64,
    },

    /// Zoom slider moved.
    Zoom {
        /// Zoom in percent (100 = unscaled).
        percent: u32,
    },

    /// Texture button clicked.
    ApplyTexture {
        /// Pattern name.
        name: String,
    },

    /// Result of the save dialog.
    Save {
        /// Destination path.
        path: PathBuf,
        /// Explicit format; inferred from the path when absent.
        #[serde(default)]
        format: Option<String>,
    },
}

impl InputEvent {
    /// Event name for logging.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::PointerPress { .. } => "pointer_press",
            Self::PointerDrag { .. } => "pointer_drag",
            Self::ColorPicked { .. } => "color_picked",
            Self::BrushSize { .. } => "brush_size",
            Self::Zoom { .. } => "zoom",
            Self::ApplyTexture { .. } => "apply_texture",
            Self::Save { .. } => "save",
        }
    }
}
