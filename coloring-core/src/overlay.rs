//! Decorative texture overlays drawn over the strokes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::brush::Color;
use crate::geometry::Point;
use crate::{CanvasError, CanvasResult};

/// Known texture patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverlayPattern {
    /// Grid of dashed vertical and horizontal lines.
    Crosshatch,
}

impl OverlayPattern {
    /// Pattern name as accepted by [`FromStr`].
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Crosshatch => "crosshatch",
        }
    }

    /// Line color for this pattern.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Self::Crosshatch => Color::GREY,
        }
    }

    /// Dash pattern as `(on, off)` lengths.
    #[must_use]
    pub fn dash(self) -> (u32, u32) {
        match self {
            Self::Crosshatch => (2, 2),
        }
    }

    /// Expand the pattern into lines covering a `width` x `height` area.
    ///
    /// A `step` of zero is treated as one.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn lines(self, width: u32, height: u32, step: u32) -> Vec<OverlayLine> {
        let step = step.max(1) as usize;
        match self {
            Self::Crosshatch => {
                let (w, h) = (width as f32, height as f32);
                let vertical = (0..width).step_by(step).map(|x| {
                    let x = x as f32;
                    OverlayLine::new(Point::new(x, 0.0), Point::new(x, h))
                });
                let horizontal = (0..height).step_by(step).map(|y| {
                    let y = y as f32;
                    OverlayLine::new(Point::new(0.0, y), Point::new(w, y))
                });
                vertical.chain(horizontal).collect()
            }
        }
    }
}

impl fmt::Display for OverlayPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OverlayPattern {
    type Err = CanvasError;

    fn from_str(s: &str) -> CanvasResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "crosshatch" => Ok(Self::Crosshatch),
            _ => Err(CanvasError::UnsupportedPattern(s.to_string())),
        }
    }
}

/// A single overlay line in scene coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverlayLine {
    /// Start point.
    pub start: Point,
    /// End point.
    pub end: Point,
}

impl OverlayLine {
    /// Create a line.
    #[must_use]
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Whether the line runs top to bottom.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_vertical(&self) -> bool {
        self.start.x == self.end.x
    }
}

/// One application of a pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Overlay {
    /// Pattern that produced the lines.
    pub pattern: OverlayPattern,
    /// Draw order within the scene.
    pub z_index: u64,
    lines: Vec<OverlayLine>,
}

impl Overlay {
    /// Generate an overlay for the given canvas size.
    #[must_use]
    pub fn generate(pattern: OverlayPattern, width: u32, height: u32, step: u32, z_index: u64) -> Self {
        Self {
            pattern,
            z_index,
            lines: pattern.lines(width, height, step),
        }
    }

    /// Lines in generation order.
    #[must_use]
    pub fn lines(&self) -> &[OverlayLine] {
        &self.lines
    }

    pub(crate) fn scale(&mut self, factor: f32) {
        for line in &mut self.lines {
            line.start = line.start.scaled(factor);
            line.end = line.end.scaled(factor);
        }
    }
}
