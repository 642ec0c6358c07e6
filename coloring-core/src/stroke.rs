//! Freehand strokes recorded as line segments.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::brush::Color;
use crate::geometry::Point;

/// Unique identifier for a stroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StrokeId(Uuid);

impl StrokeId {
    /// Create a new unique stroke ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for StrokeId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for StrokeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One straight piece of a stroke with its own captured style.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Start point.
    pub start: Point,
    /// End point.
    pub end: Point,
    /// Color at creation time.
    pub color: Color,
    /// Width at creation time.
    pub width: u32,
    /// Draw order within the scene.
    pub z_index: u64,
}

impl Segment {
    fn scale(&mut self, factor: f32) {
        self.start = self.start.scaled(factor);
        self.end = self.end.scaled(factor);
    }
}

/// One continuous pointer-drag gesture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    /// Unique identifier.
    pub id: StrokeId,
    /// Where the pointer went down.
    pub anchor: Point,
    segments: Vec<Segment>,
}

impl Stroke {
    fn new(anchor: Point) -> Self {
        Self {
            id: StrokeId::new(),
            anchor,
            segments: Vec::new(),
        }
    }

    /// Segments in drawing order.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }
}

/// Append-only log of all strokes in a session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StrokeLog {
    strokes: Vec<Stroke>,
    cursor: Option<Point>,
}

impl StrokeLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a new stroke anchored at `point`. Nothing is drawn yet.
    pub fn begin(&mut self, point: Point) -> StrokeId {
        let stroke = Stroke::new(point);
        let id = stroke.id;
        self.strokes.push(stroke);
        self.cursor = Some(point);
        id
    }

    /// Append a segment from the current position to `point`.
    ///
    /// Returns the new segment, or `None` when no stroke was open; in
    /// that case a stroke is opened at `point` instead.
    pub fn extend(&mut self, point: Point, color: Color, width: u32, z_index: u64) -> Option<Segment> {
        let Some(start) = self.cursor else {
            tracing::debug!("Drag without press at ({}, {}), opening stroke", point.x, point.y);
            self.begin(point);
            return None;
        };

        let segment = Segment {
            start,
            end: point,
            color,
            width,
            z_index,
        };
        // cursor is only set after a stroke is pushed
        if let Some(stroke) = self.strokes.last_mut() {
            stroke.segments.push(segment);
        }
        self.cursor = Some(point);
        Some(segment)
    }

    /// All strokes in creation order.
    #[must_use]
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    /// All segments across strokes, in creation order.
    pub fn segments(&self) -> impl Iterator<Item = &Segment> {
        self.strokes.iter().flat_map(|s| s.segments.iter())
    }

    /// Total number of segments.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.strokes.iter().map(|s| s.segments.len()).sum()
    }

    /// Current pointer position, if a stroke is open.
    #[must_use]
    pub fn cursor(&self) -> Option<Point> {
        self.cursor
    }

    /// Rescale all geometry about the origin. Style is untouched.
    pub(crate) fn scale(&mut self, factor: f32) {
        for stroke in &mut self.strokes {
            stroke.anchor = stroke.anchor.scaled(factor);
            for segment in &mut stroke.segments {
                segment.scale(factor);
            }
        }
        self.cursor = self.cursor.map(|c| c.scaled(factor));
    }
}
