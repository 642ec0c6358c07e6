//! The scene: strokes, overlays and the view transform.

use serde::{Deserialize, Serialize};

use crate::config::CanvasConfig;
use crate::overlay::{Overlay, OverlayPattern};
use crate::stroke::{Segment, StrokeId, StrokeLog};
use crate::view::ViewTransform;
use crate::{Color, CanvasError, CanvasResult, Point};

/// A drawable primitive, borrowed from the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive<'a> {
    /// A stroke segment.
    Segment(&'a Segment),
    /// All lines of one overlay application.
    Overlay(&'a Overlay),
}

impl Primitive<'_> {
    /// Draw order.
    #[must_use]
    pub fn z_index(&self) -> u64 {
        match self {
            Self::Segment(s) => s.z_index,
            Self::Overlay(o) => o.z_index,
        }
    }
}

/// Everything drawn on the canvas during one coloring session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// Canvas width in pixels, before zoom.
    pub width: u32,
    /// Canvas height in pixels, before zoom.
    pub height: u32,
    texture_step: u32,
    strokes: StrokeLog,
    overlays: Vec<Overlay>,
    view: ViewTransform,
    next_z: u64,
}

impl Scene {
    /// Create an empty scene of the given size.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_config(&CanvasConfig {
            width,
            height,
            ..CanvasConfig::default()
        })
    }

    /// Create an empty scene from a configuration.
    #[must_use]
    pub fn with_config(config: &CanvasConfig) -> Self {
        Self {
            width: config.width,
            height: config.height,
            texture_step: config.texture_step,
            strokes: StrokeLog::new(),
            overlays: Vec::new(),
            view: ViewTransform::new(),
            next_z: 0,
        }
    }

    fn take_z(&mut self) -> u64 {
        let z = self.next_z;
        self.next_z += 1;
        z
    }

    /// Start a stroke at `point`.
    pub fn begin_stroke(&mut self, point: Point) -> StrokeId {
        self.strokes.begin(point)
    }

    /// Extend the open stroke to `point` with the given style.
    ///
    /// Returns the segment to draw incrementally.
    pub fn extend_stroke(&mut self, point: Point, color: Color, width: u32) -> Option<Segment> {
        let z = self.next_z;
        let segment = self.strokes.extend(point, color, width, z)?;
        self.next_z += 1;
        Some(segment)
    }

    /// Generate `pattern` at the current canvas size and add it on top.
    ///
    /// Overlays stack: applying the same pattern twice adds two overlays.
    pub fn apply_texture(&mut self, pattern: OverlayPattern) -> &Overlay {
        let z = self.take_z();
        let overlay = Overlay::generate(pattern, self.width, self.height, self.texture_step, z);
        tracing::debug!("Applied {pattern} overlay with {} lines", overlay.lines().len());
        self.overlays.push(overlay);
        &self.overlays[self.overlays.len() - 1]
    }

    /// Zoom to an absolute factor in `[0.5, 2.0]`.
    ///
    /// Out-of-range factors leave the scene untouched and return `false`.
    pub fn set_zoom(&mut self, target: f32) -> bool {
        let Some(ratio) = self.view.retarget(target) else {
            return false;
        };
        self.strokes.scale(ratio);
        for overlay in &mut self.overlays {
            overlay.scale(ratio);
        }
        true
    }

    /// Current absolute zoom factor.
    #[must_use]
    pub fn zoom(&self) -> f32 {
        self.view.scale_factor()
    }

    /// The stroke log.
    #[must_use]
    pub fn strokes(&self) -> &StrokeLog {
        &self.strokes
    }

    /// Overlays in application order.
    #[must_use]
    pub fn overlays(&self) -> &[Overlay] {
        &self.overlays
    }

    /// Number of stroke segments.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.strokes.segment_count()
    }

    /// Number of overlay lines across all overlays.
    #[must_use]
    pub fn overlay_line_count(&self) -> usize {
        self.overlays.iter().map(|o| o.lines().len()).sum()
    }

    /// All primitives sorted by draw order.
    #[must_use]
    pub fn primitives(&self) -> Vec<Primitive<'_>> {
        let mut primitives: Vec<_> = self
            .strokes
            .segments()
            .map(Primitive::Segment)
            .chain(self.overlays.iter().map(Primitive::Overlay))
            .collect();
        primitives.sort_by_key(|p| p.z_index());
        primitives
    }

    /// Size of the visible scene at the current zoom, in whole pixels.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn output_size(&self) -> (u32, u32) {
        let zoom = self.zoom();
        let w = (self.width as f32 * zoom).round() as u32;
        let h = (self.height as f32 * zoom).round() as u32;
        (w.max(1), h.max(1))
    }

    /// Check if nothing has been drawn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segment_count() == 0 && self.overlays.is_empty()
    }

    /// Serialize the scene to JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> CanvasResult<String> {
        serde_json::to_string(self).map_err(CanvasError::Serialization)
    }

    /// Deserialize a scene from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if deserialization fails.
    pub fn from_json(json: &str) -> CanvasResult<Self> {
        serde_json::from_str(json).map_err(CanvasError::Serialization)
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::with_config(&CanvasConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    fn drawn_scene() -> Scene {
        let mut scene = Scene::new(800, 600);
        scene.begin_stroke(Point::new(100.0, 100.0));
        scene.extend_stroke(Point::new(200.0, 40.0), Color::BLACK, 5);
        scene.apply_texture(OverlayPattern::Crosshatch);
        scene
    }

    #[test]
    fn test_zoom_composes_absolutely() {
        let mut scene = drawn_scene();
        assert!(scene.set_zoom(1.5));
        assert!(scene.set_zoom(0.75));

        let seg = scene.strokes().segments().next().expect("segment");
        assert!(close(seg.start.x, 75.0));
        assert!(close(seg.start.y, 75.0));
        assert!(close(seg.end.x, 150.0));
        assert!(close(seg.end.y, 30.0));
        assert!(close(scene.zoom(), 0.75));

        let line = scene.overlays()[0].lines()[1];
        assert!(close(line.start.x, 7.5));
        assert!(close(line.end.y, 450.0));
    }

    #[test]
    fn test_out_of_range_zoom_is_noop() {
        let mut scene = drawn_scene();
        let before = scene.clone();
        assert!(!scene.set_zoom(0.4));
        assert!(!scene.set_zoom(2.5));
        assert_eq!(scene, before);
    }

    #[test]
    fn test_zoom_keeps_widths() {
        let mut scene = drawn_scene();
        scene.set_zoom(2.0);
        let seg = scene.strokes().segments().next().expect("segment");
        assert_eq!(seg.width, 5);
    }

    #[test]
    fn test_strokes_after_zoom_are_in_view_space() {
        let mut scene = Scene::new(100, 100);
        scene.set_zoom(2.0);
        scene.begin_stroke(Point::new(10.0, 10.0));
        scene.extend_stroke(Point::new(20.0, 20.0), Color::BLACK, 1);
        scene.set_zoom(1.0);

        let seg = scene.strokes().segments().next().expect("segment");
        assert!(close(seg.start.x, 5.0));
        assert!(close(seg.end.x, 10.0));
    }

    #[test]
    fn test_texture_is_additive() {
        let mut scene = Scene::new(800, 600);
        assert_eq!(scene.apply_texture(OverlayPattern::Crosshatch).lines().len(), 140);
        scene.apply_texture(OverlayPattern::Crosshatch);
        assert_eq!(scene.overlays().len(), 2);
        assert_eq!(scene.overlay_line_count(), 280);
    }

    #[test]
    fn test_texture_uses_unzoomed_canvas_size() {
        let mut scene = Scene::new(800, 600);
        scene.set_zoom(2.0);
        let overlay = scene.apply_texture(OverlayPattern::Crosshatch);
        assert_eq!(overlay.lines().len(), 140);
        assert!(close(overlay.lines()[0].end.y, 600.0));
    }

    #[test]
    fn test_primitives_follow_creation_order() {
        let mut scene = Scene::new(50, 50);
        scene.begin_stroke(Point::new(0.0, 0.0));
        scene.extend_stroke(Point::new(1.0, 1.0), Color::BLACK, 1);
        scene.apply_texture(OverlayPattern::Crosshatch);
        scene.begin_stroke(Point::new(2.0, 2.0));
        scene.extend_stroke(Point::new(3.0, 3.0), Color::BLACK, 1);

        let kinds: Vec<_> = scene
            .primitives()
            .iter()
            .map(|p| matches!(p, Primitive::Overlay(_)))
            .collect();
        assert_eq!(kinds, vec![false, true, false]);
    }

    #[test]
    fn test_output_size_tracks_zoom() {
        let mut scene = Scene::new(800, 600);
        assert_eq!(scene.output_size(), (800, 600));
        scene.set_zoom(0.5);
        assert_eq!(scene.output_size(), (400, 300));
        scene.set_zoom(1.25);
        assert_eq!(scene.output_size(), (1000, 750));
    }

    #[test]
    fn test_from_json_rejects_invalid_zoom() {
        let mut scene = drawn_scene();
        scene.set_zoom(1.5);
        let json = scene.to_json().expect("serialize");
        assert!(json.contains(r#""scale_factor":1.5"#));

        for bad in ["0.0", "5.0"] {
            let tampered = json.replace(
                r#""scale_factor":1.5"#,
                &format!(r#""scale_factor":{bad}"#),
            );
            let err = Scene::from_json(&tampered).unwrap_err();
            assert!(matches!(err, CanvasError::Serialization(_)));
        }
    }

    #[test]
    fn test_loaded_scene_zooms_to_finite_points() {
        let json = drawn_scene().to_json().expect("serialize");
        let mut scene = Scene::from_json(&json).expect("deserialize");
        assert!(scene.set_zoom(0.5));
        let seg = scene.strokes().segments().next().expect("segment");
        assert!(seg.start.x.is_finite() && seg.end.y.is_finite());
        assert!(close(seg.start.x, 50.0));
    }

    #[test]
    fn test_is_empty() {
        let mut scene = Scene::new(100, 100);
        assert!(scene.is_empty());
        scene.begin_stroke(Point::new(1.0, 1.0));
        assert!(scene.is_empty());
        scene.extend_stroke(Point::new(2.0, 2.0), Color::BLACK, 1);
        assert!(!scene.is_empty());
        assert!(!drawn_scene().is_empty());
    }

    #[test]
    fn test_json_roundtrip() {
        let scene = drawn_scene();
        let json = scene.to_json().expect("serialize");
        let back = Scene::from_json(&json).expect("deserialize");
        assert_eq!(back, scene);
    }
}
