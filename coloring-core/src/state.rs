//! Coloring session state and event handling.

use std::fmt;
use std::path::Path;

use crate::export::{ExportFormat, ExportOutcome, SceneExport};
use crate::overlay::OverlayPattern;
use crate::stroke::Segment;
use crate::{BrushState, CanvasConfig, CanvasResult, Color, InputEvent, Point, Scene};

/// What the renderer must do after an event was handled.
#[derive(Debug, Clone, PartialEq)]
pub enum EventOutcome {
    /// Nothing visible changed.
    Unchanged,
    /// Draw just this segment on top of what is shown.
    DrawSegment(Segment),
    /// Redraw the whole scene.
    RedrawAll,
    /// The scene was exported.
    Exported(ExportOutcome),
}

/// The complete state of one coloring session.
///
/// Owns the scene, the brush, and the export strategy selected at startup.
/// All mutation happens through `&mut self` on the event-loop thread.
pub struct CanvasState {
    /// The scene being colored.
    pub scene: Scene,
    brush: BrushState,
    exporter: Box<dyn SceneExport>,
}

impl CanvasState {
    /// Create a session with an empty scene.
    #[must_use]
    pub fn new(config: &CanvasConfig, exporter: Box<dyn SceneExport>) -> Self {
        tracing::debug!(
            "New canvas {}x{} exporting via {}",
            config.width,
            config.height,
            exporter.name()
        );
        Self {
            scene: Scene::with_config(config),
            brush: BrushState::new(&config.brush),
            exporter,
        }
    }

    /// Current brush.
    #[must_use]
    pub fn brush(&self) -> &BrushState {
        &self.brush
    }

    /// Name of the active export strategy.
    #[must_use]
    pub fn exporter_name(&self) -> &'static str {
        self.exporter.name()
    }

    /// Dispatch an input event to its handler.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown colors or patterns and for failed
    /// exports. The scene is unchanged in every error case.
    pub fn process_event(&mut self, event: &InputEvent) -> CanvasResult<EventOutcome> {
        tracing::trace!("Event: {}", event.name());
        match event {
            InputEvent::PointerPress { x, y } => Ok(self.on_pointer_press(Point::new(*x, *y))),
            InputEvent::PointerDrag { x, y } => Ok(self.on_pointer_drag(Point::new(*x, *y))),
            InputEvent::ColorPicked { color } => self.on_color_picked(color),
            InputEvent::BrushSize { value } => Ok(self.on_brush_size(*value)),
            InputEvent::Zoom { percent } => Ok(self.on_zoom(*percent)),
            InputEvent::ApplyTexture { name } => self.on_apply_texture(name),
            InputEvent::Save { path, format } => self.on_save(path, format.as_deref()),
        }
    }

    /// Start a stroke.
    pub fn on_pointer_press(&mut self, point: Point) -> EventOutcome {
        self.scene.begin_stroke(point);
        EventOutcome::Unchanged
    }

    /// Extend the open stroke with the current brush.
    pub fn on_pointer_drag(&mut self, point: Point) -> EventOutcome {
        match self
            .scene
            .extend_stroke(point, self.brush.color(), self.brush.width())
        {
            Some(segment) => EventOutcome::DrawSegment(segment),
            None => EventOutcome::Unchanged,
        }
    }

    /// Set the brush color from a picker result.
    ///
    /// # Errors
    ///
    /// Returns [`crate::CanvasError::InvalidColor`] if the color cannot be parsed.
    pub fn on_color_picked(&mut self, color: &str) -> CanvasResult<EventOutcome> {
        let color: Color = color.parse()?;
        self.brush.set_color(color);
        Ok(EventOutcome::Unchanged)
    }

    /// Set the brush width, pinned to the configured bounds.
    pub fn on_brush_size(&mut self, value: i64) -> EventOutcome {
        self.brush.set_width(value);
        EventOutcome::Unchanged
    }

    /// Zoom to `percent` / 100. Out-of-range values are ignored.
    #[allow(clippy::cast_precision_loss)]
    pub fn on_zoom(&mut self, percent: u32) -> EventOutcome {
        if self.scene.set_zoom(percent as f32 / 100.0) {
            EventOutcome::RedrawAll
        } else {
            EventOutcome::Unchanged
        }
    }

    /// Apply a texture overlay by name.
    ///
    /// # Errors
    ///
    /// Returns [`crate::CanvasError::UnsupportedPattern`] for unknown names.
    pub fn on_apply_texture(&mut self, name: &str) -> CanvasResult<EventOutcome> {
        let pattern: OverlayPattern = name.parse()?;
        self.scene.apply_texture(pattern);
        Ok(EventOutcome::RedrawAll)
    }

    /// Export the scene. The format is parsed before anything is written.
    ///
    /// # Errors
    ///
    /// Returns an export error for unsupported formats or failed writes.
    pub fn on_save(&self, path: &Path, format: Option<&str>) -> CanvasResult<EventOutcome> {
        let format = match format {
            Some(name) => name.parse::<ExportFormat>()?,
            None => ExportFormat::from_path(path),
        };
        let outcome = self.export(path, format)?;
        Ok(EventOutcome::Exported(outcome))
    }

    /// Export the scene as it is right now.
    ///
    /// # Errors
    ///
    /// Returns an error if the export backend fails.
    pub fn export(&self, path: &Path, format: ExportFormat) -> CanvasResult<ExportOutcome> {
        let outcome = self.exporter.export(&self.scene, path, format)?;
        if outcome.is_degraded() {
            tracing::warn!("{outcome}");
        } else {
            tracing::info!("{outcome}");
        }
        Ok(outcome)
    }
}

impl fmt::Debug for CanvasState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CanvasState")
            .field("scene", &self.scene)
            .field("brush", &self.brush)
            .field("exporter", &self.exporter.name())
            .finish()
    }
}
