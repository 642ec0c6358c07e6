//! Gallery and coloring workspace.

use std::path::Path;

use anyhow::{Context, Result};
use coloring_core::{
    CanvasError, CanvasState, EventOutcome, ExportOutcome, Gallery, InputEvent, PageRef,
};
use coloring_renderer::select_exporter;

use crate::DesktopConfig;

/// Summary of a replayed event script.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScriptReport {
    /// Events handled.
    pub events: usize,
    /// Segments drawn incrementally.
    pub segments_drawn: usize,
    /// Full redraws requested.
    pub redraws: usize,
    /// Events rejected as invalid input.
    pub rejected: usize,
    /// Exports performed by save events.
    pub exports: Vec<ExportOutcome>,
}

/// Coloring book application.
///
/// Starts on the gallery; picking a page opens a fresh workspace and
/// discards any previous one.
pub struct ColoringApp {
    config: DesktopConfig,
    gallery: Gallery,
    page: Option<PageRef>,
    workspace: Option<CanvasState>,
}

impl ColoringApp {
    /// Create the application showing the gallery.
    #[must_use]
    pub fn new(config: DesktopConfig) -> Self {
        Self {
            config,
            gallery: Gallery::default(),
            page: None,
            workspace: None,
        }
    }

    /// The gallery.
    #[must_use]
    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    /// Page currently being colored.
    #[must_use]
    pub fn page(&self) -> Option<&PageRef> {
        self.page.as_ref()
    }

    /// The active workspace, if a page is open.
    #[must_use]
    pub fn workspace(&self) -> Option<&CanvasState> {
        self.workspace.as_ref()
    }

    /// Open a page from the gallery in a new workspace.
    ///
    /// # Errors
    ///
    /// Returns an error if the page does not exist. The current workspace
    /// is kept in that case.
    pub fn start_coloring(&mut self, category: &str, index: usize) -> Result<&PageRef> {
        let page = self.gallery.select(category, index)?;
        if let Some(previous) = self.page.replace(page) {
            tracing::debug!("Closing workspace for {}", previous.title());
        }

        let exporter = select_exporter(self.config.export.clone());
        self.workspace = Some(CanvasState::new(&self.config.canvas, exporter));

        let page = self.page.as_ref().context("page was just set")?;
        tracing::info!("{}: coloring {}", self.config.title, page.title());
        Ok(page)
    }

    /// Handle one input event in the active workspace.
    ///
    /// # Errors
    ///
    /// Returns an error if no page is open or the event handler fails.
    pub fn handle(&mut self, event: &InputEvent) -> Result<EventOutcome> {
        let workspace = self
            .workspace
            .as_mut()
            .context("no coloring page is open")?;
        Ok(workspace.process_event(event)?)
    }

    /// Replay recorded events.
    ///
    /// Invalid colors and unknown textures are skipped with a warning, as
    /// a toolkit would show a notice and carry on. Export failures stop
    /// the replay.
    ///
    /// # Errors
    ///
    /// Returns an error if no page is open or an export fails.
    pub fn run_script(&mut self, events: &[InputEvent]) -> Result<ScriptReport> {
        let mut report = ScriptReport::default();
        for event in events {
            report.events += 1;
            let workspace = self
                .workspace
                .as_mut()
                .context("no coloring page is open")?;
            match workspace.process_event(event) {
                Ok(EventOutcome::Unchanged) => {}
                Ok(EventOutcome::DrawSegment(_)) => report.segments_drawn += 1,
                Ok(EventOutcome::RedrawAll) => report.redraws += 1,
                Ok(EventOutcome::Exported(outcome)) => report.exports.push(outcome),
                Err(err @ (CanvasError::InvalidColor(_) | CanvasError::UnsupportedPattern(_))) => {
                    tracing::warn!("Ignoring {}: {err}", event.name());
                    report.rejected += 1;
                }
                Err(err) => {
                    return Err(err).with_context(|| format!("{} event failed", event.name()))
                }
            }
        }
        tracing::debug!("Script finished: {report:?}");
        Ok(report)
    }

    /// Load an event script from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_script(path: &Path) -> Result<Vec<InputEvent>> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading script {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parsing script {}", path.display()))
    }

    /// Save the active workspace to `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if no page is open or the export fails.
    pub fn save(&mut self, path: &Path, format: Option<&str>) -> Result<ExportOutcome> {
        if self.workspace.as_ref().is_some_and(|w| w.scene.is_empty()) {
            tracing::info!("Saving {} with nothing drawn", path.display());
        }
        let event = InputEvent::Save {
            path: path.to_path_buf(),
            format: format.map(ToString::to_string),
        };
        match self.handle(&event)? {
            EventOutcome::Exported(outcome) => Ok(outcome),
            other => anyhow::bail!("save produced {other:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coloring_renderer::ExportConfig;

    fn vector_app() -> ColoringApp {
        let mut config = DesktopConfig::new();
        config.export = ExportConfig {
            prefer_vector: true,
            ..ExportConfig::default()
        };
        ColoringApp::new(config)
    }

    #[test]
    fn test_events_need_an_open_page() {
        let mut app = vector_app();
        assert!(app
            .handle(&InputEvent::PointerPress { x: 0.0, y: 0.0 })
            .is_err());
    }

    #[test]
    fn test_start_coloring_replaces_workspace() {
        let mut app = vector_app();
        app.start_coloring("Nature", 0).expect("open");
        app.handle(&InputEvent::PointerPress { x: 0.0, y: 0.0 })
            .expect("press");
        app.handle(&InputEvent::PointerDrag { x: 5.0, y: 5.0 })
            .expect("drag");
        assert_eq!(app.workspace().expect("workspace").scene.segment_count(), 1);

        let page = app.start_coloring("Animals", 2).expect("open");
        assert_eq!(page.title(), "Animals 3");
        assert_eq!(app.workspace().expect("workspace").scene.segment_count(), 0);
    }

    #[test]
    fn test_unknown_page_keeps_workspace() {
        let mut app = vector_app();
        app.start_coloring("Nature", 0).expect("open");
        assert!(app.start_coloring("Nature", 9).is_err());
        assert_eq!(app.page().expect("page").title(), "Nature 1");
    }

    #[test]
    fn test_script_counts_and_skips_rejected_input() {
        let mut app = vector_app();
        app.start_coloring("Fantasy", 1).expect("open");
        let events = [
            InputEvent::PointerPress { x: 1.0, y: 1.0 },
            InputEvent::PointerDrag { x: 2.0, y: 2.0 },
            InputEvent::PointerDrag { x: 3.0, y: 3.0 },
            InputEvent::ColorPicked {
                color: "not a color".into(),
            },
            InputEvent::ApplyTexture {
                name: "polkadot".into(),
            },
            InputEvent::ApplyTexture {
                name: "crosshatch".into(),
            },
            InputEvent::Zoom { percent: 300 },
            InputEvent::Zoom { percent: 120 },
        ];
        let report = app.run_script(&events).expect("script");
        assert_eq!(report.events, 8);
        assert_eq!(report.segments_drawn, 2);
        assert_eq!(report.rejected, 2);
        assert_eq!(report.redraws, 2);
        assert!(report.exports.is_empty());
    }

    #[test]
    fn test_save_reports_vector_fallback() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut app = vector_app();
        app.start_coloring("Nature", 0).expect("open");

        let outcome = app
            .save(&dir.path().join("page.png"), None)
            .expect("save");
        assert!(outcome.is_degraded());
        assert!(dir.path().join("page.png.svg").exists());
    }

    #[test]
    fn test_load_script() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("events.json");
        std::fs::write(
            &path,
            r#"[{"type": "zoom", "data": {"percent": 150}},
                {"type": "brush_size", "data": {"value": 40}}]"#,
        )
        .expect("write");

        let events = ColoringApp::load_script(&path).expect("load");
        assert_eq!(events.len(), 2);
        assert_eq!(events[1], InputEvent::BrushSize { value: 40 });
    }
}
