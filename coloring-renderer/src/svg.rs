//! SVG scene description.
//!
//! This is the intermediate vector form fed to the rasterizer and the
//! document written when raster export is unavailable.

use std::fmt::Write;

use coloring_core::{Color, Overlay, Primitive, Scene, Segment};

/// Render the scene at its current zoom to an SVG document.
///
/// Geometry is already in view space, so the document size is the
/// zoomed canvas size and the view box matches it one to one.
#[must_use]
pub fn render_scene(scene: &Scene, background: Color) -> String {
    let (w, h) = scene.output_size();

    let mut svg = String::with_capacity(4096);
    let _ = write!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">",
    );
    let _ = write!(
        svg,
        "<rect width=\"100%\" height=\"100%\" fill=\"{background}\"/>"
    );

    for primitive in scene.primitives() {
        match primitive {
            Primitive::Segment(segment) => render_segment(&mut svg, segment),
            Primitive::Overlay(overlay) => render_overlay(&mut svg, overlay),
        }
    }

    svg.push_str("</svg>");
    svg
}

fn render_segment(svg: &mut String, segment: &Segment) {
    let (a, b) = (segment.start, segment.end);
    let _ = write!(
        svg,
        "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"{}\" stroke-linecap=\"round\"/>",
        a.x, a.y, b.x, b.y, segment.color, segment.width,
    );
}

fn render_overlay(svg: &mut String, overlay: &Overlay) {
    let (on, off) = overlay.pattern.dash();
    let _ = write!(
        svg,
        "<g class=\"{}\" stroke=\"{}\" stroke-width=\"1\" stroke-dasharray=\"{on} {off}\" fill=\"none\">",
        overlay.pattern,
        overlay.pattern.color(),
    );
    for line in overlay.lines() {
        let _ = write!(
            svg,
            "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\"/>",
            line.start.x, line.start.y, line.end.x, line.end.y,
        );
    }
    svg.push_str("</g>");
}

#[cfg(test)]
mod tests {
    use super::*;
    use coloring_core::{OverlayPattern, Point};

    #[test]
    fn test_empty_scene() {
        let scene = Scene::new(800, 600);
        let svg = render_scene(&scene, Color::WHITE);
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains("width=\"800\""));
        assert!(svg.contains("height=\"600\""));
        assert!(svg.contains("fill=\"#ffffff\""));
    }

    #[test]
    fn test_segment_carries_its_style() {
        let mut scene = Scene::new(100, 100);
        scene.begin_stroke(Point::new(1.0, 2.0));
        scene.extend_stroke(Point::new(30.0, 40.0), Color::rgb(255, 0, 0), 7);

        let svg = render_scene(&scene, Color::WHITE);
        assert!(svg.contains(
            "<line x1=\"1\" y1=\"2\" x2=\"30\" y2=\"40\" stroke=\"#ff0000\" stroke-width=\"7\""
        ));
    }

    #[test]
    fn test_overlay_is_dashed_grey() {
        let mut scene = Scene::new(20, 20);
        scene.apply_texture(OverlayPattern::Crosshatch);

        let svg = render_scene(&scene, Color::WHITE);
        assert!(svg.contains("stroke=\"#bebebe\""));
        assert!(svg.contains("stroke-dasharray=\"2 2\""));
        // 2 vertical + 2 horizontal
        assert_eq!(svg.matches("<line").count(), 4);
    }

    #[test]
    fn test_zoomed_document_size() {
        let mut scene = Scene::new(800, 600);
        scene.set_zoom(0.5);
        let svg = render_scene(&scene, Color::WHITE);
        assert!(svg.contains("width=\"400\" height=\"300\" viewBox=\"0 0 400 300\""));
    }

    #[test]
    fn test_primitives_in_creation_order() {
        let mut scene = Scene::new(20, 20);
        scene.apply_texture(OverlayPattern::Crosshatch);
        scene.begin_stroke(Point::new(0.0, 0.0));
        scene.extend_stroke(Point::new(5.0, 5.0), Color::BLACK, 2);

        let svg = render_scene(&scene, Color::WHITE);
        let overlay_at = svg.find("<g class=\"crosshatch\"").expect("overlay");
        let stroke_at = svg.find("stroke=\"#000000\"").expect("stroke");
        assert!(overlay_at < stroke_at);
    }
}
