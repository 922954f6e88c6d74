//! Rendering der Zeichenfläche: vollständiges Neuzeichnen pro Änderung.

mod egui_surface;
pub mod recording;
mod surface;

pub use crate::shared::RenderScene;
pub use egui_surface::EguiSurface;
pub use recording::{DrawOp, RecordingSurface};
pub use surface::{StrokeStyle, Surface};

use crate::shared::{HandleShape, SegmentShape, SketchOptions};
use glam::Vec2;

/// Haupt-Renderer für Segmente, Kontrollpolygone und Punkt-Handles.
///
/// Zustandslos: jeder Aufruf von [`Renderer::draw_all`] zeichnet die komplette
/// Szene neu und verändert weder Punkte noch Segmente.
#[derive(Debug, Default, Clone, Copy)]
pub struct Renderer;

impl Renderer {
    /// Erstellt einen neuen Renderer
    pub fn new() -> Self {
        Self
    }

    /// Löscht die Fläche und zeichnet alle Segmente (Commit-Reihenfolge), danach die Handles.
    pub fn draw_all(&self, scene: &RenderScene, surface: &mut impl Surface) {
        let options = &scene.options;
        surface.clear(options.background_color);

        for segment in &scene.segments {
            draw_segment(segment, options, surface);
        }

        for handle in &scene.handles {
            draw_handle(handle, options, surface);
        }
    }
}

/// Zeichnet ein Segment je nach Punktanzahl plus Kontrollpolygon.
fn draw_segment(segment: &SegmentShape, options: &SketchOptions, surface: &mut impl Surface) {
    let curve = StrokeStyle::new(options.curve_width, options.curve_color);

    match segment.points.as_slice() {
        &[a, b] => surface.stroke_line(a, b, curve),
        &[a, b, c] => surface.stroke_quadratic(a, b, c, curve),
        &[a, b, c, d] => surface.stroke_cubic(a, b, c, d, curve),
        _ => return,
    }

    // Kontrollpolygon als dezente Orientierungshilfe
    let polygon = StrokeStyle::new(options.control_polygon_width, options.control_polygon_color);
    surface.stroke_polyline(&segment.points, polygon);
}

fn draw_handle(handle: &HandleShape, options: &SketchOptions, surface: &mut impl Surface) {
    let color = if handle.dragging {
        options.handle_color_dragging
    } else {
        options.handle_color
    };
    surface.draw_handle(handle.position, options.handle_radius, color);

    let anchor = handle.position + Vec2::from(options.label_offset);
    surface.draw_label(
        anchor,
        &handle.label,
        options.label_font_size,
        options.label_color,
    );
}
