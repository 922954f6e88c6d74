//! Abstrakte 2D-Zeichenfläche (Clear, Linie, Bézier, Polylinie, Handles, Labels).

use glam::Vec2;

/// Linienstil eines Strichs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    /// Linienstärke in Pixeln
    pub width: f32,
    /// Farbe (RGBA, 0.0–1.0)
    pub color: [f32; 4],
}

impl StrokeStyle {
    pub fn new(width: f32, color: [f32; 4]) -> Self {
        Self { width, color }
    }
}

/// Zeichen-Primitiven, die der [`Renderer`](super::Renderer) benötigt.
///
/// Koordinaten sind Canvas-Koordinaten (Ursprung oben links).
pub trait Surface {
    /// Löscht die gesamte Fläche mit der Hintergrundfarbe.
    fn clear(&mut self, color: [f32; 4]);

    /// Gerade Linie von `from` nach `to`.
    fn stroke_line(&mut self, from: Vec2, to: Vec2, style: StrokeStyle);

    /// Quadratische Bézier-Kurve.
    fn stroke_quadratic(&mut self, start: Vec2, control: Vec2, end: Vec2, style: StrokeStyle);

    /// Kubische Bézier-Kurve.
    fn stroke_cubic(
        &mut self,
        start: Vec2,
        control1: Vec2,
        control2: Vec2,
        end: Vec2,
        style: StrokeStyle,
    );

    /// Offener Linienzug durch alle Punkte.
    fn stroke_polyline(&mut self, points: &[Vec2], style: StrokeStyle);

    /// Gefülltes Punkt-Handle.
    fn draw_handle(&mut self, center: Vec2, radius: f32, color: [f32; 4]);

    /// Text-Label, linke untere Ecke bei `anchor`.
    fn draw_label(&mut self, anchor: Vec2, text: &str, font_size: f32, color: [f32; 4]);
}
