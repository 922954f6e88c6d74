//! `Surface`-Implementierung auf Basis von `egui::Painter`.

use super::{StrokeStyle, Surface};
use egui::epaint::{CubicBezierShape, QuadraticBezierShape};
use glam::Vec2;

/// Zeichnet in das Canvas-Rect eines egui-Panels.
pub struct EguiSurface {
    painter: egui::Painter,
    rect: egui::Rect,
}

impl EguiSurface {
    /// Erstellt eine Fläche für `rect`; Zeichnungen werden auf das Rect geclippt.
    pub fn new(painter: egui::Painter, rect: egui::Rect) -> Self {
        Self {
            painter: painter.with_clip_rect(rect),
            rect,
        }
    }

    fn to_screen(&self, pos: Vec2) -> egui::Pos2 {
        egui::pos2(self.rect.min.x + pos.x, self.rect.min.y + pos.y)
    }

    fn stroke(style: StrokeStyle) -> egui::Stroke {
        egui::Stroke::new(style.width, color32(style.color))
    }
}

/// Konvertiert RGBA (0.0–1.0, nicht vormultipliziert) nach `Color32`.
fn color32(rgba: [f32; 4]) -> egui::Color32 {
    egui::Rgba::from_rgba_unmultiplied(rgba[0], rgba[1], rgba[2], rgba[3]).into()
}

impl Surface for EguiSurface {
    fn clear(&mut self, color: [f32; 4]) {
        self.painter.rect_filled(self.rect, 0.0, color32(color));
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, style: StrokeStyle) {
        self.painter
            .line_segment([self.to_screen(from), self.to_screen(to)], Self::stroke(style));
    }

    fn stroke_quadratic(&mut self, start: Vec2, control: Vec2, end: Vec2, style: StrokeStyle) {
        let shape = QuadraticBezierShape::from_points_stroke(
            [
                self.to_screen(start),
                self.to_screen(control),
                self.to_screen(end),
            ],
            false,
            egui::Color32::TRANSPARENT,
            Self::stroke(style),
        );
        self.painter.add(shape);
    }

    fn stroke_cubic(
        &mut self,
        start: Vec2,
        control1: Vec2,
        control2: Vec2,
        end: Vec2,
        style: StrokeStyle,
    ) {
        let shape = CubicBezierShape::from_points_stroke(
            [
                self.to_screen(start),
                self.to_screen(control1),
                self.to_screen(control2),
                self.to_screen(end),
            ],
            false,
            egui::Color32::TRANSPARENT,
            Self::stroke(style),
        );
        self.painter.add(shape);
    }

    fn stroke_polyline(&mut self, points: &[Vec2], style: StrokeStyle) {
        if points.len() < 2 {
            return;
        }
        let screen: Vec<egui::Pos2> = points.iter().map(|&p| self.to_screen(p)).collect();
        self.painter
            .add(egui::Shape::line(screen, Self::stroke(style)));
    }

    fn draw_handle(&mut self, center: Vec2, radius: f32, color: [f32; 4]) {
        self.painter.circle(
            self.to_screen(center),
            radius,
            color32(color),
            egui::Stroke::new(1.0, egui::Color32::WHITE),
        );
    }

    fn draw_label(&mut self, anchor: Vec2, text: &str, font_size: f32, color: [f32; 4]) {
        self.painter.text(
            self.to_screen(anchor),
            egui::Align2::LEFT_BOTTOM,
            text,
            egui::FontId::proportional(font_size),
            color32(color),
        );
    }
}
