//! Aufzeichnende `Surface` für Tests und Benchmarks.

use super::{StrokeStyle, Surface};
use glam::Vec2;

/// Eine aufgezeichnete Zeichenoperation
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Clear {
        color: [f32; 4],
    },
    Line {
        from: Vec2,
        to: Vec2,
        style: StrokeStyle,
    },
    Quadratic {
        start: Vec2,
        control: Vec2,
        end: Vec2,
        style: StrokeStyle,
    },
    Cubic {
        start: Vec2,
        control1: Vec2,
        control2: Vec2,
        end: Vec2,
        style: StrokeStyle,
    },
    Polyline {
        points: Vec<Vec2>,
        style: StrokeStyle,
    },
    Handle {
        center: Vec2,
        radius: f32,
        color: [f32; 4],
    },
    Label {
        anchor: Vec2,
        text: String,
    },
}

/// Speichert den sichtbaren Inhalt als Liste von Operationen.
///
/// `clear` verwirft alles bisher Gezeichnete, wie bei einer echten Fläche.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self { ops: Vec::new() }
    }

    /// Aktueller Inhalt der Fläche.
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Nur die Kurven-Striche (Linie, quadratisch, kubisch), ohne Polygone und Handles.
    pub fn curve_ops(&self) -> Vec<&DrawOp> {
        self.ops
            .iter()
            .filter(|op| {
                matches!(
                    op,
                    DrawOp::Line { .. } | DrawOp::Quadratic { .. } | DrawOp::Cubic { .. }
                )
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, color: [f32; 4]) {
        self.ops.clear();
        self.ops.push(DrawOp::Clear { color });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, style: StrokeStyle) {
        self.ops.push(DrawOp::Line { from, to, style });
    }

    fn stroke_quadratic(&mut self, start: Vec2, control: Vec2, end: Vec2, style: StrokeStyle) {
        self.ops.push(DrawOp::Quadratic {
            start,
            control,
            end,
            style,
        });
    }

    fn stroke_cubic(
        &mut self,
        start: Vec2,
        control1: Vec2,
        control2: Vec2,
        end: Vec2,
        style: StrokeStyle,
    ) {
        self.ops.push(DrawOp::Cubic {
            start,
            control1,
            control2,
            end,
            style,
        });
    }

    fn stroke_polyline(&mut self, points: &[Vec2], style: StrokeStyle) {
        self.ops.push(DrawOp::Polyline {
            points: points.to_vec(),
            style,
        });
    }

    fn draw_handle(&mut self, center: Vec2, radius: f32, color: [f32; 4]) {
        self.ops.push(DrawOp::Handle {
            center,
            radius,
            color,
        });
    }

    fn draw_label(&mut self, anchor: Vec2, text: &str, _font_size: f32, _color: [f32; 4]) {
        self.ops.push(DrawOp::Label {
            anchor,
            text: text.to_owned(),
        });
    }
}
