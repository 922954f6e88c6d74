//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.

use super::options::SketchOptions;
use crate::core::SegmentKind;
use glam::Vec2;

/// Aufgelöste Punktpositionen eines zu zeichnenden Segments
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentShape {
    /// Positionen in Canvas-Koordinaten, in Segment-Reihenfolge
    pub points: Vec<Vec2>,
}

impl SegmentShape {
    /// Zeichenform nach Punktanzahl (None = nichts zeichnen).
    pub fn kind(&self) -> Option<SegmentKind> {
        SegmentKind::from_point_count(self.points.len())
    }
}

/// Visuelles Handle + Koordinaten-Label eines Punkts
#[derive(Debug, Clone, PartialEq)]
pub struct HandleShape {
    /// Mittelpunkt in Canvas-Koordinaten
    pub position: Vec2,
    /// Koordinaten-Text, z.B. `(130, 80)`
    pub label: String,
    /// Punkt wird gerade gezogen
    pub dragging: bool,
}

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderScene {
    /// Zu zeichnende Segmente: committete in Commit-Reihenfolge, danach das laufende
    pub segments: Vec<SegmentShape>,
    /// Ein Handle pro Punkt in Erstellungsreihenfolge
    pub handles: Vec<HandleShape>,
    /// Darstellungs-Optionen für Farben und Breiten
    pub options: SketchOptions,
}
