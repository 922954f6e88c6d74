//! Zeichen-Session: Punkt-Arena plus Segment-Store.

use super::{Point, PointId, Segment, SegmentStore};
use glam::Vec2;

/// Gesamter Zeichenzustand einer Session
///
/// Segmente speichern nur [`PointId`]s. Eine Änderung an einem Punkt ist
/// dadurch in allen Segmenten sichtbar, die ihn referenzieren.
#[derive(Debug, Clone, Default)]
pub struct Sketch {
    /// Alle jemals erstellten Punkte, indexiert nach `PointId`
    points: Vec<Point>,
    /// Committete Segmente + laufendes Segment
    segments: SegmentStore,
}

impl Sketch {
    /// Erstellt eine leere Session.
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            segments: SegmentStore::new(),
        }
    }

    /// Legt einen Punkt an und reicht ihn an das laufende Segment weiter.
    pub fn add_point(&mut self, position: Vec2) -> PointId {
        let id = PointId(self.points.len() as u32);
        self.points.push(Point::new(position));
        log::debug!(
            "Punkt {} bei ({:.1}, {:.1}) angelegt",
            id.0,
            position.x,
            position.y
        );

        if let Some(index) = self.segments.add_point(id) {
            log::info!("Segment {} committet", index);
        }
        id
    }

    pub fn point(&self, id: PointId) -> Option<&Point> {
        self.points.get(id.index())
    }

    pub fn point_mut(&mut self, id: PointId) -> Option<&mut Point> {
        self.points.get_mut(id.index())
    }

    /// Alle Punkte in Erstellungsreihenfolge.
    pub fn points(&self) -> impl Iterator<Item = (PointId, &Point)> {
        self.points
            .iter()
            .enumerate()
            .map(|(index, point)| (PointId(index as u32), point))
    }

    /// Anzahl aller Punkte.
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Segment-Store (committet + laufend).
    pub fn segments(&self) -> &SegmentStore {
        &self.segments
    }

    /// Löst die Punkt-IDs eines Segments in aktuelle Positionen auf.
    pub fn positions(&self, segment: &Segment) -> Vec<Vec2> {
        segment
            .point_ids()
            .iter()
            .filter_map(|&id| self.point(id).map(Point::position))
            .collect()
    }

    /// Der aktuell gezogene Punkt, falls vorhanden.
    pub fn dragging_point(&self) -> Option<PointId> {
        self.points()
            .find(|(_, point)| point.is_dragging())
            .map(|(id, _)| id)
    }

    /// Hit-Test auf die Punkt-Handles.
    ///
    /// Später erstellte Handles liegen oben und gewinnen bei Überlappung.
    pub fn point_at(&self, pos: Vec2, radius: f32) -> Option<PointId> {
        self.points
            .iter()
            .enumerate()
            .rev()
            .find(|(_, point)| point.position().distance(pos) <= radius)
            .map(|(index, _)| PointId(index as u32))
    }

    /// Startet den Drag eines Punkts. `false` bei unbekannter ID.
    pub fn begin_drag(&mut self, id: PointId, pointer: Vec2) -> bool {
        match self.point_mut(id) {
            Some(point) => {
                point.begin_drag(pointer);
                true
            }
            None => false,
        }
    }

    /// Verschiebt alle gezogenen Punkte. Gibt zurück, ob sich etwas bewegt hat.
    pub fn update_drag(&mut self, pointer: Vec2) -> bool {
        let mut moved = false;
        for point in &mut self.points {
            moved |= point.update_drag(pointer);
        }
        moved
    }

    /// Beendet jede aktive Drag-Session. Gibt die Anzahl beendeter Drags zurück.
    pub fn end_drag(&mut self) -> usize {
        self.points
            .iter_mut()
            .map(|point| point.end_drag())
            .filter(|ended| *ended)
            .count()
    }
}
