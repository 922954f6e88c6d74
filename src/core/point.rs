//! Ziehbarer Kontrollpunkt mit explizitem Drag-Zustand.

use glam::Vec2;

/// Stabiler Index eines Punkts in der Punkt-Arena des [`Sketch`](super::Sketch).
///
/// Punkte werden nie entfernt, daher bleibt jede ID für die gesamte Session gültig.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointId(pub u32);

impl PointId {
    /// Position in der Arena.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Zustand einer aktiven Drag-Session
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragState {
    /// Abstand Pointer → Punkt beim Greifen (verhindert das "Springen" zum Cursor)
    pub grab_offset: Vec2,
}

/// Ein Kontrollpunkt auf der Zeichenfläche
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    position: Vec2,
    drag: Option<DragState>,
}

impl Point {
    /// Erstellt einen Punkt an der angegebenen Canvas-Position.
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            drag: None,
        }
    }

    /// Aktuelle Position in Canvas-Koordinaten.
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Gibt zurück, ob der Punkt gerade gezogen wird.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Aktueller Drag-Zustand (None = kein Drag aktiv)
    pub fn drag_state(&self) -> Option<DragState> {
        self.drag
    }

    /// Startet eine Drag-Session und merkt sich den Greif-Offset.
    pub fn begin_drag(&mut self, pointer: Vec2) {
        self.drag = Some(DragState {
            grab_offset: pointer - self.position,
        });
    }

    /// Verschiebt den Punkt auf `pointer - grab_offset`.
    ///
    /// Gibt `false` zurück, wenn kein Drag aktiv ist (Position bleibt unverändert).
    pub fn update_drag(&mut self, pointer: Vec2) -> bool {
        match self.drag {
            Some(drag) => {
                self.position = pointer - drag.grab_offset;
                true
            }
            None => false,
        }
    }

    /// Beendet die Drag-Session. Idempotent.
    pub fn end_drag(&mut self) -> bool {
        self.drag.take().is_some()
    }

    /// Koordinaten-Label, ganzzahlig gerundet, z.B. `(130, 80)`.
    ///
    /// Halbe Pixel runden von Null weg (2.5 → 3), `{:.0}` allein würde auf gerade Zahlen runden.
    pub fn label(&self) -> String {
        format!(
            "({}, {})",
            self.position.x.round() as i64,
            self.position.y.round() as i64
        )
    }
}

#[cfg(test)]
mod tests {
    use super::Point;
    use glam::Vec2;

    #[test]
    fn drag_keeps_grab_offset() {
        let mut point = Point::new(Vec2::new(10.0, 10.0));

        point.begin_drag(Vec2::new(13.0, 8.0));
        assert!(point.is_dragging());
        assert_eq!(
            point.drag_state().map(|d| d.grab_offset),
            Some(Vec2::new(3.0, -2.0))
        );

        assert!(point.update_drag(Vec2::new(23.0, 18.0)));
        assert_eq!(point.position(), Vec2::new(20.0, 20.0));
    }

    #[test]
    fn update_without_drag_is_ignored() {
        let mut point = Point::new(Vec2::new(1.0, 2.0));

        assert!(!point.update_drag(Vec2::new(50.0, 50.0)));
        assert_eq!(point.position(), Vec2::new(1.0, 2.0));
    }

    #[test]
    fn end_drag_is_idempotent() {
        let mut point = Point::new(Vec2::ZERO);
        point.begin_drag(Vec2::ZERO);

        assert!(point.end_drag());
        assert!(!point.end_drag());
        assert!(!point.is_dragging());
    }

    #[test]
    fn label_rounds_to_whole_pixels() {
        let point = Point::new(Vec2::new(129.7, 80.2));
        assert_eq!(point.label(), "(130, 80)");
    }

    #[test]
    fn label_rounds_half_pixels_up() {
        assert_eq!(Point::new(Vec2::new(2.5, 130.5)).label(), "(3, 131)");
        assert_eq!(Point::new(Vec2::new(0.5, 1.5)).label(), "(1, 2)");
    }
}
