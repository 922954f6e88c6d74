//! AppIntent- und AppCommand-Enums für den Intent/Command-Datenfluss.

use crate::core::PointId;
use glam::Vec2;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Klick auf die Zeichenfläche (nicht auf ein Handle)
    CanvasClicked { pos: Vec2 },
    /// Pointer-Down über einem Punkt-Handle
    PointPressed { pos: Vec2 },
    /// Pointer bewegt (global, auch außerhalb des Handles)
    PointerMoved { pos: Vec2 },
    /// Pointer losgelassen (global)
    PointerReleased,
    /// Fenster hat den Fokus verloren
    FocusLost,
    /// Laufenden Drag per Tastatur abbrechen (Escape)
    DragCancelRequested,
    /// Anwendung beenden
    ExitRequested,
}

/// Mutierende Commands auf dem AppState.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Neuen Punkt anlegen und an das laufende Segment hängen
    AddPoint { pos: Vec2 },
    /// Drag eines Punkts starten
    BeginPointDrag { point_id: PointId, pointer: Vec2 },
    /// Gezogenen Punkt auf Pointer-Position (minus Greif-Offset) setzen
    UpdatePointDrag { pointer: Vec2 },
    /// Alle aktiven Drags beenden
    EndPointDrag,
    /// Anwendung kontrolliert beenden
    RequestExit,
}
