//! Handler für den Drag-Lifecycle einzelner Punkte.

use crate::app::AppState;
use crate::core::PointId;
use glam::Vec2;

/// Startet den Drag eines Punkts.
pub fn begin(state: &mut AppState, point_id: PointId, pointer: Vec2) {
    if state.sketch.begin_drag(point_id, pointer) {
        log::debug!("Drag von Punkt {} gestartet", point_id.0);
        state.redraw_requested = true;
    } else {
        log::warn!("Drag-Start für unbekannten Punkt {} ignoriert", point_id.0);
    }
}

/// Zieht den aktiven Punkt mit. Alle betroffenen Segmente werden neu gezeichnet.
pub fn update(state: &mut AppState, pointer: Vec2) {
    if state.sketch.update_drag(pointer) {
        state.redraw_requested = true;
    }
}

/// Beendet jeden aktiven Drag.
pub fn end(state: &mut AppState) {
    let ended = state.sketch.end_drag();
    if ended > 0 {
        log::debug!("Drag beendet ({} Punkt(e))", ended);
        state.redraw_requested = true;
    }
}
