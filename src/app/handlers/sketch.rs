//! Handler für das Anlegen von Punkten.

use crate::app::AppState;
use glam::Vec2;

/// Legt einen Punkt an. Ein vollständiges Segment wird dabei committet.
pub fn add_point(state: &mut AppState, pos: Vec2) {
    state.sketch.add_point(pos);
    state.redraw_requested = true;
}
