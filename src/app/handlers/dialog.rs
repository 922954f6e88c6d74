//! Handler für Anwendungssteuerung.

use crate::app::AppState;

/// Signalisiert dem Host, die Anwendung zu beenden.
pub fn request_exit(state: &mut AppState) {
    log::info!("Beenden angefordert");
    state.should_exit = true;
}
