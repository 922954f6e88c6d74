//! Keyboard-Shortcuts für die Zeichenfläche.

use crate::app::AppIntent;

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
pub(super) fn collect_keyboard_intents(ui: &egui::Ui) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let (modifiers, key_q_pressed, key_escape_pressed) = ui.input(|i| {
        (
            i.modifiers,
            i.key_pressed(egui::Key::Q),
            i.key_pressed(egui::Key::Escape),
        )
    });

    if modifiers.command && key_q_pressed {
        events.push(AppIntent::ExitRequested);
    }

    // Escape bricht nur einen laufenden Drag ab
    if key_escape_pressed {
        events.push(AppIntent::DragCancelRequested);
    }

    events
}
