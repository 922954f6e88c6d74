//! Canvas-Input-Handling: Klicks, Handle-Drag, globale Pointer-Events → AppIntent.

use super::keyboard;
use crate::app::AppIntent;
use crate::core::Sketch;
use crate::shared::SketchOptions;
use glam::Vec2;

/// Wo der aktuelle Primär-Press begonnen hat
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PressOrigin {
    /// Freie Zeichenfläche: Loslassen im Canvas legt einen Punkt an
    Canvas,
    /// Punkt-Handle: startet einen Drag, legt nie einen Punkt an
    Handle,
}

/// Verwaltet den Input-Zustand der Zeichenfläche
#[derive(Default)]
pub struct InputState {
    press_origin: Option<PressOrigin>,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self { press_origin: None }
    }

    /// Sammelt Canvas-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// Pointer-Move und Pointer-Up werden global ausgewertet, damit ein Drag
    /// auch außerhalb der Handle-Hitbox weiterläuft.
    pub fn collect_viewport_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        sketch: &Sketch,
        options: &SketchOptions,
    ) -> Vec<AppIntent> {
        let mut events = Vec::new();

        events.extend(keyboard::collect_keyboard_intents(ui));

        self.handle_focus(ui, &mut events);
        self.handle_press(ui, response, sketch, options, &mut events);
        self.handle_pointer_move(ui, response, &mut events);
        self.handle_release(ui, response, &mut events);

        events
    }

    fn handle_focus(&self, ui: &egui::Ui, events: &mut Vec<AppIntent>) {
        let focus_lost = ui.input(|i| {
            i.events
                .iter()
                .any(|e| matches!(e, egui::Event::WindowFocused(false)))
        });
        if focus_lost {
            events.push(AppIntent::FocusLost);
        }
    }

    fn handle_press(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        sketch: &Sketch,
        options: &SketchOptions,
        events: &mut Vec<AppIntent>,
    ) {
        let press_pos = ui.input(|i| {
            if i.pointer.primary_pressed() {
                i.pointer.press_origin()
            } else {
                None
            }
        });
        let Some(pointer_pos) = press_pos else {
            return;
        };

        if !response.rect.contains(pointer_pos) {
            self.press_origin = None;
            return;
        }

        let pos = screen_pos_to_canvas(pointer_pos, response);
        if sketch.point_at(pos, options.handle_radius).is_some() {
            self.press_origin = Some(PressOrigin::Handle);
            events.push(AppIntent::PointPressed { pos });
        } else {
            self.press_origin = Some(PressOrigin::Canvas);
        }
    }

    fn handle_pointer_move(
        &self,
        ui: &egui::Ui,
        response: &egui::Response,
        events: &mut Vec<AppIntent>,
    ) {
        let moved_to = ui.input(|i| {
            if i.pointer.delta() == egui::Vec2::ZERO {
                None
            } else {
                i.pointer.latest_pos()
            }
        });
        if let Some(pointer_pos) = moved_to {
            events.push(AppIntent::PointerMoved {
                pos: screen_pos_to_canvas(pointer_pos, response),
            });
        }
    }

    /// Loslassen beendet Drags global; ein Canvas-Press wird zum Klick,
    /// unabhängig von Dauer und Bewegung (wie ein Browser-`click`).
    fn handle_release(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        events: &mut Vec<AppIntent>,
    ) {
        let (any_released, primary_released, release_pos) = ui.input(|i| {
            (
                i.pointer.any_released(),
                i.pointer.primary_released(),
                i.pointer.latest_pos(),
            )
        });
        if !any_released {
            return;
        }

        if primary_released {
            let origin = self.press_origin.take();
            if let (Some(PressOrigin::Canvas), Some(pointer_pos)) = (origin, release_pos) {
                if response.rect.contains(pointer_pos) {
                    events.push(AppIntent::CanvasClicked {
                        pos: screen_pos_to_canvas(pointer_pos, response),
                    });
                }
            }
        }

        events.push(AppIntent::PointerReleased);
    }
}

/// Rechnet eine Screen-Position in Canvas-Koordinaten um (Ursprung = Rect oben links).
pub(crate) fn screen_pos_to_canvas(pos: egui::Pos2, response: &egui::Response) -> Vec2 {
    Vec2::new(pos.x - response.rect.min.x, pos.y - response.rect.min.y)
}

#[cfg(test)]
mod tests;
