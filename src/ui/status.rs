//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;
use crate::core::SegmentKind;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let current = state.sketch.segments().current();

            ui.label(format!(
                "Punkte: {} | Segmente: {} | Laufend: {} Punkt(e)",
                state.point_count(),
                state.committed_segment_count(),
                current.len()
            ));

            ui.separator();

            ui.label(match current.kind() {
                Some(SegmentKind::Line) => "Vorschau: Linie",
                Some(SegmentKind::Quadratic) => "Vorschau: Quadratisch",
                Some(SegmentKind::Cubic) => "Vorschau: Kubisch",
                None => "Vorschau: -",
            });

            ui.separator();

            let summary = state.command_log.summary();
            ui.label(format!(
                "Drags: {} ({} Moves)",
                summary.drags_started, summary.drag_updates
            ));

            ui.separator();

            let dragged = state
                .sketch
                .dragging_point()
                .and_then(|id| state.sketch.point(id));
            if let Some(point) = dragged {
                ui.label(format!("Ziehe Punkt {}", point.label()));
            } else {
                ui.label("Klicken: Punkt setzen | Handle ziehen: Punkt verschieben");
            }
        });
    });
}
