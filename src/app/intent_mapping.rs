//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::CanvasClicked { pos } => vec![AppCommand::AddPoint { pos }],
        AppIntent::PointPressed { pos } => state
            .sketch
            .point_at(pos, state.options.handle_radius)
            .map(|point_id| AppCommand::BeginPointDrag {
                point_id,
                pointer: pos,
            })
            .into_iter()
            .collect(),
        AppIntent::PointerMoved { pos } => {
            if state.sketch.dragging_point().is_some() {
                vec![AppCommand::UpdatePointDrag { pointer: pos }]
            } else {
                vec![]
            }
        }
        AppIntent::PointerReleased | AppIntent::FocusLost | AppIntent::DragCancelRequested => {
            if state.sketch.dragging_point().is_some() {
                vec![AppCommand::EndPointDrag]
            } else {
                vec![]
            }
        }
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}
