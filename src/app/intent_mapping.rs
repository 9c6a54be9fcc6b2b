//! Mapping von UI-Intents auf mutierende App-Commands.

use super::state::InputMode;
use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
///
/// Moduswechsel-Regeln: Löschen, Rotieren und Verschieben starten nur im
/// Select-Modus; Escape bricht die Session des aktiven Modus ab.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    let mode = state.editor.mode;
    match intent {
        AppIntent::ModeSelected { mode } => vec![AppCommand::SetMode { mode }],
        AppIntent::CanvasClicked { pos } => {
            let pos = state.options.clamp_to_grid(pos);
            match mode {
                InputMode::Select => vec![AppCommand::SelectAt { pos }],
                InputMode::Rotate => vec![AppCommand::ConfirmRotation],
                InputMode::Move => vec![AppCommand::ConfirmMove],
                InputMode::DrawLine
                | InputMode::DrawCircle
                | InputMode::DrawEllipse
                | InputMode::DrawHermite
                | InputMode::DrawBezier => vec![AppCommand::DrawClick { pos }],
            }
        }
        AppIntent::CursorMoved { pos } => vec![AppCommand::UpdateCursor {
            pos: state.options.clamp_to_grid(pos),
        }],
        AppIntent::CancelRequested => match mode {
            InputMode::Select => vec![],
            InputMode::Rotate => vec![AppCommand::CancelRotation],
            InputMode::Move => vec![AppCommand::CancelMove],
            _ => vec![AppCommand::CancelDrawing],
        },
        AppIntent::DeleteSelectedRequested if mode == InputMode::Select => {
            vec![AppCommand::DeleteSelected]
        }
        AppIntent::RotateRequested
            if mode == InputMode::Select && state.registry.has_selection() =>
        {
            vec![AppCommand::StartRotation]
        }
        AppIntent::MoveRequested
            if mode == InputMode::Select && state.registry.has_selection() =>
        {
            vec![AppCommand::StartMove]
        }
        AppIntent::DeleteSelectedRequested
        | AppIntent::RotateRequested
        | AppIntent::MoveRequested => vec![],
        AppIntent::ShapeListItemClicked { handle } => {
            if mode == InputMode::Select {
                vec![AppCommand::SelectShape { handle }]
            } else {
                vec![
                    AppCommand::SetMode {
                        mode: InputMode::Select,
                    },
                    AppCommand::SelectShape { handle },
                ]
            }
        }
        AppIntent::CommandInputChanged { text } => vec![AppCommand::SetCommandInput { text }],
        AppIntent::CommandSubmitted { text } => vec![AppCommand::SubmitCommand { text }],
        AppIntent::SaveRequested => vec![AppCommand::SaveShapes],
        AppIntent::LoadRequested => vec![AppCommand::LoadShapes],
        AppIntent::ToggleGridRequested => vec![AppCommand::ToggleGrid],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}
