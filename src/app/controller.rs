//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};

/// Orchestriert UI-Events und Handler auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Modus ===
            AppCommand::SetMode { mode } => handlers::mode::set_mode(state, mode),

            // === Selektion ===
            AppCommand::SelectAt { pos } => handlers::selection::select_at(state, pos),
            AppCommand::SelectShape { handle } => handlers::selection::select_shape(state, handle),
            AppCommand::DeleteSelected => handlers::selection::delete_selected(state),

            // === Zeichnen ===
            AppCommand::DrawClick { pos } => handlers::drawing::click(state, pos),
            AppCommand::UpdateCursor { pos } => handlers::drawing::update_cursor(state, pos),
            AppCommand::CancelDrawing => handlers::drawing::cancel(state),

            // === Rotieren & Verschieben ===
            AppCommand::StartRotation => handlers::transform::start_rotation(state),
            AppCommand::ConfirmRotation => handlers::transform::confirm_rotation(state),
            AppCommand::CancelRotation => handlers::transform::cancel_rotation(state),
            AppCommand::StartMove => handlers::transform::start_move(state),
            AppCommand::ConfirmMove => handlers::transform::confirm_move(state),
            AppCommand::CancelMove => handlers::transform::cancel_move(state),

            // === Kommandozeile ===
            AppCommand::SetCommandInput { text } => handlers::command::set_input(state, text),
            AppCommand::SubmitCommand { text } => handlers::command::submit(state, &text),

            // === Datei-I/O ===
            AppCommand::SaveShapes => handlers::file_io::save(state)?,
            AppCommand::LoadShapes => handlers::file_io::load(state)?,

            // === Ansicht & Anwendungssteuerung ===
            AppCommand::ToggleGrid => handlers::view::toggle_grid(state),
            AppCommand::RequestExit => handlers::view::request_exit(state),
        }

        Ok(())
    }
}
