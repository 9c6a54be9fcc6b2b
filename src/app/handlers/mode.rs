//! Handler für Moduswechsel.

use super::{selection, transform};
use crate::app::state::InputMode;
use crate::app::AppState;

/// Wechselt den Eingabemodus.
///
/// Laufende Rotations-/Verschiebe-Sessions werden zurückgerollt, offene
/// Zeichen-Klicks verworfen. Zeichenmodi heben die Selektion auf.
pub fn set_mode(state: &mut AppState, mode: InputMode) {
    if state.editor.mode == mode {
        return;
    }
    if state.rotation.is_active() {
        transform::cancel_rotation(state);
    }
    if state.mover.is_active() {
        transform::cancel_move(state);
    }
    state.drawer.cancel(&mut state.pool, &mut state.messages);

    state.editor.mode = mode;
    state.messages.log(format!("Switched to {} mode", mode));

    if mode.is_drawing() {
        state.registry.deselect(&mut state.pool);
    }
    selection::sync_command_input(state);
}
