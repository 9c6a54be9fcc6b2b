//! Handler für Klick-Zeichnen und Cursor-Bewegung.

use crate::app::state::InputMode;
use crate::app::tools::ToolAction;
use crate::app::AppState;
use glam::Vec2;

/// Klick im Zeichenmodus: Punkt sammeln, bei vollständiger Anzahl Shape erzeugen.
pub fn click(state: &mut AppState, pos: Vec2) {
    let Some(kind) = state.editor.mode.draw_kind() else {
        return;
    };
    let action = state.drawer.on_click(
        kind,
        pos,
        state.options.default_shape_color,
        &mut state.registry,
        &mut state.pool,
        &mut state.messages,
    );
    if let ToolAction::Created(handle) = action {
        log::debug!("{} erzeugt als {}", kind, handle);
    }
}

/// Merkt die Cursorposition und aktualisiert Vorschau bzw. laufende Session.
pub fn update_cursor(state: &mut AppState, pos: Vec2) {
    state.editor.cursor = pos;
    match state.editor.mode {
        InputMode::Rotate => {
            state
                .rotation
                .update_preview(&mut state.registry, &mut state.pool, pos)
        }
        InputMode::Move => state.mover.update(&mut state.registry, &mut state.pool, pos),
        mode => {
            if let Some(kind) = mode.draw_kind() {
                state
                    .drawer
                    .update_preview(kind, pos, state.options.preview_color, &mut state.pool);
            }
        }
    }
}

/// Verwirft offene Klicks und die Vorschau.
pub fn cancel(state: &mut AppState) {
    state.drawer.cancel(&mut state.pool, &mut state.messages);
}
