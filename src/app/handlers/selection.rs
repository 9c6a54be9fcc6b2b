//! Handler für Selektions-Operationen.

use crate::app::registry::ShapeHandle;
use crate::app::state::InputMode;
use crate::app::AppState;
use crate::core::Shape;
use glam::Vec2;

/// Selektiert die zuletzt gezeichnete Shape unter `pos`, sonst wird deselektiert.
pub fn select_at(state: &mut AppState, pos: Vec2) {
    let cell = pos.round().as_ivec2();
    match state.registry.shape_at(cell) {
        Some(handle) => select_shape(state, handle),
        None => {
            state.registry.deselect(&mut state.pool);
            sync_command_input(state);
        }
    }
}

/// Selektiert eine Shape per Handle und füllt die Kommandozeile vor.
pub fn select_shape(state: &mut AppState, handle: ShapeHandle) {
    state
        .registry
        .select(handle, &mut state.pool, &mut state.messages);
    sync_command_input(state);
}

/// Löscht die selektierte Shape (No-op ohne Selektion).
pub fn delete_selected(state: &mut AppState) {
    if let Some(shape) = state
        .registry
        .delete_selected(&mut state.pool, &mut state.messages)
    {
        log::debug!("Shape gelöscht: {}", shape.details());
    }
    sync_command_input(state);
}

/// Kommandozeile: im Select-Modus die Werte der Selektion, sonst leer.
pub fn sync_command_input(state: &mut AppState) {
    state.editor.command_input = match state.editor.mode {
        InputMode::Select => state
            .registry
            .selected_shape()
            .map(Shape::values)
            .unwrap_or_default(),
        _ => String::new(),
    };
}
