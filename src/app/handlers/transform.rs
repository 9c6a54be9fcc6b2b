//! Handler für Rotations- und Verschiebe-Sessions der Selektion.

use super::selection;
use crate::app::command_parser::CommandError;
use crate::app::state::InputMode;
use crate::app::AppState;
use glam::Vec2;

/// Zurück in den Select-Modus, Kommandozeile mit den neuen Werten füllen.
fn finish_session(state: &mut AppState) {
    state.editor.mode = InputMode::Select;
    selection::sync_command_input(state);
}

/// Startet die Rotations-Session für die Selektion.
pub fn start_rotation(state: &mut AppState) {
    let Some(handle) = state.registry.selected_handle() else {
        return;
    };
    if state.rotation.start(&state.registry, handle) {
        state.editor.mode = InputMode::Rotate;
        state.editor.command_input.clear();
        state
            .messages
            .log("Rotate mode started. Move mouse to rotate, click to confirm, ESC to cancel.");
    }
}

pub fn confirm_rotation(state: &mut AppState) {
    let confirmed = state.rotation.confirm().is_some();
    finish_session(state);
    if confirmed {
        state.messages.log("Rotation confirmed.");
    }
}

pub fn cancel_rotation(state: &mut AppState) {
    let active = state.rotation.is_active();
    state.rotation.cancel(&mut state.registry, &mut state.pool);
    finish_session(state);
    if active {
        state.messages.log("Rotation canceled.");
    }
}

/// Setzt die Rotation der Selektion auf `angle` (absolut) und bestätigt.
///
/// Eine laufende Session übernimmt den Winkel, sonst wird eine kurze
/// Session gestartet und sofort bestätigt.
pub fn rotate_selected(state: &mut AppState, angle: f32) {
    let Some(handle) = state.registry.selected_handle() else {
        state.messages.log("No shape selected for rotation");
        return;
    };
    if !state.rotation.is_active() {
        state.rotation.start(&state.registry, handle);
    }
    state
        .rotation
        .apply_numeric(&mut state.registry, &mut state.pool, angle);
    state.rotation.confirm();
    state
        .messages
        .log(format!("Rotated selected shape by {} degrees", angle));
    if state.editor.mode == InputMode::Rotate {
        finish_session(state);
    }
}

/// Startet die Verschiebe-Session am aktuellen Cursor.
pub fn start_move(state: &mut AppState) {
    let Some(handle) = state.registry.selected_handle() else {
        return;
    };
    if state.mover.start(&state.registry, handle, state.editor.cursor) {
        state.editor.mode = InputMode::Move;
        state.editor.command_input.clear();
        state.messages.log(
            "Move mode started. Move mouse to reposition shape. Click to confirm, ESC to cancel.",
        );
    }
}

pub fn confirm_move(state: &mut AppState) {
    let confirmed = state.mover.confirm().is_some();
    if confirmed {
        state.registry.mark_list_dirty();
    }
    finish_session(state);
    if confirmed {
        state.messages.log("Move confirmed.");
    }
}

pub fn cancel_move(state: &mut AppState) {
    let active = state.mover.is_active();
    state.mover.cancel(&mut state.registry, &mut state.pool);
    finish_session(state);
    if active {
        state.messages.log("Move cancelled.");
    }
}

/// Verschiebt die Selektion relativ um `offset`.
///
/// Eine laufende Verschiebe-Session wird vorher zurückgerollt. Läge die
/// Shape danach außerhalb von `±MAX_COORDINATE`, bleibt sie unverändert.
pub fn move_selected(state: &mut AppState, offset: Vec2) {
    if state.mover.is_active() {
        state.mover.cancel(&mut state.registry, &mut state.pool);
    }
    let Some(shape) = state.registry.selected_shape_mut() else {
        state.messages.log("No shape selected to move");
        return;
    };
    if !shape.geometry().translated(offset).is_within_bounds() {
        state.messages.log(CommandError::OutOfBounds.to_string());
        if state.editor.mode == InputMode::Move {
            finish_session(state);
        }
        return;
    }
    shape.move_offset(offset, &mut state.pool);
    state.registry.mark_list_dirty();
    state
        .messages
        .log(format!("Moved shape by ({}, {})", offset.x, offset.y));
    if state.editor.mode == InputMode::Move {
        finish_session(state);
    }
}
