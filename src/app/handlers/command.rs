//! Handler für die Kommandozeile.

use super::{selection, transform};
use crate::app::command_parser::{parse_command, ShapeCommand};
use crate::app::tools::drawer;
use crate::app::AppState;
use crate::core::Shape;

pub fn set_input(state: &mut AppState, text: String) {
    state.editor.command_input = text;
}

/// Parst und führt eine Eingabe aus. Fehler landen nur im Meldungs-Log.
pub fn submit(state: &mut AppState, text: &str) {
    let selected = state.registry.selected_shape().map(Shape::kind);
    match parse_command(state.editor.mode, text, selected) {
        Ok(command) => execute(state, command),
        Err(e) => {
            log::warn!("Eingabe abgelehnt ({}): {}", state.editor.mode, e);
            state.messages.log(e.to_string());
        }
    }
    selection::sync_command_input(state);
}

fn execute(state: &mut AppState, command: ShapeCommand) {
    match command {
        ShapeCommand::Create { geometry, color } => {
            let color = color.unwrap_or(state.options.default_shape_color);
            drawer::draw_shape(
                &mut state.registry,
                &mut state.pool,
                &mut state.messages,
                geometry,
                color,
            );
        }
        ShapeCommand::Edit { geometry, color } => {
            let Some(shape) = state.registry.selected_shape_mut() else {
                return;
            };
            shape.set_values(geometry, &mut state.pool);
            if let Some(color) = color {
                shape.recolor(color, &mut state.pool);
            }
            let details = shape.details();
            state.registry.mark_list_dirty();
            state.messages.log(format!("Updated {}", details));
        }
        ShapeCommand::Rotate { angle } => transform::rotate_selected(state, angle),
        ShapeCommand::Move { offset } => transform::move_selected(state, offset),
    }
}
