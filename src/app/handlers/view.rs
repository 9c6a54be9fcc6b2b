//! Handler für Darstellung und Anwendungssteuerung.

use crate::app::AppState;

/// Blendet das Gitter ein bzw. aus.
pub fn toggle_grid(state: &mut AppState) {
    state.options.show_grid = !state.options.show_grid;
    state
        .messages
        .log(format!("Grid toggled: {}", state.options.show_grid));
}

/// Signalisiert dem Host, die Anwendung zu beenden.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}
