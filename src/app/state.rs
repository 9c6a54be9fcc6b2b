//! Application State: zentrale Datenhaltung.

mod app_state;
mod editor;

pub use app_state::AppState;
pub use editor::{EditorState, InputMode};
