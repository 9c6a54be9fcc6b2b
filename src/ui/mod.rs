//! UI-Layer mit egui: Menü, Toolbar, Shape-Liste, Kommandozeile, Zeichenfläche.
//!
//! Jede Komponente liest den AppState nur und liefert `AppIntent`s zurück.

mod canvas;
pub mod command_bar;
mod keyboard;
pub mod menu;
pub mod messages;
pub mod shape_list;
pub mod status;
pub mod toolbar;

pub use canvas::{CanvasTransform, CanvasView};
pub use command_bar::render_command_bar;
pub use menu::render_menu;
pub use messages::render_message_overlay;
pub use shape_list::ShapeListPanel;
pub use status::render_status_bar;
pub use toolbar::render_toolbar;
