//! Application-Layer: Controller, State, Events, Registry und Werkzeuge.

pub mod command_log;
pub mod command_parser;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod message_log;
pub mod persistence;
pub mod registry;
/// Application State und Controller
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Shapes, Modus, Sessions).
pub mod state;
pub mod tools;

pub use command_log::CommandLog;
pub use command_parser::{parse_command, CommandError, ShapeCommand};
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use message_log::{LogMessage, MessageLog};
pub use persistence::{JsonShapeStore, ShapeStore};
pub use registry::{ShapeHandle, ShapeRegistry};
pub use state::{AppState, EditorState, InputMode};
