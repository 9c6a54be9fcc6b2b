//! Pixel Shape Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;
pub mod ui;

pub use app::{
    parse_command, AppCommand, AppController, AppIntent, AppState, CommandError, EditorState,
    InputMode, JsonShapeStore, MessageLog, ShapeCommand, ShapeHandle, ShapeRegistry, ShapeStore,
};
pub use core::{
    Color, Pixel, PixelHandle, PixelPool, PixelSurface, Shape, ShapeDocument, ShapeGeometry,
    ShapeKind, ShapeRecord,
};
pub use shared::EditorOptions;
