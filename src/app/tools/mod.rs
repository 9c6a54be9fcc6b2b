//! Interaktive Werkzeuge: Zeichnen per Klick, Rotieren und Verschieben.
//!
//! Jedes Werkzeug hält nur seinen Session-Zustand. Shapes, Registry und
//! Pixel-Fläche werden pro Aufruf hereingereicht.

/// Shape-Factory, Klick-Session und Vorschau.
pub mod drawer;
/// Verschiebe-Session mit festem Greif-Offset.
pub mod mover;
/// Rotations-Session mit Cursor-Vorschau.
pub mod rotation;

pub use drawer::ShapeDrawer;
pub use mover::MoveController;
pub use rotation::RotationController;

use crate::app::registry::ShapeHandle;

/// Rückgabe von `on_click`, steuert den Zeichen-Flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolAction {
    /// Punkt registriert, weitere Klicks nötig
    Continue,
    /// Shape wurde erzeugt und registriert
    Created(ShapeHandle),
    /// Eingabe ungültig (z.B. Radius 0), Session zurückgesetzt
    Rejected,
}
