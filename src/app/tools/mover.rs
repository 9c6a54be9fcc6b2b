//! Verschiebe-Session: Shape folgt dem Cursor mit festem Greif-Offset.

use crate::app::registry::{ShapeHandle, ShapeRegistry};
use crate::core::PixelSurface;
use glam::Vec2;

#[derive(Debug, Clone, Copy, PartialEq)]
struct MoveSession {
    handle: ShapeHandle,
    /// Zentrum beim Start (Ziel von `cancel`)
    original_position: Vec2,
    /// Zentrum minus Cursor beim Start
    offset: Vec2,
}

/// Zustandsautomat `Idle → Active → {Confirmed | Canceled} → Idle`.
#[derive(Debug, Default)]
pub struct MoveController {
    session: Option<MoveSession>,
}

impl MoveController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Startet eine Session; der Greifpunkt bleibt unter dem Cursor.
    pub fn start(&mut self, registry: &ShapeRegistry, handle: ShapeHandle, cursor: Vec2) -> bool {
        let Some(shape) = registry.get(handle) else {
            return false;
        };
        let original_position = shape.center();
        self.session = Some(MoveSession {
            handle,
            original_position,
            offset: original_position - cursor,
        });
        true
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    pub fn handle(&self) -> Option<ShapeHandle> {
        self.session.map(|s| s.handle)
    }

    /// Zentrum beim Session-Start.
    pub fn original_position(&self) -> Option<Vec2> {
        self.session.map(|s| s.original_position)
    }

    /// Setzt das Zentrum auf `cursor + offset`.
    pub fn update(&self, registry: &mut ShapeRegistry, surface: &mut dyn PixelSurface, cursor: Vec2) {
        let Some(session) = self.session else {
            return;
        };
        if let Some(shape) = registry.get_mut(session.handle) {
            shape.move_to_point(cursor + session.offset, surface);
        }
    }

    /// Beendet die Session an der aktuellen Position.
    pub fn confirm(&mut self) -> Option<ShapeHandle> {
        self.session.take().map(|s| s.handle)
    }

    /// Setzt die Shape auf die Startposition zurück und beendet die Session.
    pub fn cancel(&mut self, registry: &mut ShapeRegistry, surface: &mut dyn PixelSurface) {
        let Some(session) = self.session.take() else {
            return;
        };
        if let Some(shape) = registry.get_mut(session.handle) {
            shape.move_to_point(session.original_position, surface);
        }
    }
}
