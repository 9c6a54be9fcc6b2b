//! Rotations-Session: Live-Vorschau per Cursor, Bestätigen oder Zurückrollen.

use crate::app::registry::{ShapeHandle, ShapeRegistry};
use crate::core::PixelSurface;
use glam::Vec2;

#[derive(Debug, Clone, Copy, PartialEq)]
struct RotationSession {
    handle: ShapeHandle,
    /// Rotation beim Start (Ziel von `cancel`)
    original_rotation: f32,
}

/// Zustandsautomat `Idle → Active → {Confirmed | Canceled} → Idle`.
#[derive(Debug, Default)]
pub struct RotationController {
    session: Option<RotationSession>,
}

impl RotationController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Startet eine Session für `handle`. Unbekannte Handles starten nichts.
    pub fn start(&mut self, registry: &ShapeRegistry, handle: ShapeHandle) -> bool {
        let Some(shape) = registry.get(handle) else {
            return false;
        };
        self.session = Some(RotationSession {
            handle,
            original_rotation: shape.rotation(),
        });
        true
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    pub fn handle(&self) -> Option<ShapeHandle> {
        self.session.map(|s| s.handle)
    }

    /// Rotation beim Session-Start.
    pub fn original_rotation(&self) -> Option<f32> {
        self.session.map(|s| s.original_rotation)
    }

    /// Winkel zwischen Zentrum und Cursor in Grad (`atan2`).
    pub fn cursor_angle(center: Vec2, cursor: Vec2) -> f32 {
        let dir = cursor - center;
        dir.y.atan2(dir.x).to_degrees()
    }

    /// Wendet den Cursor-Winkel live auf die Shape an.
    pub fn update_preview(
        &self,
        registry: &mut ShapeRegistry,
        surface: &mut dyn PixelSurface,
        cursor: Vec2,
    ) {
        let Some(session) = self.session else {
            return;
        };
        if let Some(shape) = registry.get_mut(session.handle) {
            let angle = Self::cursor_angle(shape.center(), cursor);
            shape.set_rotation(angle, surface);
        }
    }

    /// Setzt einen eingegebenen Winkel direkt (ohne Cursor).
    pub fn apply_numeric(
        &self,
        registry: &mut ShapeRegistry,
        surface: &mut dyn PixelSurface,
        angle: f32,
    ) {
        let Some(session) = self.session else {
            return;
        };
        if let Some(shape) = registry.get_mut(session.handle) {
            shape.set_rotation(angle, surface);
        }
    }

    /// Beendet die Session und behält die zuletzt gesetzte Rotation.
    pub fn confirm(&mut self) -> Option<ShapeHandle> {
        self.session.take().map(|s| s.handle)
    }

    /// Stellt die Start-Rotation wieder her und beendet die Session.
    pub fn cancel(&mut self, registry: &mut ShapeRegistry, surface: &mut dyn PixelSurface) {
        let Some(session) = self.session.take() else {
            return;
        };
        if let Some(shape) = registry.get_mut(session.handle) {
            shape.set_rotation(session.original_rotation, surface);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Color, PixelPool, Shape, ShapeGeometry};
    use approx::assert_abs_diff_eq;

    fn setup() -> (ShapeRegistry, PixelPool, ShapeHandle) {
        let mut pool = PixelPool::new();
        let mut registry = ShapeRegistry::default();
        let mut shape = Shape::new(
            ShapeGeometry::Line {
                start: Vec2::new(-4.0, 0.0),
                end: Vec2::new(4.0, 0.0),
            },
            Color::BLACK,
        );
        shape.draw(&mut pool);
        let handle = registry.insert(shape);
        (registry, pool, handle)
    }

    #[test]
    fn preview_follows_cursor_angle() {
        let (mut registry, mut pool, handle) = setup();
        let mut rotation = RotationController::new();
        assert!(rotation.start(&registry, handle));

        rotation.update_preview(&mut registry, &mut pool, Vec2::new(0.0, 10.0));

        let shape = registry.get(handle).expect("registriert");
        assert_abs_diff_eq!(shape.rotation(), 90.0, epsilon = 1e-4);
    }

    #[test]
    fn cancel_restores_original_rotation() {
        let (mut registry, mut pool, handle) = setup();
        registry
            .get_mut(handle)
            .expect("registriert")
            .set_rotation(30.0, &mut pool);
        let before = registry.get(handle).expect("registriert").points().to_vec();

        let mut rotation = RotationController::new();
        rotation.start(&registry, handle);
        rotation.update_preview(&mut registry, &mut pool, Vec2::new(-5.0, -5.0));
        rotation.cancel(&mut registry, &mut pool);

        let shape = registry.get(handle).expect("registriert");
        assert_eq!(shape.rotation(), 30.0);
        assert_eq!(shape.points(), before.as_slice());
        assert!(!rotation.is_active());
    }

    #[test]
    fn confirm_keeps_numeric_rotation() {
        let (mut registry, mut pool, handle) = setup();
        let mut rotation = RotationController::new();
        rotation.start(&registry, handle);
        rotation.apply_numeric(&mut registry, &mut pool, -45.0);

        assert_eq!(rotation.confirm(), Some(handle));
        assert_eq!(registry.get(handle).expect("registriert").rotation(), -45.0);
        assert!(rotation.confirm().is_none());
    }

    #[test]
    fn start_with_unknown_handle_stays_idle() {
        let (mut registry, _pool, _handle) = setup();
        let unknown = registry.allocate_handle();
        let mut rotation = RotationController::new();
        assert!(!rotation.start(&registry, unknown));
        assert!(!rotation.is_active());
    }
}
