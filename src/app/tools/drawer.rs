//! Shape-Drawer: Factory-Aufrufe, Klick-Session und Live-Vorschau.
//!
//! Klicks werden aufs Gitter gesnappt. Linie/Kreis/Ellipse brauchen zwei
//! Klicks, Hermite (P0, P1, Tangenten-Griffe H0, H1) und Bézier (P0..P3) vier.

use super::ToolAction;
use crate::app::message_log::MessageLog;
use crate::app::registry::{ShapeHandle, ShapeRegistry};
use crate::core::shape::fmt_point;
use crate::core::{Color, PixelSurface, Shape, ShapeGeometry, ShapeKind};
use glam::Vec2;

/// Rundet eine Position auf die nächste Gitterzelle.
pub fn snap_to_grid(pos: Vec2) -> Vec2 {
    pos.round()
}

/// Geometrie aus zwei Klicks (Radien gerundet, Ellipse mit Beträgen).
fn two_click_geometry(kind: ShapeKind, start: Vec2, end: Vec2) -> ShapeGeometry {
    match kind {
        ShapeKind::Circle => ShapeGeometry::Circle {
            center: start,
            radius: start.distance(end).round() as i32,
        },
        ShapeKind::Ellipse => ShapeGeometry::Ellipse {
            center: start,
            radius_x: (end.x - start.x).round().abs() as i32,
            radius_y: (end.y - start.y).round().abs() as i32,
        },
        _ => ShapeGeometry::Line { start, end },
    }
}

/// Vorschau-/Ziel-Geometrie für die bisher gesetzten Punkte (inkl. Cursor).
///
/// Hermite: 2 Punkte → Linie, 3 → Kurve mit T1 = 0, 4 → volle Kurve.
/// Bézier: 2–3 Punkte → Linie P0–P1, 4 → volle Kurve.
pub fn geometry_for_points(kind: ShapeKind, points: &[Vec2]) -> Option<ShapeGeometry> {
    let geometry = match (kind, points) {
        (ShapeKind::Line | ShapeKind::Circle | ShapeKind::Ellipse, &[start, end]) => {
            two_click_geometry(kind, start, end)
        }
        (ShapeKind::Hermite, &[start, end])
        | (ShapeKind::Bezier, &[start, end])
        | (ShapeKind::Bezier, &[start, end, _]) => ShapeGeometry::Line { start, end },
        (ShapeKind::Hermite, &[p0, p1, h0]) => ShapeGeometry::Hermite {
            p0,
            p1,
            t0: h0 - p0,
            t1: Vec2::ZERO,
        },
        (ShapeKind::Hermite, &[p0, p1, h0, h1]) => ShapeGeometry::Hermite {
            p0,
            p1,
            t0: h0 - p0,
            t1: h1 - p1,
        },
        (ShapeKind::Bezier, &[p0, p1, p2, p3]) => ShapeGeometry::Bezier { p0, p1, p2, p3 },
        _ => return None,
    };
    Some(geometry)
}

/// Prüft, dass alle Radien mindestens 1 sind.
pub fn has_positive_radii(geometry: &ShapeGeometry) -> bool {
    match *geometry {
        ShapeGeometry::Circle { radius, .. } => radius >= 1,
        ShapeGeometry::Ellipse {
            radius_x, radius_y, ..
        } => radius_x >= 1 && radius_y >= 1,
        _ => true,
    }
}

/// Bestätigungstext nach dem Erzeugen einer Shape.
fn creation_message(geometry: &ShapeGeometry) -> String {
    match *geometry {
        ShapeGeometry::Line { start, end } => {
            format!("Created line from {} to {}", fmt_point(start), fmt_point(end))
        }
        ShapeGeometry::Circle { center, radius } => format!(
            "Created circle at {} with radius {}",
            fmt_point(center),
            radius
        ),
        ShapeGeometry::Ellipse {
            center,
            radius_x,
            radius_y,
        } => format!(
            "Created ellipse at {} with radiusX={}, radiusY={}",
            fmt_point(center),
            radius_x,
            radius_y
        ),
        ShapeGeometry::Hermite { p0, p1, t0, t1 } => format!(
            "Created Hermite curve: P0={}, P1={}, T0={}, T1={}",
            fmt_point(p0),
            fmt_point(p1),
            fmt_point(t0),
            fmt_point(t1)
        ),
        ShapeGeometry::Bezier { p0, p1, p2, p3 } => format!(
            "Created Bézier curve: P0={}, P1={}, P2={}, P3={}",
            fmt_point(p0),
            fmt_point(p1),
            fmt_point(p2),
            fmt_point(p3)
        ),
    }
}

/// Erzeugt, zeichnet und registriert eine Shape.
pub fn draw_shape(
    registry: &mut ShapeRegistry,
    surface: &mut dyn PixelSurface,
    messages: &mut MessageLog,
    geometry: ShapeGeometry,
    color: Color,
) -> ShapeHandle {
    let mut shape = Shape::new(geometry, color);
    shape.draw(surface);
    let handle = registry.insert(shape);
    messages.log(creation_message(&geometry));
    handle
}

pub fn draw_line(
    registry: &mut ShapeRegistry,
    surface: &mut dyn PixelSurface,
    messages: &mut MessageLog,
    start: Vec2,
    end: Vec2,
    color: Color,
) -> ShapeHandle {
    draw_shape(
        registry,
        surface,
        messages,
        ShapeGeometry::Line { start, end },
        color,
    )
}

pub fn draw_circle(
    registry: &mut ShapeRegistry,
    surface: &mut dyn PixelSurface,
    messages: &mut MessageLog,
    center: Vec2,
    radius: i32,
    color: Color,
) -> ShapeHandle {
    draw_shape(
        registry,
        surface,
        messages,
        ShapeGeometry::Circle { center, radius },
        color,
    )
}

pub fn draw_ellipse(
    registry: &mut ShapeRegistry,
    surface: &mut dyn PixelSurface,
    messages: &mut MessageLog,
    center: Vec2,
    radii: (i32, i32),
    color: Color,
) -> ShapeHandle {
    draw_shape(
        registry,
        surface,
        messages,
        ShapeGeometry::Ellipse {
            center,
            radius_x: radii.0,
            radius_y: radii.1,
        },
        color,
    )
}

pub fn draw_hermite(
    registry: &mut ShapeRegistry,
    surface: &mut dyn PixelSurface,
    messages: &mut MessageLog,
    points: [Vec2; 2],
    tangents: [Vec2; 2],
    color: Color,
) -> ShapeHandle {
    draw_shape(
        registry,
        surface,
        messages,
        ShapeGeometry::Hermite {
            p0: points[0],
            p1: points[1],
            t0: tangents[0],
            t1: tangents[1],
        },
        color,
    )
}

pub fn draw_bezier(
    registry: &mut ShapeRegistry,
    surface: &mut dyn PixelSurface,
    messages: &mut MessageLog,
    controls: [Vec2; 4],
    color: Color,
) -> ShapeHandle {
    draw_shape(
        registry,
        surface,
        messages,
        ShapeGeometry::Bezier {
            p0: controls[0],
            p1: controls[1],
            p2: controls[2],
            p3: controls[3],
        },
        color,
    )
}

/// Interaktive Zeichen-Session mit Vorschau-Shape.
#[derive(Debug, Default)]
pub struct ShapeDrawer {
    /// Bereits geklickte (gesnappte) Punkte
    pending: Vec<Vec2>,
    /// Shape-Art der laufenden Session
    kind: Option<ShapeKind>,
    /// Vorschau (nicht registriert, nicht selektierbar)
    preview: Option<Shape>,
}

impl ShapeDrawer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending_points(&self) -> &[Vec2] {
        &self.pending
    }

    pub fn is_drawing(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn preview(&self) -> Option<&Shape> {
        self.preview.as_ref()
    }

    /// Verarbeitet einen Klick. Bei vollständiger Punktzahl wird die Shape erzeugt.
    pub fn on_click(
        &mut self,
        kind: ShapeKind,
        pos: Vec2,
        color: Color,
        registry: &mut ShapeRegistry,
        surface: &mut dyn PixelSurface,
        messages: &mut MessageLog,
    ) -> ToolAction {
        if self.kind != Some(kind) {
            self.reset(surface);
            self.kind = Some(kind);
        }
        self.pending.push(snap_to_grid(pos));

        if self.pending.len() < kind.click_count() {
            return ToolAction::Continue;
        }

        let geometry = geometry_for_points(kind, &self.pending);
        self.reset(surface);

        match geometry {
            Some(geometry) if has_positive_radii(&geometry) => {
                let handle = draw_shape(registry, surface, messages, geometry, color);
                ToolAction::Created(handle)
            }
            _ => {
                messages.log(format!("{} requires positive radius", kind));
                ToolAction::Rejected
            }
        }
    }

    /// Baut die Vorschau für die aktuelle Cursorposition neu auf.
    pub fn update_preview(
        &mut self,
        kind: ShapeKind,
        cursor: Vec2,
        color: Color,
        surface: &mut dyn PixelSurface,
    ) {
        if let Some(mut old) = self.preview.take() {
            old.clear(surface);
        }
        if self.kind != Some(kind) || self.pending.is_empty() {
            return;
        }

        let mut points = self.pending.clone();
        points.push(snap_to_grid(cursor));
        if let Some(geometry) = geometry_for_points(kind, &points) {
            let mut shape = Shape::new(geometry, color);
            shape.draw(surface);
            self.preview = Some(shape);
        }
    }

    /// Verwirft offene Klicks und die Vorschau.
    pub fn cancel(&mut self, surface: &mut dyn PixelSurface, messages: &mut MessageLog) {
        let had_session = self.is_drawing() || self.preview.is_some();
        self.reset(surface);
        if had_session {
            messages.log("Drawing canceled.");
        }
    }

    fn reset(&mut self, surface: &mut dyn PixelSurface) {
        self.pending.clear();
        self.kind = None;
        if let Some(mut preview) = self.preview.take() {
            preview.clear(surface);
        }
    }
}
