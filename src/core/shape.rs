//! Shape-Entität: kanonische Parameter, abgeleitete Rasterpunkte und Darstellungszustand.
//!
//! `ShapeGeometry` ist die Quelle der Wahrheit. `points` wird daraus (plus
//! `rotation`) abgeleitet, `original_points` ist die unrotierte Basislinie.

use super::pixel_pool::{PixelHandle, PixelSurface};
use super::raster;
use super::Color;
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Shape-Art (Diskriminator für Kommandos und Persistenz).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    Line,
    Circle,
    Ellipse,
    Hermite,
    Bezier,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 5] = [
        ShapeKind::Line,
        ShapeKind::Circle,
        ShapeKind::Ellipse,
        ShapeKind::Hermite,
        ShapeKind::Bezier,
    ];

    /// Name wie im JSON-Feld `type`.
    pub fn as_str(self) -> &'static str {
        match self {
            ShapeKind::Line => "Line",
            ShapeKind::Circle => "Circle",
            ShapeKind::Ellipse => "Ellipse",
            ShapeKind::Hermite => "Hermite",
            ShapeKind::Bezier => "Bezier",
        }
    }

    /// Anzahl der Zahlen im Kommando-Eingabeformat.
    pub fn argument_count(self) -> usize {
        match self {
            ShapeKind::Line => 4,
            ShapeKind::Circle => 3,
            ShapeKind::Ellipse => 4,
            ShapeKind::Hermite | ShapeKind::Bezier => 8,
        }
    }

    /// Anzahl der Klicks beim interaktiven Zeichnen.
    pub fn click_count(self) -> usize {
        match self {
            ShapeKind::Line | ShapeKind::Circle | ShapeKind::Ellipse => 2,
            ShapeKind::Hermite | ShapeKind::Bezier => 4,
        }
    }
}

impl std::fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kanonische, art-spezifische Parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeGeometry {
    Line {
        start: Vec2,
        end: Vec2,
    },
    Circle {
        center: Vec2,
        radius: i32,
    },
    Ellipse {
        center: Vec2,
        radius_x: i32,
        radius_y: i32,
    },
    /// Endpunkte P0/P1 mit Tangentenvektoren T0/T1.
    Hermite {
        p0: Vec2,
        p1: Vec2,
        t0: Vec2,
        t1: Vec2,
    },
    /// Kubische Bézier mit Kontrollpunkten P0..P3.
    Bezier {
        p0: Vec2,
        p1: Vec2,
        p2: Vec2,
        p3: Vec2,
    },
}

impl ShapeGeometry {
    pub fn kind(&self) -> ShapeKind {
        match self {
            ShapeGeometry::Line { .. } => ShapeKind::Line,
            ShapeGeometry::Circle { .. } => ShapeKind::Circle,
            ShapeGeometry::Ellipse { .. } => ShapeKind::Ellipse,
            ShapeGeometry::Hermite { .. } => ShapeKind::Hermite,
            ShapeGeometry::Bezier { .. } => ShapeKind::Bezier,
        }
    }

    /// Rotationszentrum: Mittelpunkt (Linie), expliziter Mittelpunkt
    /// (Kreis/Ellipse), Mitte P0–P1 (Hermite), Mittel der 4 Punkte (Bézier).
    pub fn center(&self) -> Vec2 {
        match *self {
            ShapeGeometry::Line { start, end } => (start + end) / 2.0,
            ShapeGeometry::Circle { center, .. } | ShapeGeometry::Ellipse { center, .. } => center,
            ShapeGeometry::Hermite { p0, p1, .. } => (p0 + p1) / 2.0,
            ShapeGeometry::Bezier { p0, p1, p2, p3 } => (p0 + p1 + p2 + p3) / 4.0,
        }
    }

    /// Rastert die Geometrie (unrotiert).
    pub fn rasterize(&self) -> Vec<Vec2> {
        match *self {
            ShapeGeometry::Line { start, end } => to_vec2(raster::line(start, end)),
            ShapeGeometry::Circle { center, radius } => to_vec2(raster::circle(center, radius)),
            ShapeGeometry::Ellipse {
                center,
                radius_x,
                radius_y,
            } => to_vec2(raster::ellipse(center, radius_x, radius_y)),
            ShapeGeometry::Hermite { p0, p1, t0, t1 } => raster::hermite(p0, p1, t0, t1),
            ShapeGeometry::Bezier { p0, p1, p2, p3 } => raster::bezier(p0, p1, p2, p3),
        }
    }

    /// Verschiebt alle Ortspunkte; Tangenten sind Richtungen und bleiben gleich.
    pub fn translated(&self, delta: Vec2) -> Self {
        match *self {
            ShapeGeometry::Line { start, end } => ShapeGeometry::Line {
                start: start + delta,
                end: end + delta,
            },
            ShapeGeometry::Circle { center, radius } => ShapeGeometry::Circle {
                center: center + delta,
                radius,
            },
            ShapeGeometry::Ellipse {
                center,
                radius_x,
                radius_y,
            } => ShapeGeometry::Ellipse {
                center: center + delta,
                radius_x,
                radius_y,
            },
            ShapeGeometry::Hermite { p0, p1, t0, t1 } => ShapeGeometry::Hermite {
                p0: p0 + delta,
                p1: p1 + delta,
                t0,
                t1,
            },
            ShapeGeometry::Bezier { p0, p1, p2, p3 } => ShapeGeometry::Bezier {
                p0: p0 + delta,
                p1: p1 + delta,
                p2: p2 + delta,
                p3: p3 + delta,
            },
        }
    }

    /// Kanonische Zahlenfolge im Kommando-Format (ungerundet).
    pub fn numbers(&self) -> Vec<f32> {
        match *self {
            ShapeGeometry::Line { start, end } => vec![start.x, start.y, end.x, end.y],
            ShapeGeometry::Circle { center, radius } => {
                vec![center.x, center.y, radius as f32]
            }
            ShapeGeometry::Ellipse {
                center,
                radius_x,
                radius_y,
            } => vec![center.x, center.y, radius_x as f32, radius_y as f32],
            ShapeGeometry::Hermite { p0, p1, t0, t1 } => {
                vec![p0.x, p0.y, p1.x, p1.y, t0.x, t0.y, t1.x, t1.y]
            }
            ShapeGeometry::Bezier { p0, p1, p2, p3 } => {
                vec![p0.x, p0.y, p1.x, p1.y, p2.x, p2.y, p3.x, p3.y]
            }
        }
    }

    /// Alle Koordinaten, Tangenten und Radien liegen in `±raster::MAX_COORDINATE`.
    pub fn is_within_bounds(&self) -> bool {
        self.numbers().into_iter().all(raster::within_bounds)
    }

    /// Menschenlesbare Zusammenfassung mit gerundeten Werten.
    pub fn details(&self) -> String {
        match *self {
            ShapeGeometry::Line { start, end } => {
                format!("Line from {} to {}", fmt_point(start), fmt_point(end))
            }
            ShapeGeometry::Circle { center, radius } => {
                format!("Circle Center: {}, Radius: {}", fmt_point(center), radius)
            }
            ShapeGeometry::Ellipse {
                center,
                radius_x,
                radius_y,
            } => format!(
                "Ellipse Center: {}, RadiusX: {}, RadiusY: {}",
                fmt_point(center),
                radius_x,
                radius_y
            ),
            ShapeGeometry::Hermite { p0, p1, t0, t1 } => format!(
                "Hermite Curve from {} to {} with tangents {}, {}",
                fmt_point(p0),
                fmt_point(p1),
                fmt_point(t0),
                fmt_point(t1)
            ),
            ShapeGeometry::Bezier { p0, p1, p2, p3 } => format!(
                "Bezier Curve from {} to {} with controls {}, {}",
                fmt_point(p0),
                fmt_point(p3),
                fmt_point(p1),
                fmt_point(p2)
            ),
        }
    }
}

fn to_vec2(points: Vec<glam::IVec2>) -> Vec<Vec2> {
    points.into_iter().map(|p| p.as_vec2()).collect()
}

/// Gerundete Zahl ohne Nachkommastellen und ohne `-0`.
pub fn fmt_number(value: f32) -> String {
    let rounded = value.round();
    if rounded == 0.0 {
        "0".to_string()
    } else {
        format!("{}", rounded)
    }
}

/// `(x, y)` mit gerundeten Koordinaten.
pub fn fmt_point(point: Vec2) -> String {
    format!("({}, {})", fmt_number(point.x), fmt_number(point.y))
}

/// Eine gezeichnete Shape mit Rasterpunkten, Pixeln und Selektionszustand.
#[derive(Debug, Clone)]
pub struct Shape {
    geometry: ShapeGeometry,
    position: Vec2,
    color: Color,
    points: Vec<Vec2>,
    original_points: Vec<Vec2>,
    pixels: Vec<PixelHandle>,
    /// Highlight-Farbe, solange die Shape hervorgehoben ist.
    highlight: Option<Color>,
    rotation: f32,
}

impl Shape {
    /// Erstellt eine Shape und rastert sie (noch nicht gezeichnet).
    pub fn new(geometry: ShapeGeometry, color: Color) -> Self {
        let points = geometry.rasterize();
        Self {
            geometry,
            position: geometry.center(),
            color,
            original_points: points.clone(),
            points,
            pixels: Vec::new(),
            highlight: None,
            rotation: 0.0,
        }
    }

    pub fn kind(&self) -> ShapeKind {
        self.geometry.kind()
    }

    pub fn geometry(&self) -> &ShapeGeometry {
        &self.geometry
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Gespeicherte Farbe (ohne Highlight).
    pub fn color(&self) -> Color {
        self.color
    }

    /// Aktuell dargestellte Farbe (Highlight hat Vorrang).
    pub fn display_color(&self) -> Color {
        self.highlight.unwrap_or(self.color)
    }

    pub fn is_highlighted(&self) -> bool {
        self.highlight.is_some()
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    pub fn original_points(&self) -> &[Vec2] {
        &self.original_points
    }

    pub fn pixels(&self) -> &[PixelHandle] {
        &self.pixels
    }

    pub fn is_drawn(&self) -> bool {
        !self.pixels.is_empty()
    }

    /// Prüft, ob ein gesnappter Punkt der Shape auf `cell` liegt.
    pub fn covers(&self, cell: glam::IVec2) -> bool {
        self.points.iter().any(|p| raster::snap(*p) == cell)
    }

    pub fn center(&self) -> Vec2 {
        self.geometry.center()
    }

    /// Zeichnet alle Punkte neu: alte Pixel zurückgeben, neue holen.
    pub fn draw(&mut self, surface: &mut dyn PixelSurface) {
        self.release_pixels(surface);
        let color = self.display_color();
        self.pixels.reserve(self.points.len());
        for point in &self.points {
            let handle = surface.acquire();
            surface.set_position(handle, raster::snap(*point));
            surface.set_color(handle, color);
            self.pixels.push(handle);
        }
    }

    /// Ersetzt die Parameter, rastert neu, setzt Basislinie und Rotation zurück.
    pub fn set_values(&mut self, geometry: ShapeGeometry, surface: &mut dyn PixelSurface) {
        self.geometry = geometry;
        self.points = geometry.rasterize();
        self.original_points = self.points.clone();
        self.position = geometry.center();
        self.rotation = 0.0;
        self.draw(surface);
    }

    /// Verschiebt Punkte, Basislinie, Parameter und Position um `delta`.
    pub fn move_offset(&mut self, delta: Vec2, surface: &mut dyn PixelSurface) {
        self.position += delta;
        self.geometry = self.geometry.translated(delta);
        for p in self.points.iter_mut().chain(self.original_points.iter_mut()) {
            *p += delta;
        }
        self.sync_pixels(surface);
    }

    /// Verschiebt die Shape so, dass ihr Zentrum auf `destination` liegt.
    pub fn move_to_point(&mut self, destination: Vec2, surface: &mut dyn PixelSurface) {
        let delta = destination - self.center();
        self.move_offset(delta, surface);
    }

    /// Absolute Rotation relativ zur Basislinie um das Zentrum.
    pub fn set_rotation(&mut self, angle_degrees: f32, surface: &mut dyn PixelSurface) {
        self.points = raster::rotate_points(&self.original_points, self.center(), angle_degrees);
        self.rotation = angle_degrees;
        self.sync_pixels(surface);
    }

    /// Zuletzt gesetzter Rotationswinkel in Grad.
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    /// Setzt die Farbe; bei aktivem Highlight bleibt die Darstellung unverändert.
    pub fn recolor(&mut self, color: Color, surface: &mut dyn PixelSurface) {
        self.color = color;
        if self.highlight.is_none() {
            self.paint(surface, color);
        }
    }

    pub fn highlight(&mut self, color: Color, surface: &mut dyn PixelSurface) {
        self.highlight = Some(color);
        self.paint(surface, color);
    }

    pub fn clear_highlight(&mut self, surface: &mut dyn PixelSurface) {
        self.highlight = None;
        self.paint(surface, self.color);
    }

    pub fn details(&self) -> String {
        self.geometry.details()
    }

    /// Parameter als Kommandozeile: gerundete Zahlen + Farb-Token.
    pub fn values(&self) -> String {
        let mut tokens: Vec<String> = self
            .geometry
            .numbers()
            .into_iter()
            .map(fmt_number)
            .collect();
        tokens.push(self.color.to_token());
        tokens.join(" ")
    }

    /// Gibt alle Pixel an die Fläche zurück.
    pub fn clear(&mut self, surface: &mut dyn PixelSurface) {
        self.release_pixels(surface);
    }

    fn release_pixels(&mut self, surface: &mut dyn PixelSurface) {
        for handle in self.pixels.drain(..) {
            surface.release(handle);
        }
    }

    fn paint(&self, surface: &mut dyn PixelSurface, color: Color) {
        for &handle in &self.pixels {
            surface.set_color(handle, color);
        }
    }

    /// Überträgt die aktuellen Punkte auf bereits gezeichnete Pixel.
    fn sync_pixels(&mut self, surface: &mut dyn PixelSurface) {
        if !self.is_drawn() {
            return;
        }
        if self.pixels.len() != self.points.len() {
            self.draw(surface);
            return;
        }
        for (handle, point) in self.pixels.iter().zip(&self.points) {
            surface.set_position(*handle, raster::snap(*point));
        }
    }
}
