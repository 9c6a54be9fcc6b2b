//! Rasterisierung: kontinuierliche Shape-Parameter → diskrete Gitterpunkte.
//!
//! Reine Funktionen ohne Zustand. Linie, Kreis und Ellipse liefern
//! ganzzahlige Punkte (`IVec2`), Kurven liefern Abtastpunkte (`Vec2`),
//! die erst beim Zeichnen auf das Gitter gesnappt werden.

use glam::{IVec2, Vec2};
use std::collections::HashSet;

/// Minimale Abtastauflösung für Hermite-/Bézier-Kurven.
pub const MIN_CURVE_RESOLUTION: u32 = 10;
/// Maximale Abtastauflösung für Hermite-/Bézier-Kurven.
pub const MAX_CURVE_RESOLUTION: u32 = 300;

/// Betragsgrenze für Koordinaten und Radien in Gitterzellen.
///
/// Linie, Kreis und Ellipse klemmen ihre Eingaben auf diesen Bereich.
/// Kommandozeile und geladene Records lehnen Werte außerhalb ab.
pub const MAX_COORDINATE: i32 = 10_000;

/// Gewichtung der Tangentenlängen bei der Hermite-Auflösung.
const HERMITE_TANGENT_WEIGHT: f32 = 0.25;
/// Samples pro Längeneinheit bei Hermite-Kurven.
const HERMITE_DENSITY: f32 = 2.0;
/// Samples pro Längeneinheit des Kontrollpolygons bei Bézier-Kurven.
const BEZIER_DENSITY: f32 = 1.5;

/// Rundet eine kontinuierliche Position auf die nächste Gitterzelle.
pub fn snap(pos: Vec2) -> IVec2 {
    pos.round().as_ivec2()
}

/// Prüft, ob ein Wert innerhalb von `±MAX_COORDINATE` liegt (NaN nicht).
pub fn within_bounds(value: f32) -> bool {
    value.abs() <= MAX_COORDINATE as f32
}

/// Gerundete Gitterzelle, auf `±MAX_COORDINATE` geklemmt.
fn snap_bounded(pos: Vec2) -> IVec2 {
    snap(pos).clamp(IVec2::splat(-MAX_COORDINATE), IVec2::splat(MAX_COORDINATE))
}

/// Bresenham-Linie von `start` nach `end` (beide Endpunkte inklusive).
///
/// Die Endpunkte werden vorher gerundet und auf `±MAX_COORDINATE` geklemmt.
/// Liefert immer mindestens einen Punkt.
pub fn line(start: Vec2, end: Vec2) -> Vec<IVec2> {
    let from = snap_bounded(start).as_i64vec2();
    let to = snap_bounded(end).as_i64vec2();

    let dx = (to.x - from.x).abs();
    let dy = -(to.y - from.y).abs();
    let sx = if from.x < to.x { 1 } else { -1 };
    let sy = if from.y < to.y { 1 } else { -1 };

    let mut points = Vec::with_capacity(dx.max(-dy) as usize + 1);
    let mut current = from;
    let mut err = dx + dy;

    loop {
        points.push(current.as_ivec2());
        if current == to {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            current.x += sx;
        }
        if e2 <= dx {
            err += dx;
            current.y += sy;
        }
    }

    points
}

/// Sammelt symmetrische Punkte ohne Duplikate (Reihenfolge bleibt erhalten).
struct SymmetricPoints {
    center: IVec2,
    seen: HashSet<IVec2>,
    points: Vec<IVec2>,
}

impl SymmetricPoints {
    fn new(center: IVec2) -> Self {
        Self {
            center,
            seen: HashSet::new(),
            points: Vec::new(),
        }
    }

    fn push(&mut self, offset: IVec2) {
        let point = self.center + offset;
        if self.seen.insert(point) {
            self.points.push(point);
        }
    }

    /// Vier Achsen-Spiegelungen von (x, y).
    fn push_quadrants(&mut self, x: i32, y: i32) {
        self.push(IVec2::new(x, y));
        self.push(IVec2::new(-x, y));
        self.push(IVec2::new(x, -y));
        self.push(IVec2::new(-x, -y));
    }

    /// Acht Oktanten-Spiegelungen von (x, y).
    fn push_octants(&mut self, x: i32, y: i32) {
        self.push_quadrants(x, y);
        self.push_quadrants(y, x);
    }

    fn into_points(self) -> Vec<IVec2> {
        self.points
    }
}

/// Midpoint-Kreis um den (gerundeten) Mittelpunkt.
///
/// `radius <= 0` ergibt nur den Mittelpunkt, größere Radien als
/// `MAX_COORDINATE` werden geklemmt.
pub fn circle(center: Vec2, radius: i32) -> Vec<IVec2> {
    let center = snap_bounded(center);
    if radius <= 0 {
        return vec![center];
    }
    let radius = radius.min(MAX_COORDINATE);

    let mut out = SymmetricPoints::new(center);
    let mut x: i32 = 0;
    let mut y: i32 = radius;
    let mut d = 1 - i64::from(radius);

    while x <= y {
        out.push_octants(x, y);
        let (x64, y64) = (i64::from(x), i64::from(y));
        if d < 0 {
            d += 2 * x64 + 3;
        } else {
            d += 2 * (x64 - y64) + 5;
            y -= 1;
        }
        x += 1;
    }

    out.into_points()
}

/// Midpoint-Ellipse (zwei Regionen) um den (gerundeten) Mittelpunkt.
///
/// Region 1 läuft, solange die Steigung > -1 ist, Region 2 bis `y < 0`.
/// Ein Radius `<= 0` ergibt nur den Mittelpunkt, größere Radien als
/// `MAX_COORDINATE` werden geklemmt.
pub fn ellipse(center: Vec2, radius_x: i32, radius_y: i32) -> Vec<IVec2> {
    let center = snap_bounded(center);
    if radius_x <= 0 || radius_y <= 0 {
        return vec![center];
    }
    let radius_x = radius_x.min(MAX_COORDINATE);
    let radius_y = radius_y.min(MAX_COORDINATE);

    let rx_sq = f64::from(radius_x).powi(2);
    let ry_sq = f64::from(radius_y).powi(2);

    let mut out = SymmetricPoints::new(center);
    let mut x: i32 = 0;
    let mut y: i32 = radius_y;
    let mut dx = 0.0;
    let mut dy = 2.0 * rx_sq * f64::from(y);

    // Region 1
    let mut p1 = ry_sq - rx_sq * f64::from(radius_y) + 0.25 * rx_sq;
    while dx < dy {
        out.push_quadrants(x, y);
        x += 1;
        dx += 2.0 * ry_sq;
        if p1 < 0.0 {
            p1 += dx + ry_sq;
        } else {
            y -= 1;
            dy -= 2.0 * rx_sq;
            p1 += dx - dy + ry_sq;
        }
    }

    // Region 2
    let half_x = f64::from(x) + 0.5;
    let below_y = f64::from(y - 1);
    let mut p2 = ry_sq * half_x * half_x + rx_sq * below_y * below_y - rx_sq * ry_sq;
    while y >= 0 {
        out.push_quadrants(x, y);
        y -= 1;
        dy -= 2.0 * rx_sq;
        if p2 > 0.0 {
            p2 += rx_sq - dy;
        } else {
            x += 1;
            dx += 2.0 * ry_sq;
            p2 += dx - dy + rx_sq;
        }
    }

    out.into_points()
}

/// Klemmt eine Roh-Komplexität auf den erlaubten Auflösungsbereich.
///
/// NaN landet auf dem Minimum, Unendlich auf dem Maximum.
fn clamp_resolution(raw: f32) -> u32 {
    (raw.ceil() as i64).clamp(
        i64::from(MIN_CURVE_RESOLUTION),
        i64::from(MAX_CURVE_RESOLUTION),
    ) as u32
}

/// Adaptive Auflösung einer Hermite-Kurve: Sehnenlänge + gewichtete Tangentenlängen.
pub fn hermite_resolution(p0: Vec2, p1: Vec2, t0: Vec2, t1: Vec2) -> u32 {
    let length = p0.distance(p1);
    let tangent_influence = (t0.length() + t1.length()) * HERMITE_TANGENT_WEIGHT;
    clamp_resolution((length + tangent_influence) * HERMITE_DENSITY)
}

/// Adaptive Auflösung einer kubischen Bézier-Kurve über die Länge des Kontrollpolygons.
pub fn bezier_resolution(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2) -> u32 {
    let approx_length = p0.distance(p1) + p1.distance(p2) + p2.distance(p3);
    clamp_resolution(approx_length * BEZIER_DENSITY)
}

/// H(t) = h00·P0 + h10·T0 + h01·P1 + h11·T1
pub fn hermite_point(p0: Vec2, p1: Vec2, t0: Vec2, t1: Vec2, t: f32) -> Vec2 {
    let t2 = t * t;
    let t3 = t2 * t;
    let h00 = 2.0 * t3 - 3.0 * t2 + 1.0;
    let h10 = t3 - 2.0 * t2 + t;
    let h01 = -2.0 * t3 + 3.0 * t2;
    let h11 = t3 - t2;
    h00 * p0 + h10 * t0 + h01 * p1 + h11 * t1
}

/// B(t) = (1-t)³·P0 + 3(1-t)²t·P1 + 3(1-t)t²·P2 + t³·P3
pub fn cubic_bezier(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, t: f32) -> Vec2 {
    let inv = 1.0 - t;
    let inv2 = inv * inv;
    let t2 = t * t;
    inv2 * inv * p0 + 3.0 * inv2 * t * p1 + 3.0 * inv * t2 * p2 + t2 * t * p3
}

/// Wertet `eval` an `resolution + 1` gleichverteilten Parametern in [0, 1] aus.
pub fn sample_curve(resolution: u32, eval: impl Fn(f32) -> Vec2) -> Vec<Vec2> {
    let resolution = resolution.max(1);
    (0..=resolution)
        .map(|i| eval(i as f32 / resolution as f32))
        .collect()
}

/// Hermite-Kurve mit adaptiver Auflösung.
pub fn hermite(p0: Vec2, p1: Vec2, t0: Vec2, t1: Vec2) -> Vec<Vec2> {
    let resolution = hermite_resolution(p0, p1, t0, t1);
    sample_curve(resolution, |t| hermite_point(p0, p1, t0, t1, t))
}

/// Kubische Bézier-Kurve mit adaptiver Auflösung.
pub fn bezier(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2) -> Vec<Vec2> {
    let resolution = bezier_resolution(p0, p1, p2, p3);
    sample_curve(resolution, |t| cubic_bezier(p0, p1, p2, p3, t))
}

/// Rotiert eine Punktmenge um `pivot` (Grad, gegen den Uhrzeigersinn).
///
/// Vielfache von 360° liefern die Eingabe unverändert zurück, damit
/// `0°` die Basislinie bitgenau wiederherstellt.
pub fn rotate_points(points: &[Vec2], pivot: Vec2, angle_degrees: f32) -> Vec<Vec2> {
    if angle_degrees.rem_euclid(360.0) == 0.0 {
        return points.to_vec();
    }

    let rotation = Vec2::from_angle(angle_degrees.to_radians());
    points
        .iter()
        .map(|&p| pivot + rotation.rotate(p - pivot))
        .collect()
}
