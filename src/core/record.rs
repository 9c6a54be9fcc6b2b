//! Persistierbare Shape-Records und das JSON-Dokument `{ "shapes": [...] }`.

use super::raster;
use super::shape::{Shape, ShapeGeometry, ShapeKind};
use super::Color;
use anyhow::{anyhow, bail, Context};
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Tagged Union einer gespeicherten Shape.
///
/// Punktbelegung je Art:
/// - Line: `position1` = Start, `position2` = Ende
/// - Circle/Ellipse: `position1` = Mittelpunkt
/// - Hermite: `position1`/`position2` = P0/P1, `position3`/`position4` = T0/T1
/// - Bezier: `position1`..`position4` = P0..P3
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeRecord {
    #[serde(rename = "type")]
    pub kind: ShapeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position1: Option<Vec2>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position2: Option<Vec2>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position3: Option<Vec2>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position4: Option<Vec2>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius_x: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius_y: Option<i32>,
    #[serde(default)]
    pub rotation: f32,
    #[serde(default)]
    pub color: Color,
}

impl ShapeRecord {
    fn empty(kind: ShapeKind, color: Color, rotation: f32) -> Self {
        Self {
            kind,
            position1: None,
            position2: None,
            position3: None,
            position4: None,
            radius: None,
            radius_x: None,
            radius_y: None,
            rotation,
            color,
        }
    }

    /// Erstellt einen Record aus Geometrie, Farbe und Rotation.
    pub fn from_parts(geometry: &ShapeGeometry, color: Color, rotation: f32) -> Self {
        let mut record = Self::empty(geometry.kind(), color, rotation);
        match *geometry {
            ShapeGeometry::Line { start, end } => {
                record.position1 = Some(start);
                record.position2 = Some(end);
            }
            ShapeGeometry::Circle { center, radius } => {
                record.position1 = Some(center);
                record.radius = Some(radius);
            }
            ShapeGeometry::Ellipse {
                center,
                radius_x,
                radius_y,
            } => {
                record.position1 = Some(center);
                record.radius_x = Some(radius_x);
                record.radius_y = Some(radius_y);
            }
            ShapeGeometry::Hermite { p0, p1, t0, t1 } => {
                record.position1 = Some(p0);
                record.position2 = Some(p1);
                record.position3 = Some(t0);
                record.position4 = Some(t1);
            }
            ShapeGeometry::Bezier { p0, p1, p2, p3 } => {
                record.position1 = Some(p0);
                record.position2 = Some(p1);
                record.position3 = Some(p2);
                record.position4 = Some(p3);
            }
        }
        record
    }

    pub fn from_shape(shape: &Shape) -> Self {
        Self::from_parts(shape.geometry(), shape.color(), shape.rotation())
    }

    /// Rekonstruiert die Geometrie; fehlende Felder, Radien < 1 und Werte
    /// außerhalb von `±MAX_COORDINATE` sind Fehler.
    pub fn to_geometry(&self) -> anyhow::Result<ShapeGeometry> {
        let kind = self.kind;
        let point = |value: Option<Vec2>, field: &str| {
            value.ok_or_else(|| anyhow!("{}: Feld '{}' fehlt", kind, field))
        };
        let radius = |value: Option<i32>, field: &str| -> anyhow::Result<i32> {
            let r = value.ok_or_else(|| anyhow!("{}: Feld '{}' fehlt", kind, field))?;
            if r < 1 {
                bail!("{}: '{}' muss positiv sein (ist {})", kind, field, r);
            }
            Ok(r)
        };

        let geometry = match kind {
            ShapeKind::Line => ShapeGeometry::Line {
                start: point(self.position1, "position1")?,
                end: point(self.position2, "position2")?,
            },
            ShapeKind::Circle => ShapeGeometry::Circle {
                center: point(self.position1, "position1")?,
                radius: radius(self.radius, "radius")?,
            },
            ShapeKind::Ellipse => ShapeGeometry::Ellipse {
                center: point(self.position1, "position1")?,
                radius_x: radius(self.radius_x, "radiusX")?,
                radius_y: radius(self.radius_y, "radiusY")?,
            },
            ShapeKind::Hermite => ShapeGeometry::Hermite {
                p0: point(self.position1, "position1")?,
                p1: point(self.position2, "position2")?,
                t0: point(self.position3, "position3")?,
                t1: point(self.position4, "position4")?,
            },
            ShapeKind::Bezier => ShapeGeometry::Bezier {
                p0: point(self.position1, "position1")?,
                p1: point(self.position2, "position2")?,
                p2: point(self.position3, "position3")?,
                p3: point(self.position4, "position4")?,
            },
        };
        if !geometry.is_within_bounds() {
            bail!(
                "{}: Werte außerhalb von ±{}",
                kind,
                raster::MAX_COORDINATE
            );
        }
        Ok(geometry)
    }
}

/// JSON-Wurzel mit der geordneten Shape-Liste.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShapeDocument {
    #[serde(default)]
    pub shapes: Vec<ShapeRecord>,
}

impl ShapeDocument {
    pub fn new(shapes: Vec<ShapeRecord>) -> Self {
        Self { shapes }
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        serde_json::to_string_pretty(self).context("Shape-Dokument nicht serialisierbar")
    }

    /// Parst ein Dokument. Einträge, die nicht als Record lesbar sind
    /// (z.B. unbekannter `type`), werden mit Warnung übersprungen.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let raw: RawDocument = serde_json::from_str(json).context("Ungültiges Shape-Dokument")?;
        let shapes = raw
            .shapes
            .into_iter()
            .enumerate()
            .filter_map(|(index, value)| match serde_json::from_value(value) {
                Ok(record) => Some(record),
                Err(e) => {
                    log::warn!("Shape-Eintrag {} übersprungen: {}", index, e);
                    None
                }
            })
            .collect();
        Ok(Self { shapes })
    }
}

#[derive(Deserialize)]
struct RawDocument {
    #[serde(default)]
    shapes: Vec<serde_json::Value>,
}
