//! Kommandozeilen-Parser: `(Modus, Text)` → validierter Shape-Befehl.
//!
//! Grammatik: whitespace-getrennte Zahlen, optional gefolgt von genau einem
//! Farb-Token (Name oder Hex) am Ende. Die Prüfreihenfolge ist Anzahl,
//! dann Wertebereich, dann Selektion. Der Parser mutiert nichts; ausgeführt
//! wird in `handlers::command`.

use crate::app::state::InputMode;
use crate::core::raster::{self, MAX_COORDINATE};
use crate::core::{Color, ShapeGeometry, ShapeKind};
use glam::Vec2;

/// Validierter Befehl aus der Kommandozeile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeCommand {
    /// Neue Shape erzeugen (`None` = Standardfarbe)
    Create {
        geometry: ShapeGeometry,
        color: Option<Color>,
    },
    /// Selektierte Shape in-place ändern (`None` = Farbe behalten)
    Edit {
        geometry: ShapeGeometry,
        color: Option<Color>,
    },
    /// Selektierte Shape absolut rotieren (Grad)
    Rotate { angle: f32 },
    /// Selektierte Shape relativ verschieben
    Move { offset: Vec2 },
}

/// Gründe, aus denen eine Eingabe abgelehnt wird.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandError {
    /// Keine Zahl gefunden oder nicht-numerisches Token vor dem Farb-Token
    InvalidInput(String),
    /// Falsche Anzahl Zahlen für den Modus
    ArgumentCount { usage: &'static str },
    /// Koordinate, Tangente, Radius oder Versatz außerhalb von `±MAX_COORDINATE`
    OutOfBounds,
    /// Radius (gerundet) kleiner 1
    NonPositiveRadius(ShapeKind),
    /// Winkel außerhalb von [-360, 360]
    RotationOutOfRange,
    /// Rotate ohne Selektion
    NoSelectionForRotation,
    /// Move ohne Selektion
    NoSelectionForMove,
    /// Select-Modus ohne Selektion
    InvalidMode,
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::InvalidInput(input) => write!(f, "Invalid input: {}", input),
            CommandError::ArgumentCount { usage } => f.write_str(usage),
            CommandError::OutOfBounds => write!(
                f,
                "Coordinates must lie between -{} and {}",
                MAX_COORDINATE, MAX_COORDINATE
            ),
            CommandError::NonPositiveRadius(kind) => {
                write!(f, "{} requires positive radius", kind)
            }
            CommandError::RotationOutOfRange => {
                f.write_str("Rotation must be between -360 and 360")
            }
            CommandError::NoSelectionForRotation => f.write_str("No shape selected for rotation"),
            CommandError::NoSelectionForMove => f.write_str("No shape selected to move"),
            CommandError::InvalidMode => f.write_str("Invalid mode for command input"),
        }
    }
}

impl std::error::Error for CommandError {}

/// Grenze für numerische Rotation (beidseitig inklusiv).
pub const MAX_ROTATION_DEGREES: f32 = 360.0;

/// Zerlegte Eingabe: Zahlen plus optionales Farb-Token.
#[derive(Debug, Clone, PartialEq)]
struct Tokens {
    numbers: Vec<f32>,
    color: Option<Color>,
}

fn parse_number(token: &str) -> Option<f32> {
    token.parse::<f32>().ok().filter(|n| n.is_finite())
}

fn tokenize(input: &str) -> Result<Tokens, CommandError> {
    let invalid = || CommandError::InvalidInput(input.to_string());
    let parts: Vec<&str> = input.split_whitespace().collect();
    let Some((last, leading)) = parts.split_last() else {
        return Err(invalid());
    };

    let mut numbers = leading
        .iter()
        .map(|t| parse_number(t))
        .collect::<Option<Vec<f32>>>()
        .ok_or_else(invalid)?;

    let color = match parse_number(last) {
        Some(n) => {
            numbers.push(n);
            None
        }
        None => Some(Color::parse_token(last)),
    };

    if numbers.is_empty() {
        return Err(invalid());
    }
    Ok(Tokens { numbers, color })
}

fn usage(kind: ShapeKind) -> &'static str {
    match kind {
        ShapeKind::Line => "Line requires 4 numbers: x1 y1 x2 y2",
        ShapeKind::Circle => "Circle requires 3 numbers: x y radius",
        ShapeKind::Ellipse => "Ellipse requires 4 numbers: x y radiusX radiusY",
        ShapeKind::Hermite => "Hermite requires 4 points: p0 p1 t0 t1",
        ShapeKind::Bezier => "Bezier requires 4 points: p0 p1 p2 p3",
    }
}

fn radius(kind: ShapeKind, value: f32) -> Result<i32, CommandError> {
    let rounded = value.round();
    if rounded < 1.0 {
        return Err(CommandError::NonPositiveRadius(kind));
    }
    Ok(rounded as i32)
}

/// Baut die Geometrie einer Shape-Art aus der kanonischen Zahlenfolge.
///
/// Alle Werte müssen in `±MAX_COORDINATE` liegen.
pub fn geometry_from_numbers(
    kind: ShapeKind,
    numbers: &[f32],
) -> Result<ShapeGeometry, CommandError> {
    if numbers.len() != kind.argument_count() {
        return Err(CommandError::ArgumentCount { usage: usage(kind) });
    }
    if !numbers.iter().copied().all(raster::within_bounds) {
        return Err(CommandError::OutOfBounds);
    }
    let v = |i: usize| Vec2::new(numbers[i], numbers[i + 1]);

    let geometry = match kind {
        ShapeKind::Line => ShapeGeometry::Line {
            start: v(0),
            end: v(2),
        },
        ShapeKind::Circle => ShapeGeometry::Circle {
            center: v(0),
            radius: radius(kind, numbers[2])?,
        },
        ShapeKind::Ellipse => ShapeGeometry::Ellipse {
            center: v(0),
            radius_x: radius(kind, numbers[2])?,
            radius_y: radius(kind, numbers[3])?,
        },
        ShapeKind::Hermite => ShapeGeometry::Hermite {
            p0: v(0),
            p1: v(2),
            t0: v(4),
            t1: v(6),
        },
        ShapeKind::Bezier => ShapeGeometry::Bezier {
            p0: v(0),
            p1: v(2),
            p2: v(4),
            p3: v(6),
        },
    };
    Ok(geometry)
}

/// Parst eine Eingabe im Kontext des Modus und der aktuellen Selektion.
///
/// Im Select-Modus mit Selektion wird die selektierte Shape bearbeitet
/// (Argumente nach ihrer Art). Ein Farb-Token wird bei Rotate/Move ignoriert.
pub fn parse_command(
    mode: InputMode,
    input: &str,
    selected: Option<ShapeKind>,
) -> Result<ShapeCommand, CommandError> {
    let Tokens { numbers, color } = tokenize(input)?;

    match mode {
        InputMode::Rotate => {
            let &[angle] = numbers.as_slice() else {
                return Err(CommandError::ArgumentCount {
                    usage: "Rotate requires exactly 1 number",
                });
            };
            if !(-MAX_ROTATION_DEGREES..=MAX_ROTATION_DEGREES).contains(&angle) {
                return Err(CommandError::RotationOutOfRange);
            }
            if selected.is_none() {
                return Err(CommandError::NoSelectionForRotation);
            }
            Ok(ShapeCommand::Rotate { angle })
        }
        InputMode::Move => {
            let &[dx, dy] = numbers.as_slice() else {
                return Err(CommandError::ArgumentCount {
                    usage: "Move requires 2 numbers: dx dy",
                });
            };
            if !(raster::within_bounds(dx) && raster::within_bounds(dy)) {
                return Err(CommandError::OutOfBounds);
            }
            if selected.is_none() {
                return Err(CommandError::NoSelectionForMove);
            }
            Ok(ShapeCommand::Move {
                offset: Vec2::new(dx, dy),
            })
        }
        InputMode::Select => {
            let kind = selected.ok_or(CommandError::InvalidMode)?;
            let geometry = geometry_from_numbers(kind, &numbers)?;
            Ok(ShapeCommand::Edit { geometry, color })
        }
        InputMode::DrawLine
        | InputMode::DrawCircle
        | InputMode::DrawEllipse
        | InputMode::DrawHermite
        | InputMode::DrawBezier => {
            let kind = mode.draw_kind().ok_or(CommandError::InvalidMode)?;
            let geometry = geometry_from_numbers(kind, &numbers)?;
            Ok(ShapeCommand::Create { geometry, color })
        }
    }
}
