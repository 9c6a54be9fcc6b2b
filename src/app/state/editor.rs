use crate::core::ShapeKind;
use glam::Vec2;

/// Aktiver Eingabemodus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InputMode {
    /// Standard: Shapes per Klick selektieren, selektierte Shape bearbeiten
    #[default]
    Select,
    /// Linie per zwei Klicks oder `x1 y1 x2 y2`
    DrawLine,
    /// Kreis per zwei Klicks oder `x y radius`
    DrawCircle,
    /// Ellipse per zwei Klicks oder `x y radiusX radiusY`
    DrawEllipse,
    /// Hermite-Kurve per vier Klicks oder acht Zahlen
    DrawHermite,
    /// Bézier-Kurve per vier Klicks oder acht Zahlen
    DrawBezier,
    /// Rotations-Session der Selektion
    Rotate,
    /// Verschiebe-Session der Selektion
    Move,
}

impl InputMode {
    /// Modi, die direkt per Toolbar oder Zifferntaste wählbar sind.
    pub const SELECTABLE: [InputMode; 6] = [
        InputMode::Select,
        InputMode::DrawLine,
        InputMode::DrawCircle,
        InputMode::DrawEllipse,
        InputMode::DrawHermite,
        InputMode::DrawBezier,
    ];

    /// Shape-Art, die in diesem Modus gezeichnet wird.
    pub fn draw_kind(self) -> Option<ShapeKind> {
        match self {
            InputMode::DrawLine => Some(ShapeKind::Line),
            InputMode::DrawCircle => Some(ShapeKind::Circle),
            InputMode::DrawEllipse => Some(ShapeKind::Ellipse),
            InputMode::DrawHermite => Some(ShapeKind::Hermite),
            InputMode::DrawBezier => Some(ShapeKind::Bezier),
            InputMode::Select | InputMode::Rotate | InputMode::Move => None,
        }
    }

    pub fn is_drawing(self) -> bool {
        self.draw_kind().is_some()
    }

    /// Läuft eine Rotations- oder Verschiebe-Session?
    pub fn is_transform(self) -> bool {
        matches!(self, InputMode::Rotate | InputMode::Move)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            InputMode::Select => "Select",
            InputMode::DrawLine => "DrawLine",
            InputMode::DrawCircle => "DrawCircle",
            InputMode::DrawEllipse => "DrawEllipse",
            InputMode::DrawHermite => "DrawHermite",
            InputMode::DrawBezier => "DrawBezier",
            InputMode::Rotate => "Rotate",
            InputMode::Move => "Move",
        }
    }

    /// Kurzbeschriftung für die Toolbar.
    pub fn label(self) -> &'static str {
        match self {
            InputMode::Select => "Auswahl",
            InputMode::DrawLine => "Linie",
            InputMode::DrawCircle => "Kreis",
            InputMode::DrawEllipse => "Ellipse",
            InputMode::DrawHermite => "Hermite",
            InputMode::DrawBezier => "Bézier",
            InputMode::Rotate => "Rotieren",
            InputMode::Move => "Verschieben",
        }
    }
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Zustand von Modus, Cursor und Kommandozeile
#[derive(Debug, Clone, Default)]
pub struct EditorState {
    /// Aktiver Eingabemodus
    pub mode: InputMode,
    /// Inhalt der Kommandozeile
    pub command_input: String,
    /// Letzte (auf den Gitterbereich begrenzte) Cursorposition in Gitterkoordinaten
    pub cursor: Vec2,
}

impl EditorState {
    /// Erstellt den Standardzustand (Select-Modus, leere Eingabe).
    pub fn new() -> Self {
        Self::default()
    }

    /// Cursorposition auf die nächste Gitterzelle gerundet.
    pub fn snapped_cursor(&self) -> Vec2 {
        self.cursor.round()
    }
}
