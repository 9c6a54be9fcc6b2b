use crate::app::registry::ShapeHandle;
use crate::app::state::InputMode;
use glam::Vec2;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
/// Positionen sind Gitterkoordinaten (noch nicht begrenzt/gesnappt).
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Modus per Toolbar oder Zifferntaste gewählt
    ModeSelected { mode: InputMode },
    /// Linksklick auf die Zeichenfläche
    CanvasClicked { pos: Vec2 },
    /// Cursor über der Zeichenfläche bewegt
    CursorMoved { pos: Vec2 },
    /// Escape: laufende Session abbrechen
    CancelRequested,
    /// Entf: Selektion löschen
    DeleteSelectedRequested,
    /// R: Rotations-Session für die Selektion starten
    RotateRequested,
    /// F: Verschiebe-Session für die Selektion starten
    MoveRequested,
    /// Eintrag in der Shape-Liste angeklickt
    ShapeListItemClicked { handle: ShapeHandle },
    /// Text der Kommandozeile geändert
    CommandInputChanged { text: String },
    /// Enter in der Kommandozeile
    CommandSubmitted { text: String },
    /// Strg+S: alle Shapes speichern
    SaveRequested,
    /// Shapes aus der Datei laden (angehängt)
    LoadRequested,
    /// G: Gitter ein-/ausblenden
    ToggleGridRequested,
    /// Anwendung beenden
    ExitRequested,
}
