use crate::app::registry::ShapeHandle;
use crate::app::state::InputMode;
use glam::Vec2;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Eingabemodus wechseln (bricht laufende Sessions ab)
    SetMode { mode: InputMode },
    /// Shape unter der Gitterposition selektieren, sonst Selektion aufheben
    SelectAt { pos: Vec2 },
    /// Shape per Handle selektieren
    SelectShape { handle: ShapeHandle },
    /// Selektierte Shape löschen
    DeleteSelected,
    /// Klick im Zeichenmodus
    DrawClick { pos: Vec2 },
    /// Cursorposition setzen (Vorschau, Rotation, Verschieben)
    UpdateCursor { pos: Vec2 },
    /// Offene Zeichen-Klicks und Vorschau verwerfen
    CancelDrawing,
    /// Rotations-Session starten
    StartRotation,
    /// Rotations-Session übernehmen
    ConfirmRotation,
    /// Rotations-Session zurückrollen
    CancelRotation,
    /// Verschiebe-Session starten
    StartMove,
    /// Verschiebe-Session übernehmen
    ConfirmMove,
    /// Verschiebe-Session zurückrollen
    CancelMove,
    /// Kommandozeilen-Text setzen
    SetCommandInput { text: String },
    /// Kommandozeile parsen und ausführen
    SubmitCommand { text: String },
    /// Shapes in die JSON-Datei schreiben
    SaveShapes,
    /// Shapes aus der JSON-Datei laden
    LoadShapes,
    /// Gitter ein-/ausblenden
    ToggleGrid,
    /// Anwendung beenden
    RequestExit,
}
