use crate::app::message_log::MessageLog;
use crate::app::registry::ShapeRegistry;
use crate::app::tools::{MoveController, RotationController, ShapeDrawer};
use crate::app::CommandLog;
use crate::core::PixelPool;
use crate::shared::EditorOptions;

use super::EditorState;

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Alle registrierten Shapes inkl. Selektion
    pub registry: ShapeRegistry,
    /// Pixel-Pool, aus dem Shapes und Vorschau zeichnen
    pub pool: PixelPool,
    /// Klick-Zeichnen und Vorschau
    pub drawer: ShapeDrawer,
    /// Rotations-Session
    pub rotation: RotationController,
    /// Verschiebe-Session
    pub mover: MoveController,
    /// Modus, Cursor und Kommandozeile
    pub editor: EditorState,
    /// Benutzer-sichtbare Meldungen
    pub messages: MessageLog,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Gitter, Farben, Dateipfad)
    pub options: EditorOptions,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State mit Standard-Optionen
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen leeren App-State mit den übergebenen Optionen.
    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            registry: ShapeRegistry::new(options.highlight_color),
            pool: PixelPool::new(),
            drawer: ShapeDrawer::new(),
            rotation: RotationController::new(),
            mover: MoveController::new(),
            editor: EditorState::new(),
            messages: MessageLog::new(),
            command_log: CommandLog::new(),
            options,
            should_exit: false,
        }
    }

    /// Gibt die Anzahl der Shapes zurück (für UI-Anzeige)
    pub fn shape_count(&self) -> usize {
        self.registry.len()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
