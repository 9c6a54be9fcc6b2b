//! Zentrale Konfiguration für den Pixel-Shape-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::Color;
use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

// ── Gitter ──────────────────────────────────────────────────────────

/// Untere linke Ecke des Zeichenbereichs (Gitterzellen).
pub const GRID_AREA_MIN: IVec2 = IVec2::new(-50, -50);
/// Obere rechte Ecke des Zeichenbereichs (Gitterzellen).
pub const GRID_AREA_MAX: IVec2 = IVec2::new(50, 50);
/// Kantenlänge einer Gitterzelle in Screen-Pixeln.
pub const CELL_SIZE_PX: f32 = 8.0;
/// Minimale/maximale Zellgröße (Mausrad-Zoom).
pub const CELL_SIZE_MIN_PX: f32 = 2.0;
pub const CELL_SIZE_MAX_PX: f32 = 40.0;

// ── Farben ──────────────────────────────────────────────────────────

/// Farbe neu gezeichneter Shapes.
pub const DEFAULT_SHAPE_COLOR: Color = Color::BLACK;
/// Highlight-Farbe der selektierten Shape.
pub const HIGHLIGHT_COLOR: Color = Color::DARK_ORANGE;
/// Farbe der Zeichen-Vorschau (halbtransparentes Grau).
pub const PREVIEW_COLOR: Color = Color::rgba(128, 128, 128, 160);
/// Farbe der Gitterlinien.
pub const GRID_LINE_COLOR: Color = Color::rgba(200, 200, 200, 255);

// ── Meldungen ───────────────────────────────────────────────────────

/// Anzeigedauer einer Meldung in Sekunden (vor dem Ausblenden).
pub const MESSAGE_DURATION_SECS: f32 = 3.0;
/// Ausblenddauer in Sekunden.
pub const MESSAGE_FADE_SECS: f32 = 1.0;

// ── Persistenz ──────────────────────────────────────────────────────

/// Standard-Dateiname der gespeicherten Shapes.
pub const SHAPES_FILE_NAME: &str = "shapes.json";

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `pixel_shape_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorOptions {
    // ── Gitter ──────────────────────────────────────────────────
    /// Minimale Gitterkoordinate (inklusive)
    pub grid_area_min: IVec2,
    /// Maximale Gitterkoordinate (inklusive)
    pub grid_area_max: IVec2,
    /// Gitterlinien anzeigen
    pub show_grid: bool,
    /// Zellgröße in Screen-Pixeln
    pub cell_size_px: f32,
    /// Farbe der Gitterlinien
    #[serde(default = "default_grid_line_color")]
    pub grid_line_color: Color,

    // ── Shapes ──────────────────────────────────────────────────
    /// Farbe für neue Shapes ohne Farb-Token
    pub default_shape_color: Color,
    /// Highlight-Farbe der Selektion
    pub highlight_color: Color,
    /// Farbe der Zeichen-Vorschau
    pub preview_color: Color,

    // ── Meldungen ───────────────────────────────────────────────
    /// Anzeigedauer in Sekunden
    pub message_duration_secs: f32,
    /// Ausblenddauer in Sekunden
    #[serde(default = "default_message_fade_secs")]
    pub message_fade_secs: f32,

    // ── Persistenz ──────────────────────────────────────────────
    /// Pfad der Shape-Datei (relativ zum Arbeitsverzeichnis oder absolut)
    pub shapes_file: String,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            grid_area_min: GRID_AREA_MIN,
            grid_area_max: GRID_AREA_MAX,
            show_grid: true,
            cell_size_px: CELL_SIZE_PX,
            grid_line_color: GRID_LINE_COLOR,

            default_shape_color: DEFAULT_SHAPE_COLOR,
            highlight_color: HIGHLIGHT_COLOR,
            preview_color: PREVIEW_COLOR,

            message_duration_secs: MESSAGE_DURATION_SECS,
            message_fade_secs: MESSAGE_FADE_SECS,

            shapes_file: SHAPES_FILE_NAME.to_string(),
        }
    }
}

/// Serde-Default für `grid_line_color` (Abwärtskompatibilität).
fn default_grid_line_color() -> Color {
    GRID_LINE_COLOR
}

/// Serde-Default für `message_fade_secs` (Abwärtskompatibilität).
fn default_message_fade_secs() -> f32 {
    MESSAGE_FADE_SECS
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("pixel_shape_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("pixel_shape_editor.toml")
    }

    /// Klemmt eine Position auf den Zeichenbereich.
    pub fn clamp_to_grid(&self, pos: Vec2) -> Vec2 {
        let (min, max) = self.grid_bounds();
        pos.clamp(min.as_vec2(), max.as_vec2())
    }

    /// Zeichenbereich mit sortierten Ecken (vertauschte Werte in der Datei sind erlaubt).
    pub fn grid_bounds(&self) -> (IVec2, IVec2) {
        (
            self.grid_area_min.min(self.grid_area_max),
            self.grid_area_min.max(self.grid_area_max),
        )
    }

    /// Sichtbarkeitsfaktor einer Meldung im Alter `age_secs` (1 = voll, 0 = weg).
    pub fn message_alpha(&self, age_secs: f32) -> f32 {
        if age_secs <= self.message_duration_secs {
            return 1.0;
        }
        if self.message_fade_secs <= 0.0 {
            return 0.0;
        }
        (1.0 - (age_secs - self.message_duration_secs) / self.message_fade_secs).clamp(0.0, 1.0)
    }

    /// Gesamte Lebensdauer einer Meldung (Anzeige + Ausblenden).
    pub fn message_lifetime_secs(&self) -> f32 {
        self.message_duration_secs + self.message_fade_secs.max(0.0)
    }
}
