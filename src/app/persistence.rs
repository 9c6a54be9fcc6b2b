//! Persistenz-Schnittstelle für Shape-Records und die JSON-Datei-Implementierung.

use crate::core::{ShapeDocument, ShapeRecord};
use anyhow::Context;
use std::path::{Path, PathBuf};

/// Speicher für die vollständige Shape-Liste.
pub trait ShapeStore {
    /// Schreibt alle Records (ersetzt den bisherigen Inhalt).
    fn save(&mut self, records: &[ShapeRecord]) -> anyhow::Result<()>;
    /// Liest alle Records. Ein fehlender Speicher ergibt eine leere Liste.
    fn load(&self) -> anyhow::Result<Vec<ShapeRecord>>;
}

/// JSON-Datei `{ "shapes": [...] }`.
#[derive(Debug, Clone)]
pub struct JsonShapeStore {
    path: PathBuf,
}

impl JsonShapeStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ShapeStore for JsonShapeStore {
    fn save(&mut self, records: &[ShapeRecord]) -> anyhow::Result<()> {
        let json = ShapeDocument::new(records.to_vec()).to_json()?;
        std::fs::write(&self.path, json)
            .with_context(|| format!("Shape-Datei nicht schreibbar: {}", self.path.display()))?;
        log::info!(
            "{} Shapes gespeichert nach: {}",
            records.len(),
            self.path.display()
        );
        Ok(())
    }

    fn load(&self) -> anyhow::Result<Vec<ShapeRecord>> {
        if !self.path.exists() {
            log::info!("Keine Shape-Datei gefunden: {}", self.path.display());
            return Ok(Vec::new());
        }
        let json = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Shape-Datei nicht lesbar: {}", self.path.display()))?;
        let document = ShapeDocument::from_json(&json)
            .with_context(|| format!("Shape-Datei fehlerhaft: {}", self.path.display()))?;
        Ok(document.shapes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Color, ShapeGeometry};
    use glam::Vec2;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "pixel_shape_editor_{}_{}.json",
            name,
            std::process::id()
        ))
    }

    #[test]
    fn missing_file_loads_empty() {
        let store = JsonShapeStore::new(temp_path("missing_never_written"));
        assert!(store.load().expect("fehlende Datei ist kein Fehler").is_empty());
    }

    #[test]
    fn save_then_load_returns_records() {
        let path = temp_path("store_roundtrip");
        let mut store = JsonShapeStore::new(&path);
        let records = vec![ShapeRecord::from_parts(
            &ShapeGeometry::Line {
                start: Vec2::new(1.0, 2.0),
                end: Vec2::new(3.0, 4.0),
            },
            Color::CYAN,
            0.0,
        )];

        store.save(&records).expect("speichern");
        assert_eq!(store.load().expect("laden"), records);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let path = temp_path("store_corrupt");
        std::fs::write(&path, "{ nicht json").expect("Testdatei schreibbar");
        assert!(JsonShapeStore::new(&path).load().is_err());
        let _ = std::fs::remove_file(&path);
    }
}
