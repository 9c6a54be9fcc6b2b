//! Handler für Speichern und Laden der Shape-Datei.

use crate::app::persistence::JsonShapeStore;
use crate::app::AppState;
use anyhow::Context;

/// Schreibt alle Shapes in die konfigurierte JSON-Datei.
pub fn save(state: &mut AppState) -> anyhow::Result<()> {
    let mut store = JsonShapeStore::new(&state.options.shapes_file);
    state
        .registry
        .save_to(&mut store)
        .context("Speichern der Shapes fehlgeschlagen")?;
    state.messages.log("Save completed");
    Ok(())
}

/// Lädt Shapes aus der konfigurierten JSON-Datei und hängt sie an.
pub fn load(state: &mut AppState) -> anyhow::Result<()> {
    let store = JsonShapeStore::new(&state.options.shapes_file);
    state
        .registry
        .load_from(&store, &mut state.pool, &mut state.messages)
        .context("Laden der Shapes fehlgeschlagen")?;
    Ok(())
}
