//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält die Laufzeit-Optionen, die `app` und `ui` gemeinsam lesen.

pub mod options;

pub use options::EditorOptions;
pub use options::{GRID_AREA_MAX, GRID_AREA_MIN};
