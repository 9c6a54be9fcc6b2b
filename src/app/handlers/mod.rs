//! Feature-Handler für AppCommand-Verarbeitung.
//!
//! Jeder Handler gruppiert die Command-Ausführung eines Feature-Bereichs.
//! Der Controller dispatcht an die passende Handler-Funktion.

pub mod command;
pub mod drawing;
pub mod file_io;
pub mod mode;
pub mod selection;
pub mod transform;
pub mod view;
