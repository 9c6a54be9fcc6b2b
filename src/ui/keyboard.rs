//! Keyboard-Shortcuts für die Zeichenfläche.
//!
//! Verarbeitet globale Tastenkombinationen und mappt sie auf `AppIntent`s.
//! Ob eine Taste im aktuellen Modus wirkt, entscheidet das Intent-Mapping.

use crate::app::{AppIntent, InputMode};

/// Zifferntasten 1–6 in der Reihenfolge von `InputMode::SELECTABLE`.
const MODE_KEYS: [egui::Key; 6] = [
    egui::Key::Num1,
    egui::Key::Num2,
    egui::Key::Num3,
    egui::Key::Num4,
    egui::Key::Num5,
    egui::Key::Num6,
];

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
///
/// Solange ein Textfeld den Fokus hat, wirken nur Escape und Ctrl+S.
pub(super) fn collect_keyboard_intents(ui: &egui::Ui, text_input_focused: bool) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let (modifiers, key_s_pressed, key_escape_pressed) = ui.input(|i| {
        (
            i.modifiers,
            i.key_pressed(egui::Key::S),
            i.key_pressed(egui::Key::Escape),
        )
    });

    if key_escape_pressed {
        events.push(AppIntent::CancelRequested);
    }

    if modifiers.command && key_s_pressed {
        events.push(AppIntent::SaveRequested);
    }

    if text_input_focused || modifiers.command {
        return events;
    }

    for (key, mode) in MODE_KEYS.iter().zip(InputMode::SELECTABLE) {
        if ui.input(|i| i.key_pressed(*key)) {
            events.push(AppIntent::ModeSelected { mode });
        }
    }

    let (key_g_pressed, key_r_pressed, key_f_pressed, key_del_pressed) = ui.input(|i| {
        (
            i.key_pressed(egui::Key::G),
            i.key_pressed(egui::Key::R),
            i.key_pressed(egui::Key::F),
            i.key_pressed(egui::Key::Delete),
        )
    });

    if key_g_pressed {
        events.push(AppIntent::ToggleGridRequested);
    }
    if key_r_pressed {
        events.push(AppIntent::RotateRequested);
    }
    if key_f_pressed {
        events.push(AppIntent::MoveRequested);
    }
    if key_del_pressed {
        events.push(AppIntent::DeleteSelectedRequested);
    }

    events
}
