//! Toolbar für Moduswahl und Aktionen auf der Selektion.

use crate::app::{AppIntent, AppState, InputMode};

/// Rendert die Toolbar und gibt erzeugte Events zurück.
pub fn render_toolbar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let active = state.editor.mode;

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label("Modus:");
            ui.separator();

            for (index, mode) in InputMode::SELECTABLE.into_iter().enumerate() {
                let label = format!("{} ({})", mode.label(), index + 1);
                if ui
                    .add(egui::Button::new(label).selected(active == mode))
                    .clicked()
                {
                    events.push(AppIntent::ModeSelected { mode });
                }
            }

            ui.separator();

            let can_transform = active == InputMode::Select && state.registry.has_selection();
            let rotate_btn =
                egui::Button::new("Rotieren (R)").selected(active == InputMode::Rotate);
            if ui.add_enabled(can_transform, rotate_btn).clicked() {
                events.push(AppIntent::RotateRequested);
            }
            let move_btn =
                egui::Button::new("Verschieben (F)").selected(active == InputMode::Move);
            if ui.add_enabled(can_transform, move_btn).clicked() {
                events.push(AppIntent::MoveRequested);
            }
            if ui
                .add_enabled(can_transform, egui::Button::new("Löschen (Entf)"))
                .clicked()
            {
                events.push(AppIntent::DeleteSelectedRequested);
            }
        });
    });

    events
}
