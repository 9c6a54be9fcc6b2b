//! Top-Menü (Datei, Ansicht).

use crate::app::{AppIntent, AppState};

/// Rendert die Menü-Leiste
pub fn render_menu(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("Datei", |ui| {
                if ui.button("Speichern (Ctrl+S)").clicked() {
                    events.push(AppIntent::SaveRequested);
                    ui.close();
                }

                if ui.button("Laden (anhängen)").clicked() {
                    events.push(AppIntent::LoadRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Beenden").clicked() {
                    events.push(AppIntent::ExitRequested);
                    ui.close();
                }
            });

            ui.menu_button("Ansicht", |ui| {
                let label = if state.options.show_grid {
                    "Gitter ausblenden (G)"
                } else {
                    "Gitter einblenden (G)"
                };
                if ui.button(label).clicked() {
                    events.push(AppIntent::ToggleGridRequested);
                    ui.close();
                }
            });
        });
    });

    events
}
