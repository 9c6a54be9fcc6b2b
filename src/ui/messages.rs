//! Meldungs-Overlay: die letzten Meldungen, nach Ablauf ausgeblendet.

use crate::app::AppState;
use std::time::Instant;

/// Maximal gleichzeitig angezeigte Meldungen.
const MAX_VISIBLE: usize = 6;

/// Rendert die sichtbaren Meldungen links unten über der Zeichenfläche.
pub fn render_message_overlay(ctx: &egui::Context, state: &AppState, now: Instant) {
    let entries = state.messages.entries();
    let start = entries.len().saturating_sub(MAX_VISIBLE);

    egui::Area::new(egui::Id::new("message_overlay"))
        .anchor(egui::Align2::LEFT_BOTTOM, egui::vec2(12.0, -64.0))
        .interactable(false)
        .show(ctx, |ui| {
            for message in &entries[start..] {
                let age = now.saturating_duration_since(message.created).as_secs_f32();
                let alpha = state.options.message_alpha(age);
                if alpha <= 0.0 {
                    continue;
                }
                let color =
                    egui::Color32::from_rgba_unmultiplied(20, 20, 20, (alpha * 255.0) as u8);
                ui.label(egui::RichText::new(&message.text).color(color));
            }
        });
}
