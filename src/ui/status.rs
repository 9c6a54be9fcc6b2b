//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;
use crate::core::shape::fmt_point;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!("Mode: {}", state.editor.mode));
            ui.separator();
            ui.label(format!("Mouse: {}", fmt_point(state.editor.snapped_cursor())));
            ui.separator();
            ui.label(format!(
                "Shapes: {} | Pixel: {}",
                state.shape_count(),
                state.pool.active_count()
            ));
            ui.separator();

            match state.registry.selected_shape() {
                Some(shape) => ui.label(format!("Selected: {}", shape.details())),
                None => ui.label("Selected: -"),
            };
        });
    });
}
