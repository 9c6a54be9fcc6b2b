//! Kommandozeile für numerische Eingabe im aktiven Modus.

use crate::app::{AppIntent, AppState, InputMode};
use crate::core::ShapeKind;

/// Eingabehilfe für Modus und ggf. selektierte Shape-Art.
pub fn input_hint(mode: InputMode, selected: Option<ShapeKind>) -> &'static str {
    let kind = match mode {
        InputMode::Rotate => return "Winkel in Grad (-360 bis 360)",
        InputMode::Move => return "dx dy",
        InputMode::Select => match selected {
            Some(kind) => kind,
            None => return "Shape selektieren, um sie zu bearbeiten",
        },
        draw => match draw.draw_kind() {
            Some(kind) => kind,
            None => return "",
        },
    };
    match kind {
        ShapeKind::Line => "x1 y1 x2 y2 [Farbe]",
        ShapeKind::Circle => "x y radius [Farbe]",
        ShapeKind::Ellipse => "x y radiusX radiusY [Farbe]",
        ShapeKind::Hermite => "p0x p0y p1x p1y t0x t0y t1x t1y [Farbe]",
        ShapeKind::Bezier => "p0x p0y p1x p1y p2x p2y p3x p3y [Farbe]",
    }
}

/// Rendert die Kommandozeile und gibt erzeugte Events zurück.
pub fn render_command_bar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let selected = state.registry.selected_shape().map(|s| s.kind());

    egui::TopBottomPanel::bottom("command_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!("{}:", state.editor.mode));

            let mut text = state.editor.command_input.clone();
            let response = ui.add(
                egui::TextEdit::singleline(&mut text)
                    .hint_text(input_hint(state.editor.mode, selected))
                    .desired_width(420.0),
            );
            if response.changed() {
                events.push(AppIntent::CommandInputChanged { text: text.clone() });
            }

            let enter = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            if enter || ui.button("Ausführen").clicked() {
                events.push(AppIntent::CommandSubmitted { text });
            }
        });
    });

    events
}
