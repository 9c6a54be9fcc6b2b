//! Shape-Liste: Details aller Shapes, Klick selektiert.

use crate::app::{AppIntent, ShapeHandle, ShapeRegistry};

/// Zwischengespeicherte Listeneinträge, neu aufgebaut nur bei geänderter Registry.
#[derive(Debug, Default)]
pub struct ShapeListPanel {
    entries: Vec<(ShapeHandle, String)>,
}

impl ShapeListPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Baut die Einträge neu auf, wenn die Registry ihr Dirty-Flag gesetzt hat.
    pub fn refresh_if_dirty(&mut self, registry: &mut ShapeRegistry) -> bool {
        if !registry.take_list_dirty() {
            return false;
        }
        self.entries = registry
            .iter()
            .map(|(handle, shape)| (handle, shape.details()))
            .collect();
        true
    }

    pub fn entries(&self) -> &[(ShapeHandle, String)] {
        &self.entries
    }

    /// Rendert die Liste als rechtes Seitenpanel.
    pub fn show(&self, ctx: &egui::Context, selected: Option<ShapeHandle>) -> Vec<AppIntent> {
        let mut events = Vec::new();

        egui::SidePanel::right("shape_list")
            .resizable(true)
            .default_width(300.0)
            .show(ctx, |ui| {
                ui.heading(format!("Shapes ({})", self.entries.len()));
                ui.separator();
                egui::ScrollArea::vertical().show(ui, |ui| {
                    for (handle, details) in &self.entries {
                        if ui
                            .selectable_label(selected == Some(*handle), details)
                            .clicked()
                        {
                            events.push(AppIntent::ShapeListItemClicked { handle: *handle });
                        }
                    }
                });
            });

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Color, PixelPool, Shape, ShapeGeometry};
    use glam::Vec2;

    #[test]
    fn refresh_only_when_registry_changed() {
        let mut pool = PixelPool::new();
        let mut registry = ShapeRegistry::default();
        let mut panel = ShapeListPanel::new();
        assert!(!panel.refresh_if_dirty(&mut registry));

        let mut shape = Shape::new(
            ShapeGeometry::Circle {
                center: Vec2::new(2.0, 3.0),
                radius: 4,
            },
            Color::BLACK,
        );
        shape.draw(&mut pool);
        let handle = registry.insert(shape);

        assert!(panel.refresh_if_dirty(&mut registry));
        assert_eq!(
            panel.entries(),
            &[(handle, "Circle Center: (2, 3), Radius: 4".to_string())]
        );
        assert!(!panel.refresh_if_dirty(&mut registry));
    }
}
