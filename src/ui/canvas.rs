//! Zeichenfläche: Gitter, Pool-Pixel, Maus-Events → AppIntent.
//!
//! Gitterkoordinaten haben den Ursprung in der Mitte der Fläche, y zeigt nach oben.

use super::keyboard;
use crate::app::{AppIntent, AppState};
use crate::core::Color;
use crate::shared::options::{CELL_SIZE_MAX_PX, CELL_SIZE_MIN_PX};
use glam::{IVec2, Vec2};

/// Zoom-Faktor pro Scroll-Pixel.
const ZOOM_PER_SCROLL: f32 = 0.0015;

pub(crate) fn to_color32(color: Color) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
}

/// Abbildung Gitterkoordinaten ↔ Screen-Koordinaten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasTransform {
    /// Screen-Position des Gitterursprungs
    pub origin: egui::Pos2,
    /// Kantenlänge einer Zelle in Screen-Pixeln
    pub cell_size: f32,
}

impl CanvasTransform {
    pub fn screen_to_grid(&self, pos: egui::Pos2) -> Vec2 {
        Vec2::new(
            (pos.x - self.origin.x) / self.cell_size,
            (self.origin.y - pos.y) / self.cell_size,
        )
    }

    pub fn grid_to_screen(&self, point: Vec2) -> egui::Pos2 {
        egui::pos2(
            self.origin.x + point.x * self.cell_size,
            self.origin.y - point.y * self.cell_size,
        )
    }

    /// Screen-Rechteck der Zelle, deren Mittelpunkt der Gitterpunkt `cell` ist.
    pub fn cell_rect(&self, cell: IVec2) -> egui::Rect {
        egui::Rect::from_center_size(
            self.grid_to_screen(cell.as_vec2()),
            egui::vec2(self.cell_size, self.cell_size),
        )
    }
}

/// Zeichenfläche mit lokalem Zoom und Cursor-Deduplizierung.
pub struct CanvasView {
    cell_size: f32,
    last_cursor: Option<Vec2>,
}

impl CanvasView {
    pub fn new(cell_size: f32) -> Self {
        Self {
            cell_size: cell_size.clamp(CELL_SIZE_MIN_PX, CELL_SIZE_MAX_PX),
            last_cursor: None,
        }
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Ändert die Zellgröße um einen Scroll-Betrag (geklemmt).
    pub fn zoom(&mut self, scroll_delta: f32) {
        let factor = 1.0 + scroll_delta * ZOOM_PER_SCROLL;
        self.cell_size = (self.cell_size * factor).clamp(CELL_SIZE_MIN_PX, CELL_SIZE_MAX_PX);
    }

    /// Zeichnet Gitter und Pixel und sammelt Maus- und Tastatur-Intents.
    pub fn show(&mut self, ui: &mut egui::Ui, state: &AppState) -> Vec<AppIntent> {
        let mut events = Vec::new();
        let (rect, response) = ui.allocate_exact_size(ui.available_size(), egui::Sense::click());
        let transform = CanvasTransform {
            origin: rect.center(),
            cell_size: self.cell_size,
        };

        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 0.0, egui::Color32::WHITE);
        if state.options.show_grid {
            paint_grid(&painter, &transform, state);
        }
        for pixel in state.pool.active_pixels() {
            painter.rect_filled(
                transform.cell_rect(pixel.position),
                0.0,
                to_color32(pixel.color),
            );
        }

        if let Some(hover) = response.hover_pos() {
            let scroll = ui.input(|i| i.smooth_scroll_delta.y);
            if scroll != 0.0 {
                self.zoom(scroll);
            }
            let grid_pos = transform.screen_to_grid(hover);
            if self.last_cursor != Some(grid_pos) {
                self.last_cursor = Some(grid_pos);
                events.push(AppIntent::CursorMoved { pos: grid_pos });
            }
        }

        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                events.push(AppIntent::CanvasClicked {
                    pos: transform.screen_to_grid(pos),
                });
            }
        }

        events.extend(keyboard::collect_keyboard_intents(
            ui,
            ui.ctx().wants_keyboard_input(),
        ));
        events
    }
}

/// Gitterlinien zwischen den Zellen des Zeichenbereichs plus Rahmen.
fn paint_grid(painter: &egui::Painter, transform: &CanvasTransform, state: &AppState) {
    let (min, max) = state.options.grid_bounds();
    let stroke = egui::Stroke::new(1.0, to_color32(state.options.grid_line_color));
    let lo = min.as_vec2() - Vec2::splat(0.5);
    let hi = max.as_vec2() + Vec2::splat(0.5);

    for x in min.x..=max.x + 1 {
        let gx = x as f32 - 0.5;
        painter.line_segment(
            [
                transform.grid_to_screen(Vec2::new(gx, lo.y)),
                transform.grid_to_screen(Vec2::new(gx, hi.y)),
            ],
            stroke,
        );
    }
    for y in min.y..=max.y + 1 {
        let gy = y as f32 - 0.5;
        painter.line_segment(
            [
                transform.grid_to_screen(Vec2::new(lo.x, gy)),
                transform.grid_to_screen(Vec2::new(hi.x, gy)),
            ],
            stroke,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screen_and_grid_are_inverse() {
        let transform = CanvasTransform {
            origin: egui::pos2(400.0, 300.0),
            cell_size: 10.0,
        };
        let grid = transform.screen_to_grid(egui::pos2(430.0, 280.0));
        assert_eq!(grid, Vec2::new(3.0, 2.0));
        assert_eq!(transform.grid_to_screen(grid), egui::pos2(430.0, 280.0));
    }

    #[test]
    fn cell_rect_is_centered_on_grid_point() {
        let transform = CanvasTransform {
            origin: egui::pos2(0.0, 0.0),
            cell_size: 8.0,
        };
        let rect = transform.cell_rect(IVec2::new(1, -1));
        assert_eq!(rect.center(), egui::pos2(8.0, 8.0));
        assert_eq!(rect.width(), 8.0);
    }

    #[test]
    fn zoom_is_clamped() {
        let mut view = CanvasView::new(8.0);
        view.zoom(1.0e6);
        assert_eq!(view.cell_size(), CELL_SIZE_MAX_PX);
        view.zoom(-1.0e6);
        assert_eq!(view.cell_size(), CELL_SIZE_MIN_PX);
    }
}
