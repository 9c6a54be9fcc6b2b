//! Shape-Registry mit Einzel-Selektion.
//!
//! Ordnet opake `ShapeHandle`s den Shapes zu, hält höchstens eine aktive
//! Selektion und steuert Highlight/Clear-Highlight beim Wechsel.

use super::message_log::MessageLog;
use super::persistence::ShapeStore;
use crate::core::{Color, PixelSurface, Shape, ShapeRecord};
use glam::IVec2;
use indexmap::IndexMap;

/// Opaker, stabiler Verweis auf eine registrierte Shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeHandle(u64);

impl ShapeHandle {
    pub fn id(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for ShapeHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Registry aller gezeichneten Shapes (Einfügereihenfolge bleibt erhalten).
#[derive(Debug)]
pub struct ShapeRegistry {
    shapes: IndexMap<ShapeHandle, Shape>,
    selected: Option<ShapeHandle>,
    next_id: u64,
    highlight_color: Color,
    /// Shape-Liste in der UI muss neu aufgebaut werden
    list_dirty: bool,
}

impl Default for ShapeRegistry {
    fn default() -> Self {
        Self::new(Color::DARK_ORANGE)
    }
}

impl ShapeRegistry {
    pub fn new(highlight_color: Color) -> Self {
        Self {
            shapes: IndexMap::new(),
            selected: None,
            next_id: 1,
            highlight_color,
            list_dirty: true,
        }
    }

    pub fn set_highlight_color(&mut self, color: Color) {
        self.highlight_color = color;
    }

    /// Vergibt ein neues, unbenutztes Handle.
    pub fn allocate_handle(&mut self) -> ShapeHandle {
        let handle = ShapeHandle(self.next_id);
        self.next_id += 1;
        handle
    }

    /// Registriert eine Shape unter `handle`. Bereits registrierte Handles
    /// bleiben unverändert (Rückgabe `false`).
    pub fn register(&mut self, handle: ShapeHandle, shape: Shape) -> bool {
        if self.shapes.contains_key(&handle) {
            return false;
        }
        self.next_id = self.next_id.max(handle.0 + 1);
        self.shapes.insert(handle, shape);
        self.list_dirty = true;
        true
    }

    /// Vergibt ein Handle und registriert die Shape.
    pub fn insert(&mut self, shape: Shape) -> ShapeHandle {
        let handle = self.allocate_handle();
        self.register(handle, shape);
        handle
    }

    pub fn get(&self, handle: ShapeHandle) -> Option<&Shape> {
        self.shapes.get(&handle)
    }

    pub fn get_mut(&mut self, handle: ShapeHandle) -> Option<&mut Shape> {
        self.shapes.get_mut(&handle)
    }

    pub fn contains(&self, handle: ShapeHandle) -> bool {
        self.shapes.contains_key(&handle)
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Alle Shapes in Registrierungsreihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = (ShapeHandle, &Shape)> + '_ {
        self.shapes.iter().map(|(h, s)| (*h, s))
    }

    /// Selektiert `handle`. Erneutes Selektieren derselben Shape ist ein No-op;
    /// ein unbekanntes Handle hebt nur die bisherige Selektion auf.
    pub fn select(
        &mut self,
        handle: ShapeHandle,
        surface: &mut dyn PixelSurface,
        messages: &mut MessageLog,
    ) {
        if self.selected == Some(handle) {
            return;
        }
        self.deselect(surface);

        let highlight = self.highlight_color;
        if let Some(shape) = self.shapes.get_mut(&handle) {
            shape.highlight(highlight, surface);
            self.selected = Some(handle);
            messages.log(format!("Select {}", shape.details()));
        }
    }

    /// Hebt die Selektion auf und entfernt das Highlight.
    pub fn deselect(&mut self, surface: &mut dyn PixelSurface) {
        if let Some(handle) = self.selected.take() {
            if let Some(shape) = self.shapes.get_mut(&handle) {
                shape.clear_highlight(surface);
            }
        }
    }

    /// Entfernt die selektierte Shape inkl. ihrer Pixel.
    pub fn delete_selected(
        &mut self,
        surface: &mut dyn PixelSurface,
        messages: &mut MessageLog,
    ) -> Option<Shape> {
        let handle = self.selected.take()?;
        let mut shape = self.shapes.shift_remove(&handle)?;
        shape.clear(surface);
        self.list_dirty = true;
        messages.log(format!("Delete {}", shape.details()));
        Some(shape)
    }

    pub fn has_selection(&self) -> bool {
        self.selected.is_some()
    }

    pub fn selected_handle(&self) -> Option<ShapeHandle> {
        self.selected
    }

    pub fn selected_shape(&self) -> Option<&Shape> {
        self.selected.and_then(|h| self.shapes.get(&h))
    }

    pub fn selected_shape_mut(&mut self) -> Option<&mut Shape> {
        let handle = self.selected?;
        self.shapes.get_mut(&handle)
    }

    /// Zuletzt registrierte Shape, die die Gitterzelle `cell` belegt.
    pub fn shape_at(&self, cell: IVec2) -> Option<ShapeHandle> {
        self.shapes
            .iter()
            .rev()
            .find(|(_, shape)| shape.covers(cell))
            .map(|(handle, _)| *handle)
    }

    /// Liefert `true` und setzt das Flag zurück, wenn sich die Liste geändert hat.
    pub fn take_list_dirty(&mut self) -> bool {
        std::mem::take(&mut self.list_dirty)
    }

    /// Markiert die Shape-Liste als veraltet (z.B. nach Änderung von Parametern).
    pub fn mark_list_dirty(&mut self) {
        self.list_dirty = true;
    }

    /// Entfernt alle Shapes und gibt ihre Pixel frei.
    pub fn clear(&mut self, surface: &mut dyn PixelSurface) {
        for shape in self.shapes.values_mut() {
            shape.clear(surface);
        }
        self.shapes.clear();
        self.selected = None;
        self.list_dirty = true;
    }

    /// Records aller Shapes in Registrierungsreihenfolge.
    pub fn records(&self) -> Vec<ShapeRecord> {
        self.shapes.values().map(ShapeRecord::from_shape).collect()
    }

    /// Speichert alle Shapes über den Store.
    pub fn save_to(&self, store: &mut dyn ShapeStore) -> anyhow::Result<usize> {
        let records = self.records();
        store.save(&records)?;
        Ok(records.len())
    }

    /// Lädt Records aus dem Store, registriert und zeichnet jede Shape.
    ///
    /// Die geladenen Shapes werden angehängt. Unvollständige Records werden
    /// mit Warnung übersprungen.
    pub fn load_from(
        &mut self,
        store: &dyn ShapeStore,
        surface: &mut dyn PixelSurface,
        messages: &mut MessageLog,
    ) -> anyhow::Result<usize> {
        let records = store.load()?;
        let mut loaded = 0;

        for (index, record) in records.iter().enumerate() {
            let geometry = match record.to_geometry() {
                Ok(geometry) => geometry,
                Err(e) => {
                    log::warn!("Shape {} übersprungen: {:#}", index, e);
                    continue;
                }
            };
            let mut shape = Shape::new(geometry, record.color);
            shape.draw(surface);
            if record.rotation != 0.0 {
                shape.set_rotation(record.rotation, surface);
            }
            self.insert(shape);
            loaded += 1;
        }

        if loaded == 0 {
            messages.log("No shapes loaded.");
        } else {
            messages.log(format!("Loaded {} shapes.", loaded));
        }
        Ok(loaded)
    }
}

#[cfg(test)]
mod tests;
