use super::*;
use crate::core::{PixelPool, ShapeGeometry, ShapeKind};
use glam::Vec2;

/// Store im Speicher für Tests.
#[derive(Default)]
struct MemoryStore {
    records: Vec<ShapeRecord>,
}

impl ShapeStore for MemoryStore {
    fn save(&mut self, records: &[ShapeRecord]) -> anyhow::Result<()> {
        self.records = records.to_vec();
        Ok(())
    }

    fn load(&self) -> anyhow::Result<Vec<ShapeRecord>> {
        Ok(self.records.clone())
    }
}

fn drawn_line(pool: &mut PixelPool, x: f32) -> Shape {
    let mut shape = Shape::new(
        ShapeGeometry::Line {
            start: Vec2::new(x, 0.0),
            end: Vec2::new(x, 5.0),
        },
        Color::BLACK,
    );
    shape.draw(pool);
    shape
}

#[test]
fn test_register_is_idempotent() {
    let mut pool = PixelPool::new();
    let mut registry = ShapeRegistry::default();
    let handle = registry.allocate_handle();

    assert!(registry.register(handle, drawn_line(&mut pool, 0.0)));
    registry.take_list_dirty();
    assert!(!registry.register(handle, drawn_line(&mut pool, 9.0)));

    assert_eq!(registry.len(), 1);
    assert!(!registry.take_list_dirty());
    assert!(registry
        .get(handle)
        .expect("registriert")
        .covers(IVec2::new(0, 3)));
}

#[test]
fn test_select_twice_is_noop() {
    let mut pool = PixelPool::new();
    let mut messages = MessageLog::new();
    let mut registry = ShapeRegistry::default();
    let handle = registry.insert(drawn_line(&mut pool, 0.0));

    registry.select(handle, &mut pool, &mut messages);
    registry.select(handle, &mut pool, &mut messages);

    assert_eq!(messages.len(), 1);
    assert_eq!(messages.last(), Some("Select Line from (0, 0) to (0, 5)"));
    assert_eq!(registry.selected_handle(), Some(handle));
    assert!(registry.selected_shape().expect("selektiert").is_highlighted());
}

#[test]
fn test_select_other_clears_previous_highlight() {
    let mut pool = PixelPool::new();
    let mut messages = MessageLog::new();
    let mut registry = ShapeRegistry::new(Color::MAGENTA);
    let first = registry.insert(drawn_line(&mut pool, 0.0));
    let second = registry.insert(drawn_line(&mut pool, 10.0));

    registry.select(first, &mut pool, &mut messages);
    registry.select(second, &mut pool, &mut messages);

    let first_shape = registry.get(first).expect("registriert");
    assert!(!first_shape.is_highlighted());
    let pixel = pool.get(first_shape.pixels()[0]).expect("Pixel aktiv");
    assert_eq!(pixel.color, Color::BLACK);

    let second_shape = registry.get(second).expect("registriert");
    let pixel = pool.get(second_shape.pixels()[0]).expect("Pixel aktiv");
    assert_eq!(pixel.color, Color::MAGENTA);
}

#[test]
fn test_select_unknown_handle_clears_selection() {
    let mut pool = PixelPool::new();
    let mut messages = MessageLog::new();
    let mut registry = ShapeRegistry::default();
    let handle = registry.insert(drawn_line(&mut pool, 0.0));
    registry.select(handle, &mut pool, &mut messages);

    let unknown = registry.allocate_handle();
    registry.select(unknown, &mut pool, &mut messages);

    assert!(!registry.has_selection());
    assert!(!registry.get(handle).expect("registriert").is_highlighted());
}

#[test]
fn test_delete_selected_releases_pixels() {
    let mut pool = PixelPool::new();
    let mut messages = MessageLog::new();
    let mut registry = ShapeRegistry::default();
    let keep = registry.insert(drawn_line(&mut pool, 0.0));
    let kept_pixels = pool.active_count();
    let doomed = registry.insert(drawn_line(&mut pool, 20.0));

    registry.select(doomed, &mut pool, &mut messages);
    let removed = registry.delete_selected(&mut pool, &mut messages);

    assert!(removed.is_some());
    assert_eq!(pool.active_count(), kept_pixels);
    assert!(registry.contains(keep));
    assert!(!registry.contains(doomed));
    assert!(!registry.has_selection());
    assert_eq!(messages.last(), Some("Delete Line from (20, 0) to (20, 5)"));
}

#[test]
fn test_delete_without_selection_is_noop() {
    let mut pool = PixelPool::new();
    let mut messages = MessageLog::new();
    let mut registry = ShapeRegistry::default();
    registry.insert(drawn_line(&mut pool, 0.0));

    assert!(registry.delete_selected(&mut pool, &mut messages).is_none());
    assert_eq!(registry.len(), 1);
    assert!(messages.is_empty());
}

#[test]
fn test_shape_at_prefers_latest_shape() {
    let mut pool = PixelPool::new();
    let mut registry = ShapeRegistry::default();
    let older = registry.insert(drawn_line(&mut pool, 0.0));
    let newer = registry.insert(drawn_line(&mut pool, 0.0));

    assert_eq!(registry.shape_at(IVec2::new(0, 2)), Some(newer));
    assert_eq!(registry.shape_at(IVec2::new(1, 2)), None);
    assert_ne!(older, newer);
}

#[test]
fn test_save_and_load_through_store() {
    let mut pool = PixelPool::new();
    let mut messages = MessageLog::new();
    let mut registry = ShapeRegistry::default();
    registry.insert(drawn_line(&mut pool, 0.0));
    let mut circle = Shape::new(
        ShapeGeometry::Circle {
            center: Vec2::new(5.0, 5.0),
            radius: 3,
        },
        Color::RED,
    );
    circle.set_rotation(45.0, &mut pool);
    registry.insert(circle);

    let mut store = MemoryStore::default();
    assert_eq!(registry.save_to(&mut store).expect("speichern"), 2);

    let mut fresh_pool = PixelPool::new();
    let mut loaded = ShapeRegistry::default();
    let count = loaded
        .load_from(&store, &mut fresh_pool, &mut messages)
        .expect("laden");

    assert_eq!(count, 2);
    assert_eq!(messages.last(), Some("Loaded 2 shapes."));
    let kinds: Vec<ShapeKind> = loaded.iter().map(|(_, s)| s.kind()).collect();
    assert_eq!(kinds, vec![ShapeKind::Line, ShapeKind::Circle]);
    let (_, circle) = loaded.iter().nth(1).expect("Kreis geladen");
    assert_eq!(circle.rotation(), 45.0);
    assert_eq!(circle.color(), Color::RED);
    let total_points: usize = loaded.iter().map(|(_, s)| s.points().len()).sum();
    assert_eq!(fresh_pool.active_count(), total_points);
}

#[test]
fn test_load_skips_incomplete_records() {
    let mut pool = PixelPool::new();
    let mut messages = MessageLog::new();
    let mut store = MemoryStore::default();
    let mut broken = ShapeRecord::from_parts(
        &ShapeGeometry::Line {
            start: Vec2::ZERO,
            end: Vec2::ONE,
        },
        Color::BLACK,
        0.0,
    );
    broken.position2 = None;
    let good = ShapeRecord::from_parts(
        &ShapeGeometry::Ellipse {
            center: Vec2::ZERO,
            radius_x: 4,
            radius_y: 2,
        },
        Color::BLUE,
        0.0,
    );
    store.records = vec![broken, good];

    let mut registry = ShapeRegistry::default();
    let count = registry
        .load_from(&store, &mut pool, &mut messages)
        .expect("laden");

    assert_eq!(count, 1);
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_load_empty_store_reports_nothing_loaded() {
    let mut pool = PixelPool::new();
    let mut messages = MessageLog::new();
    let mut registry = ShapeRegistry::default();

    let count = registry
        .load_from(&MemoryStore::default(), &mut pool, &mut messages)
        .expect("laden");

    assert_eq!(count, 0);
    assert_eq!(messages.last(), Some("No shapes loaded."));
}
