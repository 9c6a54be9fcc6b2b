//! Pixel-Pool: wiederverwendbare Pixel-Slots, auf die Shapes ihre Rasterpunkte zeichnen.
//!
//! Shapes kennen nur das `PixelSurface`-Trait (acquire/release/set_*),
//! der konkrete Pool gehört dem AppState und wird vom Canvas gezeichnet.

use super::Color;
use glam::IVec2;
use std::collections::VecDeque;

/// Standard-Vorwärmgröße des Pools.
pub const DEFAULT_POOL_CAPACITY: usize = 1000;

/// Opaker Verweis auf einen Pixel-Slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PixelHandle(usize);

impl PixelHandle {
    /// Slot-Index im Pool.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Zeichenfläche, auf die Shapes ihre Pixel legen.
pub trait PixelSurface {
    /// Holt einen freien Pixel (aktiv, Position/Farbe noch unbestimmt).
    fn acquire(&mut self) -> PixelHandle;
    /// Gibt einen Pixel zurück. Doppelte Rückgabe ist ein No-op.
    fn release(&mut self, handle: PixelHandle);
    /// Setzt die Gitterposition eines Pixels.
    fn set_position(&mut self, handle: PixelHandle, position: IVec2);
    /// Setzt die Farbe eines Pixels.
    fn set_color(&mut self, handle: PixelHandle, color: Color);
}

/// Ein Pixel-Slot im Pool.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pixel {
    pub position: IVec2,
    pub color: Color,
    pub active: bool,
}

impl Default for Pixel {
    fn default() -> Self {
        Self {
            position: IVec2::ZERO,
            color: Color::BLACK,
            active: false,
        }
    }
}

/// Pool mit FIFO-Freiliste; wächst bei Bedarf.
#[derive(Debug, Clone, Default)]
pub struct PixelPool {
    slots: Vec<Pixel>,
    free: VecDeque<usize>,
    active_count: usize,
}

impl PixelPool {
    /// Leerer Pool ohne vorgewärmte Slots.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pool mit `capacity` vorgewärmten, inaktiven Slots.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: vec![Pixel::default(); capacity],
            free: (0..capacity).collect(),
            active_count: 0,
        }
    }

    /// Anzahl aktiver Pixel.
    pub fn active_count(&self) -> usize {
        self.active_count
    }

    /// Gesamtzahl der Slots (aktiv + frei).
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Liest einen Slot (auch inaktive).
    pub fn get(&self, handle: PixelHandle) -> Option<&Pixel> {
        self.slots.get(handle.0)
    }

    /// Iteriert über alle aktiven Pixel.
    pub fn active_pixels(&self) -> impl Iterator<Item = &Pixel> + '_ {
        self.slots.iter().filter(|p| p.active)
    }

    fn slot_mut(&mut self, handle: PixelHandle) -> Option<&mut Pixel> {
        self.slots.get_mut(handle.0).filter(|p| p.active)
    }
}

impl PixelSurface for PixelPool {
    fn acquire(&mut self) -> PixelHandle {
        let index = match self.free.pop_front() {
            Some(index) => index,
            None => {
                self.slots.push(Pixel::default());
                self.slots.len() - 1
            }
        };
        self.slots[index] = Pixel {
            active: true,
            ..Pixel::default()
        };
        self.active_count += 1;
        PixelHandle(index)
    }

    fn release(&mut self, handle: PixelHandle) {
        match self.slot_mut(handle) {
            Some(pixel) => {
                pixel.active = false;
                self.free.push_back(handle.0);
                self.active_count -= 1;
            }
            None => log::warn!("Pixel {} ist nicht aktiv, release ignoriert", handle.0),
        }
    }

    fn set_position(&mut self, handle: PixelHandle, position: IVec2) {
        if let Some(pixel) = self.slot_mut(handle) {
            pixel.position = position;
        }
    }

    fn set_color(&mut self, handle: PixelHandle, color: Color) {
        if let Some(pixel) = self.slot_mut(handle) {
            pixel.color = color;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn acquire_reuses_released_slots_fifo() {
        let mut pool = PixelPool::with_capacity(2);
        let a = pool.acquire();
        let b = pool.acquire();
        assert_eq!(pool.active_count(), 2);

        pool.release(a);
        pool.release(b);
        assert_eq!(pool.active_count(), 0);

        assert_eq!(pool.acquire(), a);
        assert_eq!(pool.acquire(), b);
        assert_eq!(pool.capacity(), 2);
    }

    #[test]
    fn pool_grows_when_exhausted() {
        let mut pool = PixelPool::new();
        let handles: Vec<_> = (0..5).map(|_| pool.acquire()).collect();
        assert_eq!(pool.capacity(), 5);
        assert_eq!(handles.last().map(|h| h.index()), Some(4));
    }

    #[test]
    fn double_release_is_ignored() {
        let mut pool = PixelPool::new();
        let handle = pool.acquire();
        pool.release(handle);
        pool.release(handle);
        assert_eq!(pool.active_count(), 0);
        assert_eq!(pool.acquire(), handle);
        assert_eq!(pool.capacity(), 1);
    }

    #[test]
    fn setters_only_touch_active_pixels() {
        let mut pool = PixelPool::new();
        let handle = pool.acquire();
        pool.set_position(handle, IVec2::new(3, -7));
        pool.set_color(handle, Color::RED);

        let pixel = pool.get(handle).expect("Slot existiert");
        assert_eq!(pixel.position, IVec2::new(3, -7));
        assert_eq!(pixel.color, Color::RED);
        assert_eq!(pool.active_pixels().count(), 1);

        pool.release(handle);
        pool.set_color(handle, Color::BLUE);
        assert_eq!(pool.get(handle).map(|p| p.color), Some(Color::RED));
        assert_eq!(pool.active_pixels().count(), 0);
    }
}
