//! Core-Domänentypen: Farbe, Rasterisierung, Shapes, Pixel-Pool, Persistenz-Records.

pub mod color;
pub mod pixel_pool;
pub mod raster;
pub mod record;
/// Shape-Entität und kanonische Geometrie
///
/// - ShapeKind: Diskriminator (Line, Circle, Ellipse, Hermite, Bezier)
/// - ShapeGeometry: kanonische Parameter je Art
/// - Shape: abgeleitete Rasterpunkte, Pixel, Farbe, Highlight, Rotation
pub mod shape;

pub use color::Color;
pub use pixel_pool::{Pixel, PixelHandle, PixelPool, PixelSurface, DEFAULT_POOL_CAPACITY};
pub use record::{ShapeDocument, ShapeRecord};
pub use shape::{Shape, ShapeGeometry, ShapeKind};
