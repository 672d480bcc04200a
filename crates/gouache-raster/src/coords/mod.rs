//! Coordinate and geometry types shared across the drawing pipeline.
//!
//! Canonical space:
//! - Pixels, origin top-left
//! - +X right, +Y down
//!
//! Text bounding boxes are the one exception: they are baseline-relative
//! with +Y *up* (see [`BBox`]), matching font metric conventions.

mod bbox;
mod point;
mod rect;

pub use bbox::BBox;
pub use point::Point;
pub use rect::Rect;
