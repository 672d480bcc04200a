//! gouache raster drawing crate.
//!
//! A CPU-side 2D drawing engine over in-memory pixel buffers: color
//! normalization into native inks, fill-then-outline primitive dispatch,
//! multi-line text layout with anchor-relative placement, and BFS flood
//! fill. Surfaces, rasterization, and fonts sit behind traits so hosts can
//! supply their own; built-in implementations cover the common case.

pub mod coords;
pub mod draw;
pub mod error;
pub mod fill;
pub mod logging;
pub mod paint;
pub mod pixel;
pub mod raster;
pub mod text;
