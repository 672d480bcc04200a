//! Rasterization service.
//!
//! Responsibilities:
//! - the primitive-painting contract the drawing dispatcher targets
//!   ([`Rasterizer`])
//! - single-channel coverage bitmaps for stamping ([`Mask`])
//! - incrementally built closed paths ([`ClosedPath`], [`PathOutline`])
//! - the built-in scanline implementation ([`SoftRasterizer`])
//!
//! Everything here paints already-resolved [`Ink`](crate::pixel::Ink)
//! values; color normalization happens upstream in `paint`.

mod mask;
mod outline;
mod service;
mod soft;

pub use mask::Mask;
pub use outline::{ClosedPath, PathOutline};
pub use service::Rasterizer;
pub use soft::SoftRasterizer;
