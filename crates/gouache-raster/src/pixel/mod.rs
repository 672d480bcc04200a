//! Pixel surfaces and their native encodings.
//!
//! Responsibilities:
//! - the color mode taxonomy ([`Mode`])
//! - the packed per-pixel value every resolved color becomes ([`Ink`])
//! - the surface contract the rasterizer and flood fill draw against
//!   ([`PixelSurface`])
//! - an owned in-memory implementation ([`PixelBuffer`])

mod buffer;
mod ink;
mod mode;
mod surface;

pub use buffer::PixelBuffer;
pub use ink::{Ink, mix, over};
pub use mode::Mode;
pub use surface::PixelSurface;
