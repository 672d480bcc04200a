//! Color model and ink resolution.
//!
//! Scope:
//! - the heterogeneous color inputs callers hand to drawing calls
//!   ([`Color`]: names, scalars, channel tuples)
//! - the CSS-style name table and hex parsing behind string colors
//! - palette translation for indexed surfaces ([`Palette`])
//! - normalization of all of the above into a surface's native [`Ink`]
//!   ([`resolve_color`])
//!
//! Pixel encodings themselves live in `pixel`.

mod color;
mod named;
mod palette;
mod resolve;

pub use color::Color;
pub use named::parse_color;
pub use palette::Palette;
pub use resolve::resolve_color;
