//! Text measurement, layout, and rendering support.
//!
//! Responsibilities:
//! - the font contract the layout engine consumes ([`Font`])
//! - a fontdue-backed provider ([`FontSystem`] / [`SizedFont`])
//! - multi-line block metrics and anchor-relative placement math
//!   ([`layout`])
//!
//! Actual pixel output goes through the rasterizer's mask stamping; this
//! module never touches a surface directly.

mod font;
mod font_system;
pub mod layout;

pub use font::{Font, FontRenderMode, RenderedMask};
pub use font_system::{FontId, FontLoadError, FontSystem, SizedFont};
pub use layout::{AlignX, AlignY, BlockMetrics, Justify, LineBox, block_metrics};
