//! Connected-region flood fill.

mod flood;

pub use flood::flood_fill;
