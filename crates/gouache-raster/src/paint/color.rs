/// A color argument as supplied by a caller, before resolution.
///
/// The resolver normalizes any of these into the surface's native ink; see
/// [`resolve_color`](super::resolve_color) for the mode rules.
#[derive(Debug, Clone, PartialEq)]
pub enum Color {
    /// CSS-style color name (`"red"`) or hex string (`"#f00"`, `"#ff0000"`).
    Name(String),
    /// Single-channel value: gray level, palette index, or the raw value
    /// for the integer/float modes.
    Scalar(f64),
    Rgb(u8, u8, u8),
    Rgba(u8, u8, u8, u8),
}

impl Color {
    /// Convenience constructor for named colors.
    #[inline]
    pub fn name(name: impl Into<String>) -> Self {
        Color::Name(name.into())
    }
}

impl From<&str> for Color {
    fn from(name: &str) -> Self {
        Color::Name(name.to_string())
    }
}

impl From<f64> for Color {
    fn from(v: f64) -> Self {
        Color::Scalar(v)
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Color::Rgb(r, g, b)
    }
}

impl From<(u8, u8, u8, u8)> for Color {
    fn from((r, g, b, a): (u8, u8, u8, u8)) -> Self {
        Color::Rgba(r, g, b, a)
    }
}
