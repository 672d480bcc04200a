use super::Ink;

/// Channel layout / bit-depth family of a pixel surface.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Mode {
    /// One bit per pixel, stored as 0 or 255.
    Bilevel,
    /// Single-channel 8-bit gray.
    Gray,
    /// 8-bit index into a palette.
    Indexed,
    /// Three 8-bit channels.
    Rgb,
    /// Four 8-bit channels.
    Rgba,
    /// Single-channel signed 32-bit integer.
    GrayInt,
    /// Single-channel 32-bit float.
    GrayFloat,
}

impl Mode {
    /// Number of color channels a tuple for this mode must carry.
    #[inline]
    pub fn channels(self) -> usize {
        match self {
            Mode::Rgb => 3,
            Mode::Rgba => 4,
            _ => 1,
        }
    }

    #[inline]
    pub fn is_indexed(self) -> bool {
        matches!(self, Mode::Indexed)
    }

    /// Whether text on this mode must be rendered without antialiasing.
    ///
    /// Gray coverage cannot be expressed in a bilevel or indexed pixel, and
    /// the integer/float modes have no matte support.
    #[inline]
    pub fn requires_bilevel_text(self) -> bool {
        matches!(
            self,
            Mode::Bilevel | Mode::Indexed | Mode::GrayInt | Mode::GrayFloat
        )
    }

    /// The ink a fresh drawing context starts with: 1 for the numeric
    /// modes, channel maximum (white) for everything else.
    pub fn default_ink(self) -> Ink {
        match self {
            Mode::GrayInt => Ink::int(1),
            Mode::GrayFloat => Ink::float(1.0),
            Mode::Bilevel | Mode::Gray | Mode::Indexed => Ink::gray(255),
            Mode::Rgb => Ink::rgb(255, 255, 255),
            Mode::Rgba => Ink::rgba(255, 255, 255, 255),
        }
    }
}
