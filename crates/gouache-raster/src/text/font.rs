use crate::coords::BBox;
use crate::raster::Mask;

/// How glyph coverage is quantized when rendering.
///
/// Surfaces that cannot hold gray coverage (bilevel, indexed, and the
/// numeric modes) force `Bilevel`; everything else uses `Antialiased`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FontRenderMode {
    /// Coverage thresholded to 0 / 255.
    Bilevel,
    /// 8-bit gray coverage.
    Antialiased,
}

/// Result of rendering a string: a coverage mask plus the offset that
/// positions it relative to a pen origin at the top-left of the line box.
#[derive(Debug, Clone)]
pub struct RenderedMask {
    pub mask: Mask,
    pub offset: (i32, i32),
}

/// Glyph metrics and rendering provider.
///
/// All vertical quantities follow the baseline-relative, +Y-up convention
/// of [`BBox`]; the layout engine converts to surface coordinates.
///
/// Invariant:
/// - the mask returned by [`render`](Font::render) has exactly the
///   dimensions of [`bounding_box`](Font::bounding_box) for the same text,
///   so anchored placement can position it purely from box arithmetic.
pub trait Font {
    /// Advance width and nominal height of `text`, in pixels.
    fn measure(&self, text: &str) -> (i32, i32);

    /// Tight box around the ink of `text`, relative to the pen origin on
    /// the baseline.
    fn bounding_box(&self, text: &str) -> BBox;

    /// `(ascent, descent)`, both positive.
    fn metrics(&self) -> (i32, i32);

    /// Intrinsic baseline-to-baseline distance, when the face reports one.
    fn line_height(&self) -> Option<i32> {
        None
    }

    /// Renders `text` into a tight coverage mask.
    fn render(&self, text: &str, mode: FontRenderMode) -> RenderedMask;
}
