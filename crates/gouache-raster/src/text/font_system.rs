use std::fmt;
use std::sync::Arc;

use crate::coords::BBox;
use crate::raster::Mask;

use super::{Font, FontRenderMode, RenderedMask};

/// Error returned by [`FontSystem::load_font`].
#[derive(Debug, Clone)]
pub struct FontLoadError(pub String);

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "font load error: {}", self.0)
    }
}

impl std::error::Error for FontLoadError {}

/// Opaque handle to a font loaded into a [`FontSystem`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct FontId(pub(crate) usize);

/// Owns a collection of parsed fonts.
///
/// Fonts are immutable after loading. Drawing code asks for a
/// [`SizedFont`] (a font fixed at a pixel size), which is the unit the
/// layout engine works with.
pub struct FontSystem {
    fonts: Vec<Arc<fontdue::Font>>,
}

impl FontSystem {
    pub fn new() -> Self {
        Self { fonts: Vec::new() }
    }

    /// Parses and stores a TrueType or OpenType font from raw bytes.
    pub fn load_font(&mut self, bytes: &[u8]) -> Result<FontId, FontLoadError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError(e.to_string()))?;
        let id = FontId(self.fonts.len());
        self.fonts.push(Arc::new(font));
        Ok(id)
    }

    /// Returns `id` fixed at `px` pixels, or `None` for an unknown handle.
    #[must_use]
    pub fn sized(&self, id: FontId, px: f32) -> Option<SizedFont> {
        let font = self.fonts.get(id.0)?;
        Some(SizedFont {
            font: Arc::clone(font),
            px: px.max(1.0),
        })
    }
}

impl Default for FontSystem {
    fn default() -> Self {
        Self::new()
    }
}

/// A font at a fixed pixel size, implementing the layout engine's [`Font`]
/// contract on top of fontdue's per-glyph metrics.
#[derive(Clone)]
pub struct SizedFont {
    font: Arc<fontdue::Font>,
    px: f32,
}

impl SizedFont {
    #[inline]
    pub fn size(&self) -> f32 {
        self.px
    }

    /// Walks `text` glyph by glyph, handing each (pen position, metrics)
    /// pair to `f`. Returns the final pen advance.
    fn walk(&self, text: &str, mut f: impl FnMut(f32, fontdue::Metrics, char)) -> f32 {
        let mut pen = 0.0f32;
        for ch in text.chars() {
            let m = self.font.metrics(ch, self.px);
            f(pen, m, ch);
            pen += m.advance_width;
        }
        pen
    }
}

impl Font for SizedFont {
    fn measure(&self, text: &str) -> (i32, i32) {
        let advance = self.walk(text, |_, _, _| {});
        let (ascent, descent) = self.metrics();
        (advance.ceil() as i32, ascent + descent)
    }

    fn bounding_box(&self, text: &str) -> BBox {
        let mut bb: Option<BBox> = None;
        self.walk(text, |pen, m, _| {
            if m.width == 0 || m.height == 0 {
                return;
            }
            let x0 = (pen + m.xmin as f32).floor() as i32;
            let x1 = (pen + m.xmin as f32 + m.width as f32).ceil() as i32;
            let y0 = m.ymin;
            let y1 = m.ymin + m.height as i32;
            bb = Some(match bb {
                None => BBox::new(x0, y0, x1, y1),
                Some(b) => BBox::new(
                    b.x_min.min(x0),
                    b.y_min.min(y0),
                    b.x_max.max(x1),
                    b.y_max.max(y1),
                ),
            });
        });
        bb.unwrap_or_default()
    }

    fn metrics(&self) -> (i32, i32) {
        match self.font.horizontal_line_metrics(self.px) {
            Some(lm) => (lm.ascent.round() as i32, (-lm.descent).round() as i32),
            None => {
                log::debug!("font reports no horizontal line metrics; approximating from size");
                let ascent = (self.px * 0.75).round() as i32;
                (ascent, (self.px.round() as i32 - ascent).max(0))
            }
        }
    }

    fn line_height(&self) -> Option<i32> {
        self.font
            .horizontal_line_metrics(self.px)
            .map(|lm| lm.new_line_size.round() as i32)
    }

    fn render(&self, text: &str, mode: FontRenderMode) -> RenderedMask {
        let bb = self.bounding_box(text);
        let mut mask = Mask::new(bb.width().max(0) as u32, bb.height().max(0) as u32);

        self.walk(text, |pen, m, ch| {
            if m.width == 0 || m.height == 0 {
                return;
            }
            let (_, bitmap) = self.font.rasterize(ch, self.px);
            let gx = (pen + m.xmin as f32).round() as i32 - bb.x_min;
            let gy = bb.y_max - (m.ymin + m.height as i32);
            for row in 0..m.height {
                for col in 0..m.width {
                    let mut v = bitmap[row * m.width + col];
                    if mode == FontRenderMode::Bilevel {
                        v = if v >= 128 { 255 } else { 0 };
                    }
                    if v > 0 {
                        mask.accumulate(gx + col as i32, gy + row as i32, v);
                    }
                }
            }
        });

        let (ascent, _) = self.metrics();
        RenderedMask {
            mask,
            offset: (bb.x_min, ascent - bb.y_max),
        }
    }
}
