use crate::coords::Point;
use crate::draw::Draw;
use crate::error::DrawError;
use crate::paint::Color;
use crate::text::layout::{self, AlignX, AlignY, BlockMetrics, Justify};
use crate::text::Font;

/// Placement parameters for [`Draw::text_anchored`].
///
/// `origin` is an offset from the computed anchor position; with both
/// alignments `Exact` it is the placement itself, so one call shape covers
/// "put it at this pixel" and "flush it to that edge".
#[derive(Debug, Clone)]
pub struct TextAnchor {
    pub origin: (i32, i32),
    pub align_x: AlignX,
    pub align_y: AlignY,
    pub justify: Justify,
    pub line_height: Option<i32>,
    pub line_height_percent: Option<u32>,
}

impl Default for TextAnchor {
    fn default() -> Self {
        Self {
            origin: (0, 0),
            align_x: AlignX::Exact,
            align_y: AlignY::Exact,
            justify: Justify::Left,
            line_height: None,
            line_height_percent: None,
        }
    }
}

impl Draw<'_> {
    /// Draws text with its top-left at `origin`. Text containing `\n` is
    /// routed through [`multiline_text`](Draw::multiline_text) with the
    /// default spacing and left alignment.
    pub fn text(
        &mut self,
        origin: Point,
        text: &str,
        color: Option<&Color>,
        font: Option<&dyn Font>,
    ) -> Result<(), DrawError> {
        if text.contains('\n') {
            return self.multiline_text(origin, text, color, font, 4, Justify::Left);
        }

        let (ink, fill) = self.resolve_inks(color, None)?;
        // The default ink may have landed in the fill slot; a visible call
        // should still draw.
        let Some(ink) = ink.or(fill) else {
            return Ok(());
        };

        let font = match font {
            Some(f) => f,
            None => self.font.as_deref().ok_or_else(no_font)?,
        };
        let rendered = font.render(text, self.font_mode);
        let (x, y) = origin.trunc();
        self.raster.stamp(
            &mut *self.surface,
            (x + rendered.offset.0, y + rendered.offset.1),
            &rendered.mask,
            ink,
        );
        Ok(())
    }

    /// Draws multi-line text at a fixed origin column, advancing downward
    /// by the height of a reference glyph plus `spacing` per line.
    /// `align` shifts each line against the widest one.
    pub fn multiline_text(
        &mut self,
        origin: Point,
        text: &str,
        color: Option<&Color>,
        font: Option<&dyn Font>,
        spacing: i32,
        align: Justify,
    ) -> Result<(), DrawError> {
        let line_spacing = self.text_size("A", font)?.1 + spacing;

        let lines: Vec<&str> = text.split('\n').collect();
        let mut widths = Vec::with_capacity(lines.len());
        let mut max_width = 0;
        for line in &lines {
            let (w, _) = self.text_size(line, font)?;
            widths.push(w);
            max_width = max_width.max(w);
        }

        let mut top = origin.y;
        for (i, line) in lines.iter().enumerate() {
            let left = match align {
                Justify::Left => origin.x,
                Justify::Center => origin.x + (max_width - widths[i]) as f32 / 2.0,
                Justify::Right => origin.x + (max_width - widths[i]) as f32,
            };
            self.text(Point::new(left, top), line, color, font)?;
            top += line_spacing as f32;
        }
        Ok(())
    }

    /// Size of `text` in pixels. Multi-line input measures as a block with
    /// the default spacing.
    pub fn text_size(&self, text: &str, font: Option<&dyn Font>) -> Result<(i32, i32), DrawError> {
        if text.contains('\n') {
            return self.multiline_text_size(text, font, 4);
        }
        let font = match font {
            Some(f) => f,
            None => self.font.as_deref().ok_or_else(no_font)?,
        };
        Ok(font.measure(text))
    }

    /// Size of multi-line text: widest line by lines × line spacing.
    pub fn multiline_text_size(
        &self,
        text: &str,
        font: Option<&dyn Font>,
        spacing: i32,
    ) -> Result<(i32, i32), DrawError> {
        let line_spacing = self.text_size("A", font)?.1 + spacing;
        let mut max_width = 0;
        let mut count = 0;
        for line in text.split('\n') {
            let (w, _) = self.text_size(line, font)?;
            max_width = max_width.max(w);
            count += 1;
        }
        Ok((max_width, count * line_spacing))
    }

    /// Block metrics of `text` for this context's font setup; see
    /// [`layout::block_metrics`].
    pub fn block_metrics(
        &self,
        text: &str,
        font: Option<&dyn Font>,
        line_height: Option<i32>,
        line_height_percent: Option<u32>,
    ) -> Result<BlockMetrics, DrawError> {
        let font = match font {
            Some(f) => f,
            None => self.font.as_deref().ok_or_else(no_font)?,
        };
        Ok(layout::block_metrics(text, font, line_height, line_height_percent))
    }

    /// Draws a text block anchored to the surface.
    ///
    /// The block is placed as close as possible to the anchored edges
    /// without truncation there, then offset by `anchor.origin`; each line
    /// is justified independently inside the block. Without a resolvable
    /// ink this is a silent no-op; there is deliberately no fill-slot
    /// fallback here.
    pub fn text_anchored(
        &mut self,
        text: &str,
        color: Option<&Color>,
        font: Option<&dyn Font>,
        anchor: &TextAnchor,
    ) -> Result<(), DrawError> {
        let (ink, _) = self.resolve_inks(color, None)?;
        let Some(ink) = ink else {
            return Ok(());
        };

        let font = match font {
            Some(f) => f,
            None => self.font.as_deref().ok_or_else(no_font)?,
        };
        let metrics = layout::block_metrics(
            text,
            font,
            anchor.line_height,
            anchor.line_height_percent,
        );

        let ox = layout::anchor_x(anchor.align_x, &metrics, self.surface.width()) + anchor.origin.0;
        let mut oy =
            layout::anchor_y(anchor.align_y, &metrics, self.surface.height()) + anchor.origin.1;

        let count = metrics.lines.len();
        for (i, line) in metrics.lines.iter().enumerate() {
            let lox =
                layout::justify_offset(anchor.justify, ox, &metrics, &line.bounds) + line.bounds.x_min;
            let loy = oy - line.bounds.y_max;
            let rendered = font.render(&line.text, self.font_mode);
            self.raster
                .stamp(&mut *self.surface, (lox, loy), &rendered.mask, ink);
            if i + 1 < count {
                oy += metrics.line_height.unwrap_or(0);
            }
        }
        Ok(())
    }
}

fn no_font() -> DrawError {
    DrawError::InvalidArgument("no font supplied and the context has no default".to_string())
}
