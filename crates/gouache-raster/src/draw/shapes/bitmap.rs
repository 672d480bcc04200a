use crate::coords::Point;
use crate::draw::Draw;
use crate::error::DrawError;
use crate::paint::Color;
use crate::raster::Mask;

impl Draw<'_> {
    /// Stamps a coverage mask with its top-left corner at `origin`.
    ///
    /// A mask is outline-ink work, but when only a fill color was supplied
    /// (or the context's fill flag routed the default there) that ink is
    /// used instead; a stamp should never be silently invisible.
    pub fn bitmap(
        &mut self,
        origin: Point,
        mask: &Mask,
        color: Option<&Color>,
    ) -> Result<(), DrawError> {
        let (ink, fill) = self.resolve_inks(color, None)?;
        if let Some(ink) = ink.or(fill) {
            self.raster.stamp(&mut *self.surface, origin.trunc(), mask, ink);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::testing::{Call, RecordingRasterizer};
    use crate::pixel::{Ink, Mode, PixelBuffer};

    #[test]
    fn stamp_falls_back_to_the_fill_slot() {
        let mut buf = PixelBuffer::new(Mode::Gray, 8, 8);
        let (raster, calls) = RecordingRasterizer::new();
        let mut ctx = Draw::with_rasterizer(&mut buf, raster);
        ctx.fill = true; // default ink now resolves into the fill slot

        let mask = Mask::new(2, 2);
        ctx.bitmap(Point::new(1.0, 2.0), &mask, None).unwrap();
        assert_eq!(
            *calls.borrow(),
            vec![Call::Stamp { ink: Ink::gray(255), origin: (1, 2), size: (2, 2) }]
        );
    }

    #[test]
    fn stamp_uses_outline_ink_when_present() {
        let mut buf = PixelBuffer::new(Mode::Gray, 8, 8);
        let (raster, calls) = RecordingRasterizer::new();
        let mut ctx = Draw::with_rasterizer(&mut buf, raster);

        let mask = Mask::new(1, 1);
        ctx.bitmap(Point::new(0.0, 0.0), &mask, Some(&Color::Scalar(7.0)))
            .unwrap();
        assert_eq!(
            *calls.borrow(),
            vec![Call::Stamp { ink: Ink::gray(7), origin: (0, 0), size: (1, 1) }]
        );
    }
}
