use crate::coords::Point;
use crate::draw::Draw;
use crate::error::DrawError;
use crate::paint::Color;

impl Draw<'_> {
    /// Draws a line, or a connected sequence of line segments, with the
    /// given stroke width. Width 0 is a hairline.
    pub fn line(
        &mut self,
        points: &[Point],
        color: Option<&Color>,
        width: u32,
    ) -> Result<(), DrawError> {
        let (ink, _) = self.resolve_inks(color, None)?;
        if let Some(ink) = ink {
            self.raster.lines(&mut *self.surface, points, ink, width);
        }
        Ok(())
    }

    /// Draws individual pixels.
    pub fn point(&mut self, points: &[Point], color: Option<&Color>) -> Result<(), DrawError> {
        let (ink, _) = self.resolve_inks(color, None)?;
        if let Some(ink) = ink {
            self.raster.points(&mut *self.surface, points, ink);
        }
        Ok(())
    }
}
