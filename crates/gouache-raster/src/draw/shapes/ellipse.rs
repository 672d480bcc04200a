use crate::coords::Rect;
use crate::draw::Draw;
use crate::error::DrawError;
use crate::paint::Color;

impl Draw<'_> {
    /// Draws an ellipse inscribed in `bounds`.
    pub fn ellipse(
        &mut self,
        bounds: Rect,
        fill: Option<&Color>,
        outline: Option<&Color>,
    ) -> Result<(), DrawError> {
        let (ink, fill) = self.resolve_inks(outline, fill)?;
        if let Some(fill) = fill {
            self.raster.ellipse(&mut *self.surface, bounds, fill, true);
        }
        if let Some(ink) = ink {
            self.raster.ellipse(&mut *self.surface, bounds, ink, false);
        }
        Ok(())
    }

    /// Draws an open arc between `start` and `end` degrees.
    pub fn arc(
        &mut self,
        bounds: Rect,
        start: f32,
        end: f32,
        color: Option<&Color>,
    ) -> Result<(), DrawError> {
        let (ink, _) = self.resolve_inks(color, None)?;
        if let Some(ink) = ink {
            self.raster.arc(&mut *self.surface, bounds, start, end, ink);
        }
        Ok(())
    }

    /// Draws a chord: the arc plus the straight line joining its ends.
    pub fn chord(
        &mut self,
        bounds: Rect,
        start: f32,
        end: f32,
        fill: Option<&Color>,
        outline: Option<&Color>,
    ) -> Result<(), DrawError> {
        let (ink, fill) = self.resolve_inks(outline, fill)?;
        if let Some(fill) = fill {
            self.raster
                .chord(&mut *self.surface, bounds, start, end, fill, true);
        }
        if let Some(ink) = ink {
            self.raster
                .chord(&mut *self.surface, bounds, start, end, ink, false);
        }
        Ok(())
    }

    /// Draws a pieslice: the arc plus straight lines to the center.
    pub fn pieslice(
        &mut self,
        bounds: Rect,
        start: f32,
        end: f32,
        fill: Option<&Color>,
        outline: Option<&Color>,
    ) -> Result<(), DrawError> {
        let (ink, fill) = self.resolve_inks(outline, fill)?;
        if let Some(fill) = fill {
            self.raster
                .pieslice(&mut *self.surface, bounds, start, end, fill, true);
        }
        if let Some(ink) = ink {
            self.raster
                .pieslice(&mut *self.surface, bounds, start, end, ink, false);
        }
        Ok(())
    }
}
