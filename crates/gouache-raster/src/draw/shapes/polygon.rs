use crate::coords::{Point, Rect};
use crate::draw::Draw;
use crate::error::DrawError;
use crate::paint::Color;
use crate::raster::ClosedPath;

impl Draw<'_> {
    /// Draws a polygon. The vertex run is closed implicitly.
    pub fn polygon(
        &mut self,
        points: &[Point],
        fill: Option<&Color>,
        outline: Option<&Color>,
    ) -> Result<(), DrawError> {
        let (ink, fill) = self.resolve_inks(outline, fill)?;
        if let Some(fill) = fill {
            self.raster.polygon(&mut *self.surface, points, fill, true);
        }
        if let Some(ink) = ink {
            self.raster.polygon(&mut *self.surface, points, ink, false);
        }
        Ok(())
    }

    /// Draws a rectangle between two corner points.
    pub fn rectangle(
        &mut self,
        bounds: Rect,
        fill: Option<&Color>,
        outline: Option<&Color>,
    ) -> Result<(), DrawError> {
        let (ink, fill) = self.resolve_inks(outline, fill)?;
        if let Some(fill) = fill {
            self.raster.rectangle(&mut *self.surface, bounds, fill, true);
        }
        if let Some(ink) = ink {
            self.raster.rectangle(&mut *self.surface, bounds, ink, false);
        }
        Ok(())
    }

    /// Draws an arbitrary closed path. The path is finalized here, so a
    /// half-built outline can be handed over directly.
    pub fn shape(
        &mut self,
        path: &mut dyn ClosedPath,
        fill: Option<&Color>,
        outline: Option<&Color>,
    ) -> Result<(), DrawError> {
        path.close();
        let (ink, fill) = self.resolve_inks(outline, fill)?;
        if let Some(fill) = fill {
            self.raster.outline(&mut *self.surface, path, fill, true);
        }
        if let Some(ink) = ink {
            self.raster.outline(&mut *self.surface, path, ink, false);
        }
        Ok(())
    }
}
