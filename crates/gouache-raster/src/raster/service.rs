use crate::coords::{Point, Rect};
use crate::pixel::{Ink, PixelSurface};

use super::{ClosedPath, Mask};

/// Primitive-painting service consumed by the drawing dispatcher.
///
/// One paint call per primitive kind. Geometry arrives as supplied by the
/// caller (the dispatcher does not validate it) and colors arrive as
/// resolved inks only. `fill` selects between interior and outline
/// rendering for the closed shapes; the dispatcher issues separate calls
/// for each, fill first.
///
/// Angles for the arc family are in degrees, 0° at 3 o'clock, increasing
/// clockwise in screen space (+Y down). An end angle at or below the start
/// is swept through a full extra turn, so (0, 360) is a complete ellipse.
pub trait Rasterizer {
    /// Polyline through `points` with the given stroke width; 0 means
    /// hairline.
    fn lines(&mut self, surface: &mut dyn PixelSurface, points: &[Point], ink: Ink, width: u32);

    fn points(&mut self, surface: &mut dyn PixelSurface, points: &[Point], ink: Ink);

    fn rectangle(&mut self, surface: &mut dyn PixelSurface, bounds: Rect, ink: Ink, fill: bool);

    fn polygon(&mut self, surface: &mut dyn PixelSurface, points: &[Point], ink: Ink, fill: bool);

    fn ellipse(&mut self, surface: &mut dyn PixelSurface, bounds: Rect, ink: Ink, fill: bool);

    fn arc(
        &mut self,
        surface: &mut dyn PixelSurface,
        bounds: Rect,
        start: f32,
        end: f32,
        ink: Ink,
    );

    fn chord(
        &mut self,
        surface: &mut dyn PixelSurface,
        bounds: Rect,
        start: f32,
        end: f32,
        ink: Ink,
        fill: bool,
    );

    fn pieslice(
        &mut self,
        surface: &mut dyn PixelSurface,
        bounds: Rect,
        start: f32,
        end: f32,
        ink: Ink,
        fill: bool,
    );

    /// Paints a finalized closed path.
    fn outline(&mut self, surface: &mut dyn PixelSurface, path: &dyn ClosedPath, ink: Ink, fill: bool);

    /// Stamps a coverage mask with its top-left corner at `origin`.
    fn stamp(&mut self, surface: &mut dyn PixelSurface, origin: (i32, i32), mask: &Mask, ink: Ink);
}
