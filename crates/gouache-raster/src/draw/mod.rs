//! Drawing dispatcher.
//!
//! Responsibilities:
//! - bind a pixel surface, draw mode, and rasterizer into a [`Draw`]
//!   context
//! - normalize color arguments through the ink resolver
//! - dispatch fill-then-outline paint calls per primitive
//!
//! Extending the primitive set:
//! - add a method in a shape file under `draw::shapes`
//! - resolve inks through [`Draw::resolve_inks`]
//! - issue the fill paint call before the outline paint call, each only
//!   when its ink resolved

pub mod shapes;

pub use shapes::text::TextAnchor;

use crate::error::DrawError;
use crate::paint::{Color, resolve_color};
use crate::pixel::{Ink, Mode, PixelSurface};
use crate::raster::{Rasterizer, SoftRasterizer};
use crate::text::{Font, FontRenderMode};

/// Drawing context bound to one surface.
///
/// The context exclusively borrows its surface: concurrent drawing against
/// one surface is ruled out by the borrow rather than by locking. Defaults
/// (`ink`, `fill`, `font`) are plain fields, assigned directly for the
/// context's lifetime.
pub struct Draw<'a> {
    pub(crate) surface: &'a mut dyn PixelSurface,
    pub(crate) raster: Box<dyn Rasterizer>,
    mode: Mode,
    pub(crate) font_mode: FontRenderMode,
    /// Default ink used when a call supplies no color.
    pub ink: Ink,
    /// When set, the default ink lands in the fill slot instead of the
    /// outline slot.
    pub fill: bool,
    /// Default font for text calls that pass none.
    pub font: Option<Box<dyn Font>>,
}

impl std::fmt::Debug for Draw<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Draw")
            .field("mode", &self.mode)
            .field("font_mode", &self.font_mode)
            .field("ink", &self.ink)
            .field("fill", &self.fill)
            .field("font", &self.font.is_some())
            .finish_non_exhaustive()
    }
}

impl<'a> Draw<'a> {
    /// A context drawing in the surface's own mode.
    pub fn new(surface: &'a mut dyn PixelSurface) -> Self {
        let mode = surface.mode();
        Self::build(surface, mode, false)
    }

    /// A context drawing in `mode`, which must match the surface mode.
    /// The one exception is RGBA on an RGB surface, which enables
    /// alpha-blended drawing.
    pub fn with_mode(surface: &'a mut dyn PixelSurface, mode: Mode) -> Result<Self, DrawError> {
        let surface_mode = surface.mode();
        if mode == surface_mode {
            Ok(Self::build(surface, mode, false))
        } else if mode == Mode::Rgba && surface_mode == Mode::Rgb {
            Ok(Self::build(surface, mode, true))
        } else {
            Err(DrawError::InvalidMode(format!(
                "cannot draw in {mode:?} on a {surface_mode:?} surface"
            )))
        }
    }

    /// A context painting through a caller-supplied rasterizer, in the
    /// surface's own mode.
    pub fn with_rasterizer(
        surface: &'a mut dyn PixelSurface,
        raster: Box<dyn Rasterizer>,
    ) -> Self {
        let mode = surface.mode();
        Self {
            font_mode: font_mode_for(mode),
            ink: mode.default_ink(),
            fill: false,
            font: None,
            surface,
            raster,
            mode,
        }
    }

    fn build(surface: &'a mut dyn PixelSurface, mode: Mode, blend: bool) -> Self {
        let raster: Box<dyn Rasterizer> = if blend {
            Box::new(SoftRasterizer::blended())
        } else {
            Box::new(SoftRasterizer::new())
        };
        Self {
            font_mode: font_mode_for(mode),
            ink: mode.default_ink(),
            fill: false,
            font: None,
            surface,
            raster,
            mode,
        }
    }

    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[inline]
    pub fn surface(&self) -> &dyn PixelSurface {
        &*self.surface
    }

    /// Resolves an (outline, fill) color pair into inks.
    ///
    /// With both absent, the default ink fills exactly one slot: the fill
    /// slot when the context's `fill` flag is set, the outline slot
    /// otherwise. Present arguments resolve independently, each only into
    /// its own slot; there is no default-ink substitution for a slot whose
    /// argument was given.
    pub fn resolve_inks(
        &self,
        outline: Option<&Color>,
        fill: Option<&Color>,
    ) -> Result<(Option<Ink>, Option<Ink>), DrawError> {
        if outline.is_none() && fill.is_none() {
            return Ok(if self.fill {
                (None, Some(self.ink))
            } else {
                (Some(self.ink), None)
            });
        }
        let palette = self.surface.palette();
        let outline = match outline {
            Some(c) => Some(resolve_color(c, self.mode, palette)?),
            None => None,
        };
        let fill = match fill {
            Some(c) => Some(resolve_color(c, self.mode, palette)?),
            None => None,
        };
        Ok((outline, fill))
    }
}

#[inline]
fn font_mode_for(mode: Mode) -> FontRenderMode {
    if mode.requires_bilevel_text() {
        FontRenderMode::Bilevel
    } else {
        FontRenderMode::Antialiased
    }
}
