use crate::paint::Palette;

use super::{Ink, Mode, PixelSurface};

/// Owned in-memory pixel surface.
///
/// Every pixel occupies one [`Ink`] slot regardless of mode, so a buffer can
/// be reinterpreted as raw bytes without per-mode stride logic.
#[derive(Debug, Clone)]
pub struct PixelBuffer {
    mode: Mode,
    width: u32,
    height: u32,
    data: Vec<Ink>,
    palette: Option<Palette>,
}

impl PixelBuffer {
    /// A buffer cleared to the zero ink (black / index 0 / 0.0).
    pub fn new(mode: Mode, width: u32, height: u32) -> Self {
        Self::filled(mode, width, height, Ink::raw([0; 4]))
    }

    /// A buffer cleared to `ink`.
    pub fn filled(mode: Mode, width: u32, height: u32, ink: Ink) -> Self {
        Self {
            mode,
            width,
            height,
            data: vec![ink; (width as usize) * (height as usize)],
            palette: None,
        }
    }

    /// An indexed buffer cleared to index 0, backed by `palette`.
    pub fn indexed(width: u32, height: u32, palette: Palette) -> Self {
        Self {
            mode: Mode::Indexed,
            width,
            height,
            data: vec![Ink::index(0); (width as usize) * (height as usize)],
            palette: Some(palette),
        }
    }

    /// Raw little-endian view of the pixel slots, 4 bytes per pixel,
    /// row-major.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.data)
    }

    #[inline]
    fn offset(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            None
        } else {
            Some(y as usize * self.width as usize + x as usize)
        }
    }
}

impl PixelSurface for PixelBuffer {
    fn mode(&self) -> Mode {
        self.mode
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn get(&self, x: i32, y: i32) -> Option<Ink> {
        self.offset(x, y).map(|i| self.data[i])
    }

    fn put(&mut self, x: i32, y: i32, ink: Ink) {
        if let Some(i) = self.offset(x, y) {
            self.data[i] = ink;
        }
    }

    fn palette(&self) -> Option<&Palette> {
        self.palette.as_ref()
    }
}
