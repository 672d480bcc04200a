use bytemuck::{Pod, Zeroable};

use super::Mode;

/// A color value in a surface's native per-pixel encoding.
///
/// Invariant:
/// - every color reaching the rasterizer or the flood fill has already been
///   packed into one of these; nothing downstream of the resolver sees
///   names, tuples, or palette colors.
///
/// The four bytes hold the mode's channels: `[v, 0, 0, 0]` for the 8-bit
/// single-channel modes, `[r, g, b, a]` for RGB(A), and the little-endian
/// bit pattern of an `i32`/`f32` for the numeric modes. Byte equality is
/// value equality within one mode, which is what flood fill relies on.
#[repr(transparent)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Pod, Zeroable)]
pub struct Ink([u8; 4]);

impl Ink {
    #[inline]
    pub const fn raw(bytes: [u8; 4]) -> Self {
        Self(bytes)
    }

    #[inline]
    pub const fn gray(v: u8) -> Self {
        Self([v, 0, 0, 0])
    }

    /// Palette index, for indexed surfaces.
    #[inline]
    pub const fn index(i: u8) -> Self {
        Self([i, 0, 0, 0])
    }

    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b, 255])
    }

    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self([r, g, b, a])
    }

    #[inline]
    pub fn int(v: i32) -> Self {
        Self(v.to_le_bytes())
    }

    #[inline]
    pub fn float(v: f32) -> Self {
        Self(v.to_le_bytes())
    }

    #[inline]
    pub const fn bytes(self) -> [u8; 4] {
        self.0
    }

    /// First channel, meaningful for the 8-bit single-channel modes.
    #[inline]
    pub const fn value(self) -> u8 {
        self.0[0]
    }

    #[inline]
    pub fn as_int(self) -> i32 {
        i32::from_le_bytes(self.0)
    }

    #[inline]
    pub fn as_float(self) -> f32 {
        f32::from_le_bytes(self.0)
    }
}

#[inline]
fn lerp_u8(dst: u8, src: u8, cov: u8) -> u8 {
    let (d, s, c) = (dst as i32, src as i32, cov as i32);
    ((d * (255 - c) + s * c + 127) / 255) as u8
}

/// Moves `dst` toward `src` by `cov`/255.
///
/// Coverage blending for mask stamps: continuous modes interpolate per
/// channel, the discrete modes (bilevel, indexed) threshold at 128 since a
/// partial palette index is meaningless.
pub fn mix(mode: Mode, dst: Ink, src: Ink, cov: u8) -> Ink {
    match mode {
        Mode::Bilevel | Mode::Indexed => {
            if cov >= 128 { src } else { dst }
        }
        Mode::Gray => Ink::gray(lerp_u8(dst.value(), src.value(), cov)),
        Mode::Rgb => {
            let (d, s) = (dst.bytes(), src.bytes());
            Ink::rgb(
                lerp_u8(d[0], s[0], cov),
                lerp_u8(d[1], s[1], cov),
                lerp_u8(d[2], s[2], cov),
            )
        }
        Mode::Rgba => {
            let (d, s) = (dst.bytes(), src.bytes());
            Ink::rgba(
                lerp_u8(d[0], s[0], cov),
                lerp_u8(d[1], s[1], cov),
                lerp_u8(d[2], s[2], cov),
                lerp_u8(d[3], s[3], cov),
            )
        }
        Mode::GrayInt => {
            let t = cov as f64 / 255.0;
            let v = dst.as_int() as f64 + (src.as_int() - dst.as_int()) as f64 * t;
            Ink::int(v.round() as i32)
        }
        Mode::GrayFloat => {
            let t = cov as f32 / 255.0;
            Ink::float(dst.as_float() + (src.as_float() - dst.as_float()) * t)
        }
    }
}

/// Source-over composite of `src` onto `dst` using the source alpha byte.
///
/// Only defined for the RGB(A) modes; everything else replaces outright.
pub fn over(mode: Mode, dst: Ink, src: Ink) -> Ink {
    match mode {
        Mode::Rgb => mix(Mode::Rgb, dst, src, src.bytes()[3]),
        Mode::Rgba => {
            let (d, s) = (dst.bytes(), src.bytes());
            let (sa, da) = (s[3] as u32, d[3] as u32);
            let out_a = sa + da * (255 - sa) / 255;
            if out_a == 0 {
                return Ink::rgba(0, 0, 0, 0);
            }
            let ch = |sc: u8, dc: u8| -> u8 {
                let num = sc as u32 * sa + dc as u32 * da * (255 - sa) / 255;
                (num / out_a) as u8
            };
            Ink::rgba(ch(s[0], d[0]), ch(s[1], d[1]), ch(s[2], d[2]), out_a as u8)
        }
        _ => src,
    }
}
