use crate::error::DrawError;
use crate::pixel::{Ink, Mode};

use super::{Color, Palette, parse_color};

/// Normalizes a caller-supplied color into `mode`'s native ink.
///
/// Rules, in order:
/// - a name is parsed through the CSS table / hex forms, then treated as an
///   RGBA tuple;
/// - tuples on an indexed mode translate to a palette index; on a
///   single-channel mode they collapse to gray via the ITU luminance
///   weights; otherwise their arity must fit the mode's channel count;
/// - scalars carry straight through on the single-channel modes and are
///   rejected on RGB(A).
pub fn resolve_color(
    color: &Color,
    mode: Mode,
    palette: Option<&Palette>,
) -> Result<Ink, DrawError> {
    match color {
        Color::Name(name) => {
            let (r, g, b, a) = parse_color(name).ok_or_else(|| {
                DrawError::InvalidColor(format!("unknown color name {name:?}"))
            })?;
            channels_to_ink(r, g, b, a, mode, palette)
        }
        Color::Scalar(v) => scalar_to_ink(*v, mode),
        Color::Rgb(r, g, b) => {
            if mode.channels() == 1 && !mode.is_indexed() {
                return Err(arity_error(3, mode));
            }
            channels_to_ink(*r, *g, *b, 255, mode, palette)
        }
        Color::Rgba(r, g, b, a) => {
            if mode != Mode::Rgba && !mode.is_indexed() {
                return Err(arity_error(4, mode));
            }
            channels_to_ink(*r, *g, *b, *a, mode, palette)
        }
    }
}

fn arity_error(given: usize, mode: Mode) -> DrawError {
    DrawError::InvalidMode(format!(
        "{given}-channel color for a mode with {} channel(s) ({mode:?})",
        mode.channels()
    ))
}

/// ITU-R 601 luminance, the conversion the gray modes apply to RGB input.
#[inline]
fn luminance(r: u8, g: u8, b: u8) -> u32 {
    (r as u32 * 299 + g as u32 * 587 + b as u32 * 114) / 1000
}

fn channels_to_ink(
    r: u8,
    g: u8,
    b: u8,
    a: u8,
    mode: Mode,
    palette: Option<&Palette>,
) -> Result<Ink, DrawError> {
    match mode {
        Mode::Rgb => Ok(Ink::rgba(r, g, b, a)),
        Mode::Rgba => Ok(Ink::rgba(r, g, b, a)),
        Mode::Indexed => {
            let palette = palette.ok_or_else(|| {
                DrawError::InvalidColor("indexed surface has no palette".to_string())
            })?;
            let index = palette.find(r, g, b).ok_or_else(|| {
                DrawError::InvalidColor("palette is empty".to_string())
            })?;
            Ok(Ink::index(index))
        }
        Mode::Bilevel => Ok(Ink::gray(if luminance(r, g, b) != 0 { 255 } else { 0 })),
        Mode::Gray => Ok(Ink::gray(luminance(r, g, b) as u8)),
        Mode::GrayInt => Ok(Ink::int(luminance(r, g, b) as i32)),
        Mode::GrayFloat => Ok(Ink::float(luminance(r, g, b) as f32)),
    }
}

fn scalar_to_ink(v: f64, mode: Mode) -> Result<Ink, DrawError> {
    match mode {
        Mode::Bilevel => Ok(Ink::gray(if v != 0.0 { 255 } else { 0 })),
        Mode::Gray => Ok(Ink::gray(v.clamp(0.0, 255.0) as u8)),
        Mode::Indexed => Ok(Ink::index(v.clamp(0.0, 255.0) as u8)),
        Mode::GrayInt => Ok(Ink::int(v as i32)),
        Mode::GrayFloat => Ok(Ink::float(v as f32)),
        Mode::Rgb | Mode::Rgba => Err(arity_error(1, mode)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── names ─────────────────────────────────────────────────────────────

    #[test]
    fn name_on_rgb() {
        let ink = resolve_color(&Color::name("red"), Mode::Rgb, None).unwrap();
        assert_eq!(ink, Ink::rgba(255, 0, 0, 255));
    }

    #[test]
    fn name_on_gray_uses_luminance() {
        let ink = resolve_color(&Color::name("white"), Mode::Gray, None).unwrap();
        assert_eq!(ink, Ink::gray(255));
        // 0.299 of full red
        let ink = resolve_color(&Color::name("red"), Mode::Gray, None).unwrap();
        assert_eq!(ink, Ink::gray(76));
    }

    #[test]
    fn unknown_name_is_invalid_color() {
        let err = resolve_color(&Color::name("vermilionish"), Mode::Rgb, None).unwrap_err();
        assert!(matches!(err, DrawError::InvalidColor(_)));
    }

    // ── tuples and arity ──────────────────────────────────────────────────

    #[test]
    fn tuple_arity_must_match_mode() {
        let err = resolve_color(&Color::Rgb(1, 2, 3), Mode::Gray, None).unwrap_err();
        assert!(matches!(err, DrawError::InvalidMode(_)));
        let err = resolve_color(&Color::Rgba(1, 2, 3, 4), Mode::Rgb, None).unwrap_err();
        assert!(matches!(err, DrawError::InvalidMode(_)));
    }

    #[test]
    fn rgb_tuple_on_rgba_gets_opaque_alpha() {
        let ink = resolve_color(&Color::Rgb(9, 8, 7), Mode::Rgba, None).unwrap();
        assert_eq!(ink, Ink::rgba(9, 8, 7, 255));
    }

    #[test]
    fn scalar_on_multichannel_is_invalid_mode() {
        let err = resolve_color(&Color::Scalar(7.0), Mode::Rgb, None).unwrap_err();
        assert!(matches!(err, DrawError::InvalidMode(_)));
    }

    // ── palette modes ─────────────────────────────────────────────────────

    #[test]
    fn tuple_translates_through_palette() {
        let p = Palette::new(vec![[0, 0, 0], [250, 5, 5]]);
        let ink = resolve_color(&Color::Rgb(255, 0, 0), Mode::Indexed, Some(&p)).unwrap();
        assert_eq!(ink, Ink::index(1));
    }

    #[test]
    fn scalar_is_a_direct_index() {
        let p = Palette::new(vec![[0, 0, 0], [1, 1, 1], [2, 2, 2]]);
        let ink = resolve_color(&Color::Scalar(2.0), Mode::Indexed, Some(&p)).unwrap();
        assert_eq!(ink, Ink::index(2));
    }

    #[test]
    fn indexed_without_palette_fails() {
        let err = resolve_color(&Color::name("red"), Mode::Indexed, None).unwrap_err();
        assert!(matches!(err, DrawError::InvalidColor(_)));
    }

    // ── numeric modes ─────────────────────────────────────────────────────

    #[test]
    fn numeric_modes_keep_scalar_values() {
        assert_eq!(
            resolve_color(&Color::Scalar(-3.0), Mode::GrayInt, None).unwrap(),
            Ink::int(-3)
        );
        assert_eq!(
            resolve_color(&Color::Scalar(0.5), Mode::GrayFloat, None).unwrap(),
            Ink::float(0.5)
        );
    }
}
