//! Multi-line block metrics and anchor-relative placement math.
//!
//! Font metrics put the origin on the baseline: `x_min` is negative pixels
//! left of the origin, `x_max` positive to the right, `y_max` positive
//! above the baseline, `y_min` negative below it. A multi-line block keeps
//! that convention; the block's `y_min` grows very negative as lines
//! accumulate downward.

use std::str::FromStr;

use crate::coords::BBox;
use crate::error::DrawError;

use super::Font;

/// Horizontal block anchor.
///
/// `Exact` places the block at the caller's origin untouched; the edge
/// anchors flush the block's ink against a surface edge, with the origin
/// applied afterwards as an offset.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AlignX {
    Exact,
    Left,
    Center,
    Right,
}

/// Vertical block anchor.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AlignY {
    Exact,
    Top,
    Middle,
    Bottom,
}

/// Per-line justification inside a block.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Justify {
    Left,
    Center,
    Right,
}

impl FromStr for AlignX {
    type Err = DrawError;

    fn from_str(s: &str) -> Result<Self, DrawError> {
        match s {
            "exact" => Ok(AlignX::Exact),
            "left" => Ok(AlignX::Left),
            "center" => Ok(AlignX::Center),
            "right" => Ok(AlignX::Right),
            other => Err(DrawError::InvalidArgument(format!(
                "unknown alignX value {other:?}"
            ))),
        }
    }
}

impl FromStr for AlignY {
    type Err = DrawError;

    fn from_str(s: &str) -> Result<Self, DrawError> {
        match s {
            "exact" => Ok(AlignY::Exact),
            "top" => Ok(AlignY::Top),
            "middle" => Ok(AlignY::Middle),
            "bottom" => Ok(AlignY::Bottom),
            other => Err(DrawError::InvalidArgument(format!(
                "unknown alignY value {other:?}"
            ))),
        }
    }
}

impl FromStr for Justify {
    type Err = DrawError;

    fn from_str(s: &str) -> Result<Self, DrawError> {
        match s {
            "left" => Ok(Justify::Left),
            "center" => Ok(Justify::Center),
            "right" => Ok(Justify::Right),
            other => Err(DrawError::InvalidArgument(format!(
                "unknown justifyX value {other:?}"
            ))),
        }
    }
}

/// One line of a block: its text and tight bounding box.
#[derive(Debug, Clone, PartialEq)]
pub struct LineBox {
    pub text: String,
    pub bounds: BBox,
}

/// Aggregate metrics for a (possibly multi-line) text block.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockMetrics {
    /// Union of the lines' horizontal extents.
    pub x_min: i32,
    pub x_max: i32,
    /// The first line's `y_max`.
    pub y_max: i32,
    /// Accumulated by subtracting one line height per line after the
    /// first, then adding the **last** line's `y_min`. The descent of the
    /// block is anchored to the final line's true descent, not a running
    /// minimum. Deliberate, see `block_metrics`.
    pub y_min: i32,
    /// Widest line's `x_max - x_min`.
    pub max_line_width: i32,
    /// Resolved baseline-to-baseline distance. `None` for a single-line
    /// block with no explicit height (nothing ever advances).
    pub line_height: Option<i32>,
    pub lines: Vec<LineBox>,
}

/// Measures `text` as a block of `\n`-separated lines.
///
/// Line-height resolution, applied only when the block has more than one
/// line and no explicit `line_height`: the font's intrinsic line height
/// scaled by `line_height_percent` (default 100) / 100, truncated to an
/// integer; if the face has no intrinsic height, ascent + descent. A
/// line height smaller than ascent + descent will overlap lines.
pub fn block_metrics(
    text: &str,
    font: &dyn Font,
    line_height: Option<i32>,
    line_height_percent: Option<u32>,
) -> BlockMetrics {
    let lines: Vec<&str> = text.split('\n').collect();

    let mut resolved = line_height;
    if lines.len() > 1 && resolved.is_none() {
        let percent = line_height_percent.unwrap_or(100);
        let base = match font.line_height() {
            Some(h) => h,
            None => {
                let (ascent, descent) = font.metrics();
                ascent + descent
            }
        };
        resolved = Some((base as i64 * percent as i64 / 100) as i32);
    }

    let mut x_min = 0;
    let mut x_max = 0;
    let mut max_line_width = 0;
    let mut y_max: Option<i32> = None;
    let mut y_min: Option<i32> = None;
    let mut last_line_y_min = 0;
    let mut boxes = Vec::with_capacity(lines.len());

    for line in &lines {
        let bb = font.bounding_box(line);
        boxes.push(LineBox {
            text: (*line).to_string(),
            bounds: bb,
        });

        max_line_width = max_line_width.max(bb.width());
        x_max = x_max.max(bb.x_max);
        x_min = x_min.min(bb.x_min);

        if y_max.is_none() {
            // First line only.
            y_max = Some(bb.y_max);
        }
        y_min = Some(match y_min {
            // Skips the first line (unless it is also the last).
            None => 0,
            Some(v) => v - resolved.unwrap_or(0),
        });
        last_line_y_min = bb.y_min;
    }

    // The block's extent below the last baseline comes from the last line's
    // actual descent.
    let y_min = y_min.unwrap_or(0) + last_line_y_min;

    BlockMetrics {
        x_min,
        x_max,
        y_max: y_max.unwrap_or(0),
        y_min,
        max_line_width,
        line_height: resolved,
        lines: boxes,
    }
}

/// Python-style floor division halving, so negative extents anchor the
/// same way the reference layout does.
#[inline]
fn half(v: i32) -> i32 {
    v.div_euclid(2)
}

/// Horizontal anchor offset for a block on a surface `width` pixels wide.
pub fn anchor_x(align: AlignX, metrics: &BlockMetrics, width: u32) -> i32 {
    let width = width as i32;
    match align {
        AlignX::Exact => 0,
        AlignX::Left => -metrics.x_min,
        AlignX::Right => width - metrics.x_max,
        AlignX::Center => half(width) - half(metrics.x_max),
    }
}

/// Vertical anchor offset for a block on a surface `height` pixels tall.
///
/// The result is a **baseline** position for the first line.
pub fn anchor_y(align: AlignY, metrics: &BlockMetrics, height: u32) -> i32 {
    let height = height as i32;
    match align {
        AlignY::Exact => 0,
        AlignY::Top => metrics.y_max,
        AlignY::Bottom => height + metrics.y_min,
        AlignY::Middle => half(height) + half(metrics.y_max + metrics.y_min),
    }
}

/// Horizontal position of one line within an anchored block.
pub fn justify_offset(justify: Justify, ox: i32, metrics: &BlockMetrics, line: &BBox) -> i32 {
    match justify {
        Justify::Left => ox,
        Justify::Right => ox + metrics.x_max - line.x_max,
        Justify::Center => ox + half(metrics.x_max) - half(line.x_max),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::testing::MockFont;

    fn font() -> MockFont {
        MockFont::default()
    }

    // ── block metrics ─────────────────────────────────────────────────────

    #[test]
    fn single_line_degenerates_to_the_line_box() {
        let f = font();
        let m = block_metrics("abc", &f, None, None);
        let bb = f.bounding_box("abc");
        assert_eq!(m.y_max, bb.y_max);
        assert_eq!(m.y_min, bb.y_min);
        assert_eq!(m.x_min, bb.x_min);
        assert_eq!(m.x_max, bb.x_max);
        assert_eq!(m.max_line_width, bb.width());
        assert_eq!(m.line_height, None);
    }

    #[test]
    fn two_lines_accumulate_downward() {
        let f = font();
        let m = block_metrics("abc\nde", &f, None, None);
        // Intrinsic line height 12; y_min = 0 - 12 + last y_min (-2).
        assert_eq!(m.line_height, Some(12));
        assert_eq!(m.y_max, 7);
        assert_eq!(m.y_min, -14);
        // Widest line is "abc" at 18px.
        assert_eq!(m.max_line_width, 18);
        assert_eq!(m.x_max, 18);
        assert_eq!(m.lines.len(), 2);
    }

    #[test]
    fn explicit_line_height_wins() {
        let f = font();
        let m = block_metrics("a\nb\nc", &f, Some(20), Some(250));
        assert_eq!(m.line_height, Some(20));
        assert_eq!(m.y_min, -(2 * 20) + -2);
    }

    #[test]
    fn percent_scales_the_intrinsic_height() {
        let f = font();
        let m = block_metrics("a\nb", &f, None, Some(150));
        // 12 * 150 / 100 = 18.
        assert_eq!(m.line_height, Some(18));
    }

    #[test]
    fn metrics_sum_is_the_fallback_height() {
        let f = MockFont {
            intrinsic_line_height: None,
            ..MockFont::default()
        };
        let m = block_metrics("a\nb", &f, None, None);
        assert_eq!(m.line_height, Some(10)); // ascent 8 + descent 2
    }

    #[test]
    fn descent_tracks_the_last_line() {
        // Deliberate asymmetry: y_min comes from the last line alone, while
        // x extents are unions. Pinned here so nobody "fixes" it.
        let f = font();
        let m = block_metrics("abc\nd", &f, Some(10), None);
        assert_eq!(m.y_min, -10 + f.y_min);
        assert_eq!(m.x_max, 18); // union still sees the wider first line
    }

    // ── anchors ───────────────────────────────────────────────────────────

    #[test]
    fn exact_anchors_are_zero() {
        let f = font();
        let m = block_metrics("X", &f, None, None);
        assert_eq!(anchor_x(AlignX::Exact, &m, 100), 0);
        assert_eq!(anchor_y(AlignY::Exact, &m, 50), 0);
    }

    #[test]
    fn right_bottom_anchor_on_a_100_by_50_surface() {
        let f = font();
        let m = block_metrics("X", &f, None, None);
        assert_eq!(anchor_x(AlignX::Right, &m, 100), 100 - m.x_max);
        assert_eq!(anchor_y(AlignY::Bottom, &m, 50), 50 + m.y_min);
    }

    #[test]
    fn left_anchor_flushes_negative_ink() {
        let f = font();
        let mut m = block_metrics("X", &f, None, None);
        m.x_min = -3; // a glyph with left bearing past the origin
        assert_eq!(anchor_x(AlignX::Left, &m, 100), 3);
    }

    #[test]
    fn center_and_middle_use_floor_division() {
        let f = font();
        let mut m = block_metrics("X", &f, None, None);
        m.x_max = 7;
        assert_eq!(anchor_x(AlignX::Center, &m, 101), 50 - 3);
        m.y_max = 7;
        m.y_min = -4;
        assert_eq!(anchor_y(AlignY::Middle, &m, 51), 25 + 1);
    }

    // ── justification ─────────────────────────────────────────────────────

    #[test]
    fn equal_width_lines_justify_identically() {
        let f = font();
        let m = block_metrics("ab\ncd", &f, None, None);
        let line = m.lines[0].bounds;
        let left = justify_offset(Justify::Left, 10, &m, &line);
        let center = justify_offset(Justify::Center, 10, &m, &line);
        let right = justify_offset(Justify::Right, 10, &m, &line);
        assert_eq!(left, center);
        assert_eq!(center, right);
    }

    #[test]
    fn narrow_line_shifts_right_by_the_width_difference() {
        let f = font();
        let m = block_metrics("abcd\nab", &f, None, None);
        let narrow = m.lines[1].bounds;
        assert_eq!(
            justify_offset(Justify::Right, 0, &m, &narrow),
            m.x_max - narrow.x_max
        );
        assert_eq!(
            justify_offset(Justify::Center, 0, &m, &narrow),
            half(m.x_max) - half(narrow.x_max)
        );
    }

    // ── enum parsing ──────────────────────────────────────────────────────

    #[test]
    fn alignment_strings_round_trip() {
        assert_eq!("right".parse::<AlignX>().unwrap(), AlignX::Right);
        assert_eq!("middle".parse::<AlignY>().unwrap(), AlignY::Middle);
        assert_eq!("center".parse::<Justify>().unwrap(), Justify::Center);
    }

    #[test]
    fn unknown_alignment_is_invalid_argument() {
        let err = "diagonal".parse::<AlignX>().unwrap_err();
        assert!(matches!(err, DrawError::InvalidArgument(_)));
        assert!("diag".parse::<AlignY>().is_err());
        assert!("justified".parse::<Justify>().is_err());
    }
}
