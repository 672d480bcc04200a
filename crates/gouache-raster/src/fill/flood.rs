use crate::pixel::{Ink, PixelSurface};

/// Fills the connected region around `seed` with `value`.
///
/// Without `border`, the region is every 4-connected pixel matching the
/// seed's original color. With `border`, the region is every pixel that is
/// neither `value` nor `border`; growth stops at the border color instead
/// of at a color change.
///
/// Silent no-ops, by contract: a seed outside the surface, and a seed
/// already holding `value` (which also makes the fill idempotent). The
/// written value doubles as the visited marker, so the only bookkeeping is
/// the frontier itself; each in-region pixel joins the frontier at most
/// once. Running time is proportional to the filled area.
pub fn flood_fill(
    surface: &mut dyn PixelSurface,
    seed: (i32, i32),
    value: Ink,
    border: Option<Ink>,
) {
    let (x, y) = seed;
    let Some(background) = surface.get(x, y) else {
        return; // seed outside the surface
    };
    if background == value {
        return; // seed already has the fill color
    }
    surface.put(x, y, value);

    let mut edge = vec![(x, y)];
    // The frontier is replaced wholesale each round: every pixel written in
    // round N becomes a probe source in round N + 1 and nothing else does.
    while !edge.is_empty() {
        let mut newedge = Vec::new();
        for (x, y) in edge {
            for (s, t) in [(x + 1, y), (x - 1, y), (x, y + 1), (x, y - 1)] {
                let Some(p) = surface.get(s, t) else {
                    continue;
                };
                let expand = match border {
                    None => p == background,
                    Some(border) => p != value && p != border,
                };
                if expand {
                    surface.put(s, t, value);
                    newedge.push((s, t));
                }
            }
        }
        edge = newedge;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel::{Mode, PixelBuffer};

    fn count(buf: &PixelBuffer, ink: Ink) -> usize {
        let mut n = 0;
        for y in 0..buf.height() as i32 {
            for x in 0..buf.width() as i32 {
                if buf.get(x, y) == Some(ink) {
                    n += 1;
                }
            }
        }
        n
    }

    #[test]
    fn fill_is_idempotent_when_seed_matches_value() {
        let mut buf = PixelBuffer::filled(Mode::Gray, 4, 4, Ink::gray(9));
        let before = buf.clone();
        flood_fill(&mut buf, (1, 1), Ink::gray(9), None);
        assert_eq!(buf.as_bytes(), before.as_bytes());
    }

    #[test]
    fn out_of_bounds_seed_is_a_no_op() {
        let mut buf = PixelBuffer::new(Mode::Gray, 4, 4);
        flood_fill(&mut buf, (-1, 2), Ink::gray(9), None);
        flood_fill(&mut buf, (4, 0), Ink::gray(9), None);
        assert_eq!(count(&buf, Ink::gray(9)), 0);
    }

    #[test]
    fn fill_stays_inside_a_color_island() {
        // 3×3 block of C0 at (4..7, 4..7) surrounded by C1.
        let c0 = Ink::gray(10);
        let c1 = Ink::gray(20);
        let v = Ink::gray(200);
        let mut buf = PixelBuffer::filled(Mode::Gray, 12, 12, c1);
        for y in 4..7 {
            for x in 4..7 {
                buf.put(x, y, c0);
            }
        }

        flood_fill(&mut buf, (5, 5), v, None);
        assert_eq!(count(&buf, v), 9);
        assert_eq!(count(&buf, c0), 0);
        assert_eq!(count(&buf, c1), 12 * 12 - 9);
    }

    #[test]
    fn fill_does_not_leak_through_diagonal_gaps() {
        // Two C0 cells touching only at a corner: 4-connectivity must not
        // jump across.
        let c0 = Ink::gray(1);
        let c1 = Ink::gray(2);
        let v = Ink::gray(3);
        let mut buf = PixelBuffer::filled(Mode::Gray, 4, 4, c1);
        buf.put(0, 0, c0);
        buf.put(1, 1, c0);

        flood_fill(&mut buf, (0, 0), v, None);
        assert_eq!(buf.get(0, 0), Some(v));
        assert_eq!(buf.get(1, 1), Some(c0));
    }

    #[test]
    fn border_mode_stops_at_the_ring() {
        // 6×6 surface, outer ring Cb, interior 4×4 of mixed colors: border
        // mode fills the 16 interior pixels and leaves the ring alone.
        let cb = Ink::gray(100);
        let v = Ink::gray(200);
        let mut buf = PixelBuffer::filled(Mode::Gray, 6, 6, cb);
        for y in 1..5 {
            for x in 1..5 {
                // Mixed interior colors: border mode ignores color changes.
                buf.put(x, y, Ink::gray(((x + y) % 3) as u8));
            }
        }

        flood_fill(&mut buf, (2, 2), v, Some(cb));
        assert_eq!(count(&buf, v), 16);
        assert_eq!(count(&buf, cb), 36 - 16);
    }

    #[test]
    fn no_border_fill_floods_an_open_surface() {
        let mut buf = PixelBuffer::new(Mode::Gray, 5, 5);
        flood_fill(&mut buf, (2, 2), Ink::gray(7), None);
        assert_eq!(count(&buf, Ink::gray(7)), 25);
    }

    #[test]
    fn border_mode_overwrites_unlike_colors_but_not_itself() {
        let cb = Ink::gray(50);
        let v = Ink::gray(60);
        let mut buf = PixelBuffer::new(Mode::Gray, 3, 1);
        buf.put(2, 0, cb);

        flood_fill(&mut buf, (0, 0), v, Some(cb));
        assert_eq!(buf.get(0, 0), Some(v));
        assert_eq!(buf.get(1, 0), Some(v));
        assert_eq!(buf.get(2, 0), Some(cb));
    }

    #[test]
    fn works_on_rgb_surfaces() {
        let bg = Ink::rgb(0, 0, 0);
        let v = Ink::rgb(255, 0, 0);
        let mut buf = PixelBuffer::filled(Mode::Rgb, 4, 4, bg);
        flood_fill(&mut buf, (0, 0), v, None);
        assert_eq!(count(&buf, v), 16);
    }
}
