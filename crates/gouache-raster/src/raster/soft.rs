use crate::coords::{Point, Rect};
use crate::pixel::{Ink, PixelSurface, mix, over};

use super::{ClosedPath, Mask, Rasterizer};

/// Software scanline rasterizer.
///
/// Aliased on purpose: coverage-based edge smoothing is out of scope, so
/// every primitive resolves to whole pixels. Curves (ellipse, arc, chord,
/// pieslice) are flattened to polygons/polylines sampled at roughly one
/// vertex per pixel of arc length and then reuse the line and polygon
/// paths.
#[derive(Debug, Default)]
pub struct SoftRasterizer {
    blend: bool,
}

impl SoftRasterizer {
    pub fn new() -> Self {
        Self { blend: false }
    }

    /// A rasterizer that source-over composites using the ink's alpha
    /// channel, for RGBA drawing onto RGB(A) surfaces.
    pub fn blended() -> Self {
        Self { blend: true }
    }

    #[inline]
    fn put(&self, surface: &mut dyn PixelSurface, x: i32, y: i32, ink: Ink) {
        if self.blend {
            if let Some(dst) = surface.get(x, y) {
                surface.put(x, y, over(surface.mode(), dst, ink));
            }
        } else {
            surface.put(x, y, ink);
        }
    }

    fn hline(&self, surface: &mut dyn PixelSurface, y: i32, x0: i32, x1: i32, ink: Ink) {
        let (x0, x1) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
        for x in x0..=x1 {
            self.put(surface, x, y, ink);
        }
    }

    fn vline(&self, surface: &mut dyn PixelSurface, x: i32, y0: i32, y1: i32, ink: Ink) {
        let (y0, y1) = if y0 <= y1 { (y0, y1) } else { (y1, y0) };
        for y in y0..=y1 {
            self.put(surface, x, y, ink);
        }
    }

    /// One hairline segment, Bresenham with axis fast paths.
    fn segment(
        &self,
        surface: &mut dyn PixelSurface,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        ink: Ink,
    ) {
        if x0 == x1 {
            return self.vline(surface, x0, y0, y1, ink);
        }
        if y0 == y1 {
            return self.hline(surface, y0, x0, x1, ink);
        }

        let (mut x0, mut y0, x1, y1) = if x1 < x0 {
            (x1, y1, x0, y0)
        } else {
            (x0, y0, x1, y1)
        };

        let mut dx = x1 - x0;
        let (mut dy, yinc) = {
            let dy = y1 - y0;
            if dy < 0 { (-dy, -1) } else { (dy, 1) }
        };

        if dx >= dy {
            let mut eps = -dx;
            let e1 = 2 * dy;
            let e2 = 2 * dx;
            while dx >= 0 {
                self.put(surface, x0, y0, ink);
                x0 += 1;
                eps += e1;
                if eps >= 0 {
                    eps -= e2;
                    y0 += yinc;
                }
                dx -= 1;
            }
        } else {
            let mut eps = -dy;
            let e1 = 2 * dx;
            let e2 = 2 * dy;
            while dy >= 0 {
                self.put(surface, x0, y0, ink);
                y0 += yinc;
                eps += e1;
                if eps >= 0 {
                    eps -= e2;
                    x0 += 1;
                }
                dy -= 1;
            }
        }
    }

    fn stroke_polyline(
        &self,
        surface: &mut dyn PixelSurface,
        points: &[Point],
        ink: Ink,
        close: bool,
    ) {
        if points.len() < 2 {
            if let Some(p) = points.first() {
                let (x, y) = p.trunc();
                self.put(surface, x, y, ink);
            }
            return;
        }
        for pair in points.windows(2) {
            let (x0, y0) = pair[0].trunc();
            let (x1, y1) = pair[1].trunc();
            self.segment(surface, x0, y0, x1, y1, ink);
        }
        if close {
            let (x0, y0) = points[points.len() - 1].trunc();
            let (x1, y1) = points[0].trunc();
            self.segment(surface, x0, y0, x1, y1, ink);
        }
    }

    /// Even-odd scanline fill sampling at pixel centers.
    ///
    /// A pixel (x, y) is interior when the point (x + 0.5, y + 0.5) is
    /// inside the polygon, which keeps adjacent polygons sharing an edge
    /// from double-painting it.
    fn fill_polygon(&self, surface: &mut dyn PixelSurface, points: &[Point], ink: Ink) {
        if points.len() < 3 {
            log::debug!("fill_polygon: {} vertex(es), nothing to fill", points.len());
            return;
        }

        let mut min_y = f32::MAX;
        let mut max_y = f32::MIN;
        for p in points {
            min_y = min_y.min(p.y);
            max_y = max_y.max(p.y);
        }

        let y_start = min_y.floor() as i32;
        let y_end = max_y.ceil() as i32;
        let n = points.len();
        let mut crossings: Vec<f32> = Vec::new();

        for y in y_start..=y_end {
            let yf = y as f32 + 0.5;
            crossings.clear();

            for i in 0..n {
                let a = points[i];
                let b = points[(i + 1) % n];
                // Half-open crossing test so a vertex on the scanline is
                // counted exactly once.
                if (a.y <= yf && b.y > yf) || (b.y <= yf && a.y > yf) {
                    let t = (yf - a.y) / (b.y - a.y);
                    crossings.push(a.x + t * (b.x - a.x));
                }
            }

            crossings.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

            for span in crossings.chunks_exact(2) {
                let x0 = (span[0] - 0.5).ceil() as i32;
                let x1 = (span[1] - 0.5).floor() as i32;
                if x0 <= x1 {
                    self.hline(surface, y, x0, x1, ink);
                }
            }
        }
    }

    /// A segment with thickness, filled as a quad around its axis.
    fn thick_segment(&self, surface: &mut dyn PixelSurface, a: Point, b: Point, width: f32, ink: Ink) {
        let d = b - a;
        let len = (d.x * d.x + d.y * d.y).sqrt();
        if len == 0.0 {
            return;
        }
        let half = width / 2.0;
        let px = -d.y / len * half;
        let py = d.x / len * half;
        let quad = [
            Point::new(a.x + px, a.y + py),
            Point::new(b.x + px, b.y + py),
            Point::new(b.x - px, b.y - py),
            Point::new(a.x - px, a.y - py),
        ];
        self.fill_polygon(surface, &quad, ink);
    }
}

/// Flattens the elliptical arc inscribed in `bounds` from `start` to `end`
/// degrees into a vertex run.
fn arc_points(bounds: Rect, start: f32, end: f32) -> Vec<Point> {
    let b = bounds.normalized();
    let c = b.center();
    let rx = b.width() / 2.0;
    let ry = b.height() / 2.0;

    let mut end = end;
    while end < start {
        end += 360.0;
    }
    let sweep = end - start;

    // ~1 vertex per pixel of arc length, bounded both ways.
    let arc_len = rx.max(ry) * sweep.to_radians();
    let steps = (arc_len.abs().ceil() as usize).clamp(8, 1024);

    let mut points = Vec::with_capacity(steps + 1);
    for i in 0..=steps {
        let t = (start + sweep * i as f32 / steps as f32).to_radians();
        points.push(Point::new(c.x + rx * t.cos(), c.y + ry * t.sin()));
    }
    points
}

impl Rasterizer for SoftRasterizer {
    fn lines(&mut self, surface: &mut dyn PixelSurface, points: &[Point], ink: Ink, width: u32) {
        if width <= 1 {
            self.stroke_polyline(surface, points, ink, false);
            return;
        }
        for pair in points.windows(2) {
            self.thick_segment(surface, pair[0], pair[1], width as f32, ink);
        }
    }

    fn points(&mut self, surface: &mut dyn PixelSurface, points: &[Point], ink: Ink) {
        for p in points {
            let (x, y) = p.trunc();
            self.put(surface, x, y, ink);
        }
    }

    fn rectangle(&mut self, surface: &mut dyn PixelSurface, bounds: Rect, ink: Ink, fill: bool) {
        let b = bounds.normalized();
        let (x0, y0) = b.min.trunc();
        let (x1, y1) = b.max.trunc();
        if fill {
            for y in y0..=y1 {
                self.hline(surface, y, x0, x1, ink);
            }
        } else {
            self.hline(surface, y0, x0, x1, ink);
            self.hline(surface, y1, x0, x1, ink);
            self.vline(surface, x0, y0, y1, ink);
            self.vline(surface, x1, y0, y1, ink);
        }
    }

    fn polygon(&mut self, surface: &mut dyn PixelSurface, points: &[Point], ink: Ink, fill: bool) {
        if fill {
            self.fill_polygon(surface, points, ink);
        } else {
            self.stroke_polyline(surface, points, ink, true);
        }
    }

    fn ellipse(&mut self, surface: &mut dyn PixelSurface, bounds: Rect, ink: Ink, fill: bool) {
        let points = arc_points(bounds, 0.0, 360.0);
        if fill {
            self.fill_polygon(surface, &points, ink);
        } else {
            self.stroke_polyline(surface, &points, ink, true);
        }
    }

    fn arc(
        &mut self,
        surface: &mut dyn PixelSurface,
        bounds: Rect,
        start: f32,
        end: f32,
        ink: Ink,
    ) {
        let points = arc_points(bounds, start, end);
        self.stroke_polyline(surface, &points, ink, false);
    }

    fn chord(
        &mut self,
        surface: &mut dyn PixelSurface,
        bounds: Rect,
        start: f32,
        end: f32,
        ink: Ink,
        fill: bool,
    ) {
        let points = arc_points(bounds, start, end);
        if fill {
            self.fill_polygon(surface, &points, ink);
        } else {
            self.stroke_polyline(surface, &points, ink, true);
        }
    }

    fn pieslice(
        &mut self,
        surface: &mut dyn PixelSurface,
        bounds: Rect,
        start: f32,
        end: f32,
        ink: Ink,
        fill: bool,
    ) {
        let mut points = arc_points(bounds, start, end);
        points.push(bounds.normalized().center());
        if fill {
            self.fill_polygon(surface, &points, ink);
        } else {
            self.stroke_polyline(surface, &points, ink, true);
        }
    }

    fn outline(
        &mut self,
        surface: &mut dyn PixelSurface,
        path: &dyn ClosedPath,
        ink: Ink,
        fill: bool,
    ) {
        let points = path.vertices();
        if fill {
            self.fill_polygon(surface, points, ink);
        } else {
            self.stroke_polyline(surface, points, ink, true);
        }
    }

    fn stamp(&mut self, surface: &mut dyn PixelSurface, origin: (i32, i32), mask: &Mask, ink: Ink) {
        let mode = surface.mode();
        for j in 0..mask.height() {
            for i in 0..mask.width() {
                let cov = mask.coverage(i, j);
                if cov == 0 {
                    continue;
                }
                let x = origin.0 + i as i32;
                let y = origin.1 + j as i32;
                let Some(dst) = surface.get(x, y) else { continue };
                if self.blend {
                    // Scale the ink's alpha by coverage, then composite.
                    let b = ink.bytes();
                    let a = (b[3] as u32 * cov as u32 / 255) as u8;
                    surface.put(x, y, over(mode, dst, Ink::rgba(b[0], b[1], b[2], a)));
                } else {
                    surface.put(x, y, mix(mode, dst, ink, cov));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel::{Mode, PixelBuffer};

    fn gray_buffer() -> PixelBuffer {
        PixelBuffer::new(Mode::Gray, 16, 16)
    }

    fn lit(buf: &PixelBuffer) -> Vec<(i32, i32)> {
        let mut out = Vec::new();
        for y in 0..16 {
            for x in 0..16 {
                if buf.get(x, y) != Some(Ink::gray(0)) {
                    out.push((x, y));
                }
            }
        }
        out
    }

    // ── lines ─────────────────────────────────────────────────────────────

    #[test]
    fn horizontal_segment_is_inclusive() {
        let mut buf = gray_buffer();
        let mut r = SoftRasterizer::new();
        r.lines(
            &mut buf,
            &[Point::new(2.0, 3.0), Point::new(6.0, 3.0)],
            Ink::gray(255),
            0,
        );
        assert_eq!(lit(&buf), vec![(2, 3), (3, 3), (4, 3), (5, 3), (6, 3)]);
    }

    #[test]
    fn diagonal_hits_both_endpoints() {
        let mut buf = gray_buffer();
        let mut r = SoftRasterizer::new();
        r.lines(
            &mut buf,
            &[Point::new(1.0, 1.0), Point::new(5.0, 4.0)],
            Ink::gray(255),
            0,
        );
        let on = lit(&buf);
        assert!(on.contains(&(1, 1)));
        assert!(on.contains(&(5, 4)));
    }

    #[test]
    fn polyline_spans_every_segment() {
        let mut buf = gray_buffer();
        let mut r = SoftRasterizer::new();
        r.lines(
            &mut buf,
            &[
                Point::new(0.0, 0.0),
                Point::new(4.0, 0.0),
                Point::new(4.0, 4.0),
            ],
            Ink::gray(255),
            0,
        );
        let on = lit(&buf);
        assert!(on.contains(&(2, 0)));
        assert!(on.contains(&(4, 2)));
    }

    // ── rectangles ────────────────────────────────────────────────────────

    #[test]
    fn filled_rectangle_is_inclusive_of_both_corners() {
        let mut buf = gray_buffer();
        let mut r = SoftRasterizer::new();
        r.rectangle(&mut buf, Rect::new(1.0, 1.0, 4.0, 3.0), Ink::gray(255), true);
        assert_eq!(lit(&buf).len(), 4 * 3);
        assert!(lit(&buf).contains(&(1, 1)));
        assert!(lit(&buf).contains(&(4, 3)));
    }

    #[test]
    fn outlined_rectangle_leaves_interior_untouched() {
        let mut buf = gray_buffer();
        let mut r = SoftRasterizer::new();
        r.rectangle(&mut buf, Rect::new(1.0, 1.0, 5.0, 5.0), Ink::gray(255), false);
        assert_eq!(buf.get(3, 3), Some(Ink::gray(0)));
        assert_eq!(buf.get(1, 3), Some(Ink::gray(255)));
        assert_eq!(buf.get(5, 3), Some(Ink::gray(255)));
    }

    // ── polygons ──────────────────────────────────────────────────────────

    #[test]
    fn square_polygon_fills_pixel_centers() {
        let mut buf = gray_buffer();
        let mut r = SoftRasterizer::new();
        let square = [
            Point::new(2.0, 2.0),
            Point::new(6.0, 2.0),
            Point::new(6.0, 6.0),
            Point::new(2.0, 6.0),
        ];
        r.polygon(&mut buf, &square, Ink::gray(255), true);
        // Pixel-center rule: [2, 6) in both axes.
        assert_eq!(lit(&buf).len(), 16);
        assert!(lit(&buf).contains(&(2, 2)));
        assert!(lit(&buf).contains(&(5, 5)));
        assert!(!lit(&buf).contains(&(6, 6)));
    }

    #[test]
    fn degenerate_polygon_paints_nothing() {
        let mut buf = gray_buffer();
        let mut r = SoftRasterizer::new();
        r.polygon(
            &mut buf,
            &[Point::new(1.0, 1.0), Point::new(4.0, 4.0)],
            Ink::gray(255),
            true,
        );
        assert!(lit(&buf).is_empty());
    }

    // ── ellipse family ────────────────────────────────────────────────────

    #[test]
    fn filled_ellipse_covers_center_not_corners() {
        let mut buf = gray_buffer();
        let mut r = SoftRasterizer::new();
        r.ellipse(&mut buf, Rect::new(2.0, 2.0, 12.0, 12.0), Ink::gray(255), true);
        assert_eq!(buf.get(7, 7), Some(Ink::gray(255)));
        assert_eq!(buf.get(2, 2), Some(Ink::gray(0)));
        assert_eq!(buf.get(12, 12), Some(Ink::gray(0)));
    }

    #[test]
    fn pieslice_outline_touches_center() {
        let mut buf = gray_buffer();
        let mut r = SoftRasterizer::new();
        r.pieslice(
            &mut buf,
            Rect::new(0.0, 0.0, 14.0, 14.0),
            0.0,
            90.0,
            Ink::gray(255),
            false,
        );
        assert_eq!(buf.get(7, 7), Some(Ink::gray(255)));
    }

    // ── stamping ──────────────────────────────────────────────────────────

    #[test]
    fn stamp_interpolates_partial_coverage_on_gray() {
        let mut buf = gray_buffer();
        let mut r = SoftRasterizer::new();
        let mask = Mask::from_data(2, 1, vec![255, 128]);
        r.stamp(&mut buf, (0, 0), &mask, Ink::gray(200));
        assert_eq!(buf.get(0, 0), Some(Ink::gray(200)));
        let half = buf.get(1, 0).unwrap().value();
        assert!((99..=102).contains(&half), "got {half}");
    }

    #[test]
    fn stamp_clips_at_surface_edge() {
        let mut buf = gray_buffer();
        let mut r = SoftRasterizer::new();
        let mask = Mask::from_data(4, 4, vec![255; 16]);
        r.stamp(&mut buf, (14, 14), &mask, Ink::gray(255));
        assert_eq!(lit(&buf), vec![(14, 14), (15, 14), (14, 15), (15, 15)]);
    }
}
