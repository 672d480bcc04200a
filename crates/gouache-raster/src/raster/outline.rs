use crate::coords::Point;

/// A closed contour built incrementally, finalized before painting.
///
/// The dispatcher's "shape" primitive is polymorphic over this trait so any
/// curve representation can be drawn, as long as it can close itself and
/// hand the rasterizer a flattened vertex run. `close` must be idempotent.
pub trait ClosedPath {
    /// Finalizes the contour (joins the last vertex back to the first).
    fn close(&mut self);

    /// Flattened vertices of the contour, in order.
    fn vertices(&self) -> &[Point];
}

/// Segments per cubic Bézier. Fixed subdivision keeps the flattening
/// deterministic; curves long enough to show faceting at this count are
/// outside the intended scale of the outline primitive.
const CURVE_STEPS: usize = 24;

/// Straight-line / Bézier path builder implementing [`ClosedPath`].
#[derive(Debug, Clone, Default)]
pub struct PathOutline {
    points: Vec<Point>,
    closed: bool,
}

impl PathOutline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts the contour. Only one contour per outline; calling this on a
    /// non-empty path restarts it.
    pub fn move_to(&mut self, p: Point) -> &mut Self {
        self.points.clear();
        self.closed = false;
        self.points.push(p);
        self
    }

    pub fn line_to(&mut self, p: Point) -> &mut Self {
        self.points.push(p);
        self
    }

    /// Cubic Bézier from the current point through control points `c1`,
    /// `c2` to `end`, flattened into line segments.
    pub fn curve_to(&mut self, c1: Point, c2: Point, end: Point) -> &mut Self {
        let start = match self.points.last() {
            Some(&p) => p,
            None => {
                self.points.push(end);
                return self;
            }
        };
        for i in 1..=CURVE_STEPS {
            let t = i as f32 / CURVE_STEPS as f32;
            let u = 1.0 - t;
            let p = start * (u * u * u)
                + c1 * (3.0 * u * u * t)
                + c2 * (3.0 * u * t * t)
                + end * (t * t * t);
            self.points.push(p);
        }
        self
    }
}

impl ClosedPath for PathOutline {
    fn close(&mut self) {
        if self.closed {
            return;
        }
        if let (Some(&first), Some(&last)) = (self.points.first(), self.points.last()) {
            if first != last {
                self.points.push(first);
            }
        }
        self.closed = true;
    }

    fn vertices(&self) -> &[Point] {
        &self.points
    }
}
