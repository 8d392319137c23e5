//! 2D infinite line type.

use super::{Point2, Segment2, Vec2};
use num_traits::Float;

/// A 2D infinite line defined by a point and direction.
///
/// The line extends infinitely in both directions through the origin point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line2<F> {
    /// A point on the line
    pub origin: Point2<F>,
    /// Direction vector of the line (not necessarily normalized)
    pub direction: Vec2<F>,
}

impl<F: Float> Line2<F> {
    /// Creates a new line from a point and direction.
    #[inline]
    pub fn new(origin: Point2<F>, direction: Vec2<F>) -> Self {
        Self { origin, direction }
    }

    /// Creates a line passing through two points.
    #[inline]
    pub fn from_points(p1: Point2<F>, p2: Point2<F>) -> Self {
        Self {
            origin: p1,
            direction: p2 - p1,
        }
    }

    /// Creates a line from a segment (extending it infinitely).
    #[inline]
    pub fn from_segment(segment: &Segment2<F>) -> Self {
        Self {
            origin: segment.start,
            direction: segment.direction(),
        }
    }

    /// Returns the point on the line at parameter t.
    #[inline]
    pub fn point_at(&self, t: F) -> Point2<F> {
        Point2::new(
            self.origin.x + t * self.direction.x,
            self.origin.y + t * self.direction.y,
        )
    }

    /// Returns which side of the line a point is on.
    ///
    /// Positive on the counter-clockwise side of the direction vector,
    /// negative on the clockwise side, zero on the line. Scales with the
    /// direction magnitude, so only the sign is meaningful for half-plane
    /// tests.
    #[inline]
    pub fn side(&self, point: Point2<F>) -> F {
        self.direction.cross(point - self.origin)
    }

    /// Intersects this line with a segment.
    ///
    /// Returns the intersection point when the segment crosses the line
    /// within its extent; `None` when parallel or out of range.
    pub fn intersect_segment(&self, segment: &Segment2<F>) -> Option<Point2<F>> {
        let seg_dir = segment.direction();
        let denom = self.direction.cross(seg_dir);

        if denom.abs() < F::epsilon() {
            return None;
        }

        let delta = segment.start - self.origin;
        let t_line = delta.cross(seg_dir) / denom;
        let t_seg = delta.cross(self.direction) / denom;

        if t_seg >= F::zero() && t_seg <= F::one() {
            Some(self.point_at(t_line))
        } else {
            None
        }
    }
}
