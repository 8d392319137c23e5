//! 2D line segment type.

use super::{Circle2, Point2, Vec2};
use num_traits::Float;

/// A 2D line segment defined by two endpoints.
///
/// Generic over floating-point types (`f32` or `f64`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment2<F> {
    pub start: Point2<F>,
    pub end: Point2<F>,
}

impl<F: Float> Segment2<F> {
    /// Creates a new segment from two points.
    #[inline]
    pub fn new(start: Point2<F>, end: Point2<F>) -> Self {
        Self { start, end }
    }

    /// Creates a segment from coordinate pairs.
    #[inline]
    pub fn from_coords(x1: F, y1: F, x2: F, y2: F) -> Self {
        Self {
            start: Point2::new(x1, y1),
            end: Point2::new(x2, y2),
        }
    }

    /// Returns the direction vector from start to end.
    #[inline]
    pub fn direction(self) -> Vec2<F> {
        self.end - self.start
    }

    /// Returns the squared length of the segment.
    #[inline]
    pub fn length_squared(self) -> F {
        self.start.distance_squared(self.end)
    }

    /// Returns the length of the segment.
    #[inline]
    pub fn length(self) -> F {
        self.start.distance(self.end)
    }

    /// Returns the midpoint of the segment.
    #[inline]
    pub fn midpoint(self) -> Point2<F> {
        self.start.midpoint(self.end)
    }

    /// Returns the point at parameter `t` along the segment.
    ///
    /// - `t = 0` returns `start`
    /// - `t = 1` returns `end`
    #[inline]
    pub fn point_at(self, t: F) -> Point2<F> {
        self.start.lerp(self.end, t)
    }

    /// Computes the closest point on the segment to the given point.
    ///
    /// Returns a tuple of (closest_point, parameter_t) where t is in [0, 1].
    pub fn closest_point(self, p: Point2<F>) -> (Point2<F>, F) {
        let v = self.direction();
        let len_sq = v.magnitude_squared();

        // Degenerate segment (start == end)
        if len_sq <= F::epsilon() {
            return (self.start, F::zero());
        }

        let t = (p - self.start).dot(v) / len_sq;
        let t_clamped = t.max(F::zero()).min(F::one());

        (self.point_at(t_clamped), t_clamped)
    }

    /// Computes the distance from a point to this segment.
    #[inline]
    pub fn distance_to_point(self, p: Point2<F>) -> F {
        let (closest, _) = self.closest_point(p);
        p.distance(closest)
    }

    /// Returns `true` if the segment is degenerate (start equals end within epsilon).
    #[inline]
    pub fn is_degenerate(self, eps: F) -> bool {
        self.length_squared() <= eps * eps
    }

    /// Computes the proper intersection point with another segment.
    ///
    /// Returns `None` when the segments are parallel or the intersection
    /// falls outside either segment's extent.
    pub fn intersect_segment(self, other: Self) -> Option<Point2<F>> {
        let d1 = self.direction();
        let d2 = other.direction();

        let denom = d1.cross(d2);
        if denom.abs() < F::epsilon() {
            return None; // Parallel or collinear
        }

        let delta = other.start - self.start;
        let t = delta.cross(d2) / denom;
        let u = delta.cross(d1) / denom;

        if t < F::zero() || t > F::one() || u < F::zero() || u > F::one() {
            return None;
        }

        Some(self.point_at(t))
    }

    /// Computes the intersection points with a circle.
    ///
    /// Returns zero, one (tangent or clipped), or two points, ordered by
    /// parameter along the segment.
    pub fn intersect_circle(self, circle: &Circle2<F>) -> Vec<Point2<F>> {
        let d = self.direction();
        let oc = self.start - circle.center;

        let a = d.dot(d);
        if a < F::epsilon() {
            return Vec::new();
        }

        let two = F::from(2.0).unwrap();
        let b = two * oc.dot(d);
        let c = oc.dot(oc) - circle.radius * circle.radius;

        let discriminant = b * b - two * two * a * c;
        if discriminant < F::zero() {
            return Vec::new();
        }

        let sqrt_disc = discriminant.sqrt();
        let two_a = two * a;

        let mut hits = Vec::new();
        for t in [(-b - sqrt_disc) / two_a, (-b + sqrt_disc) / two_a] {
            if t >= F::zero() && t <= F::one() {
                hits.push(self.point_at(t));
            }
        }
        if hits.len() == 2 && discriminant < F::epsilon() {
            hits.pop(); // Tangent: both roots coincide
        }
        hits
    }
}

impl<F: Float> From<(Point2<F>, Point2<F>)> for Segment2<F> {
    fn from((start, end): (Point2<F>, Point2<F>)) -> Self {
        Self::new(start, end)
    }
}
