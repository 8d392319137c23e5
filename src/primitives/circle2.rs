//! 2D circle type.

use super::Point2;
use num_traits::Float;

/// A 2D circle defined by center and radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle2<F> {
    /// Center point of the circle
    pub center: Point2<F>,
    /// Radius of the circle (must be non-negative)
    pub radius: F,
}

impl<F: Float> Circle2<F> {
    /// Creates a new circle from center and radius.
    #[inline]
    pub fn new(center: Point2<F>, radius: F) -> Self {
        Self { center, radius }
    }

    /// Creates a circle from center coordinates and radius.
    #[inline]
    pub fn from_coords(cx: F, cy: F, radius: F) -> Self {
        Self {
            center: Point2::new(cx, cy),
            radius,
        }
    }

    /// Checks if a point is inside the circle (including boundary).
    #[inline]
    pub fn contains(&self, point: Point2<F>) -> bool {
        self.center.distance_squared(point) <= self.radius * self.radius
    }

    /// Returns the signed distance from a point to the circle boundary.
    ///
    /// Negative inside, positive outside.
    #[inline]
    pub fn signed_distance(&self, point: Point2<F>) -> F {
        self.center.distance(point) - self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains() {
        let circle: Circle2<f64> = Circle2::from_coords(0.0, 0.0, 1.0);
        assert!(circle.contains(Point2::new(0.5, 0.0)));
        assert!(circle.contains(Point2::new(1.0, 0.0)));
        assert!(!circle.contains(Point2::new(1.5, 0.0)));
    }

    #[test]
    fn test_signed_distance() {
        let circle: Circle2<f64> = Circle2::from_coords(0.0, 0.0, 2.0);
        assert_eq!(circle.signed_distance(Point2::new(0.0, 0.0)), -2.0);
        assert_eq!(circle.signed_distance(Point2::new(3.0, 0.0)), 1.0);
    }
}
