//! 2D axis-aligned rectangle type.

use super::{Point2, Segment2};
use num_traits::Float;

/// A 2D axis-aligned rectangle defined by its minimum and maximum corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect2<F> {
    /// Corner with the smallest coordinates
    pub min: Point2<F>,
    /// Corner with the largest coordinates
    pub max: Point2<F>,
}

impl<F: Float> Rect2<F> {
    /// Creates a rectangle from two corners, normalizing the ordering.
    #[inline]
    pub fn new(a: Point2<F>, b: Point2<F>) -> Self {
        Self {
            min: Point2::new(a.x.min(b.x), a.y.min(b.y)),
            max: Point2::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Creates a rectangle from coordinate extents.
    #[inline]
    pub fn from_coords(min_x: F, min_y: F, max_x: F, max_y: F) -> Self {
        Self::new(Point2::new(min_x, min_y), Point2::new(max_x, max_y))
    }

    /// Returns the width of the rectangle.
    #[inline]
    pub fn width(&self) -> F {
        self.max.x - self.min.x
    }

    /// Returns the height of the rectangle.
    #[inline]
    pub fn height(&self) -> F {
        self.max.y - self.min.y
    }

    /// Returns the center of the rectangle.
    #[inline]
    pub fn center(&self) -> Point2<F> {
        self.min.midpoint(self.max)
    }

    /// Returns the four corners in counter-clockwise order starting at `min`.
    pub fn corners(&self) -> [Point2<F>; 4] {
        [
            self.min,
            Point2::new(self.max.x, self.min.y),
            self.max,
            Point2::new(self.min.x, self.max.y),
        ]
    }

    /// Returns the four boundary edges in counter-clockwise order.
    pub fn edges(&self) -> [Segment2<F>; 4] {
        let c = self.corners();
        [
            Segment2::new(c[0], c[1]),
            Segment2::new(c[1], c[2]),
            Segment2::new(c[2], c[3]),
            Segment2::new(c[3], c[0]),
        ]
    }

    /// Checks if a point is inside the rectangle (including boundary).
    #[inline]
    pub fn contains(&self, point: Point2<F>) -> bool {
        point.x >= self.min.x && point.x <= self.max.x && point.y >= self.min.y && point.y <= self.max.y
    }
}
