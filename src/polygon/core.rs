//! Core polygon type and basic operations.

use crate::primitives::{Point2, Segment2};
use num_traits::Float;

/// A simple polygon represented as a sequence of vertices.
///
/// The polygon is implicitly closed (the last vertex connects to the first).
/// Winding may be either direction; [`Polygon::signed_area`] reports it and
/// [`Polygon::ensure_ccw`] / [`Polygon::ensure_cw`] normalize it.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon<F> {
    /// The vertices of the polygon.
    pub vertices: Vec<Point2<F>>,
}

impl<F: Float> Polygon<F> {
    /// Creates a new polygon from vertices.
    #[inline]
    pub fn new(vertices: Vec<Point2<F>>) -> Self {
        Self { vertices }
    }

    /// Creates an empty polygon.
    #[inline]
    pub fn empty() -> Self {
        Self {
            vertices: Vec::new(),
        }
    }

    /// Returns true if the polygon has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the boundary edge starting at vertex `i` (wrapping at the end).
    #[inline]
    pub fn edge(&self, i: usize) -> Segment2<F> {
        let n = self.vertices.len();
        Segment2::new(self.vertices[i % n], self.vertices[(i + 1) % n])
    }

    /// Returns the signed area of the polygon using the shoelace formula.
    ///
    /// Positive for CCW winding, negative for CW winding.
    pub fn signed_area(&self) -> F {
        polygon_signed_area(&self.vertices)
    }

    /// Returns the absolute area of the polygon.
    pub fn area(&self) -> F {
        self.signed_area().abs()
    }

    /// Returns the centroid (center of mass) of the polygon.
    ///
    /// Returns `None` for degenerate polygons (fewer than 3 vertices or
    /// near-zero area).
    pub fn centroid(&self) -> Option<Point2<F>> {
        if self.vertices.len() < 3 {
            return None;
        }

        let area = self.signed_area();
        if area.abs() < F::epsilon() {
            return None;
        }

        let mut cx = F::zero();
        let mut cy = F::zero();
        let n = self.vertices.len();

        for i in 0..n {
            let j = (i + 1) % n;
            let a = self.vertices[i];
            let b = self.vertices[j];
            let cross = a.x * b.y - b.x * a.y;
            cx = cx + (a.x + b.x) * cross;
            cy = cy + (a.y + b.y) * cross;
        }

        let six = F::from(6.0).unwrap();
        Some(Point2::new(cx / (six * area), cy / (six * area)))
    }

    /// Tests if a point is inside the polygon.
    pub fn contains(&self, point: Point2<F>) -> bool {
        polygon_contains(&self.vertices, point)
    }

    /// Tests if the polygon is convex.
    ///
    /// Returns true if all cross products of consecutive edges have the same
    /// sign. Degenerate polygons are considered convex.
    pub fn is_convex(&self) -> bool {
        if self.vertices.len() < 3 {
            return true;
        }

        let n = self.vertices.len();
        let mut sign: Option<bool> = None;

        for i in 0..n {
            let a = self.vertices[i];
            let b = self.vertices[(i + 1) % n];
            let c = self.vertices[(i + 2) % n];

            let cross = (b.x - a.x) * (c.y - b.y) - (b.y - a.y) * (c.x - b.x);

            if cross.abs() > F::epsilon() {
                let is_positive = cross > F::zero();
                match sign {
                    None => sign = Some(is_positive),
                    Some(s) if s != is_positive => return false,
                    _ => {}
                }
            }
        }

        true
    }

    /// Returns the bounding box as (min, max) points.
    pub fn bounding_box(&self) -> Option<(Point2<F>, Point2<F>)> {
        if self.vertices.is_empty() {
            return None;
        }

        let mut min = self.vertices[0];
        let mut max = self.vertices[0];

        for v in &self.vertices[1..] {
            min.x = min.x.min(v.x);
            min.y = min.y.min(v.y);
            max.x = max.x.max(v.x);
            max.y = max.y.max(v.y);
        }

        Some((min, max))
    }

    /// Ensures the polygon has CCW winding order.
    pub fn ensure_ccw(&mut self) {
        if self.signed_area() < F::zero() {
            self.vertices.reverse();
        }
    }

    /// Ensures the polygon has CW winding order.
    pub fn ensure_cw(&mut self) {
        if self.signed_area() > F::zero() {
            self.vertices.reverse();
        }
    }

    /// Returns a polygon with reversed winding order.
    pub fn reversed(&self) -> Self {
        let mut vertices = self.vertices.clone();
        vertices.reverse();
        Self { vertices }
    }

    /// Returns the perimeter of the polygon.
    pub fn perimeter(&self) -> F {
        if self.vertices.len() < 2 {
            return F::zero();
        }

        let n = self.vertices.len();
        let mut perimeter = F::zero();

        for i in 0..n {
            perimeter = perimeter + self.edge(i).length();
        }

        perimeter
    }

    /// Returns the average boundary edge length.
    ///
    /// Zero for polygons with fewer than 2 vertices.
    pub fn average_edge_length(&self) -> F {
        if self.vertices.len() < 2 {
            return F::zero();
        }
        self.perimeter() / F::from(self.vertices.len()).unwrap()
    }
}

/// Computes the signed area of a vertex loop using the shoelace formula.
///
/// Positive for CCW winding, negative for CW winding.
pub fn polygon_signed_area<F: Float>(vertices: &[Point2<F>]) -> F {
    if vertices.len() < 3 {
        return F::zero();
    }

    let n = vertices.len();
    let mut area = F::zero();

    for i in 0..n {
        let j = (i + 1) % n;
        area = area + vertices[i].x * vertices[j].y;
        area = area - vertices[j].x * vertices[i].y;
    }

    area / F::from(2.0).unwrap()
}

/// Tests if a point is inside a vertex loop using the ray casting algorithm.
///
/// Points on the boundary may return either true or false.
pub fn polygon_contains<F: Float>(vertices: &[Point2<F>], point: Point2<F>) -> bool {
    if vertices.len() < 3 {
        return false;
    }

    let n = vertices.len();
    let mut inside = false;

    let mut j = n - 1;
    for i in 0..n {
        let vi = vertices[i];
        let vj = vertices[j];

        if ((vi.y > point.y) != (vj.y > point.y))
            && (point.x < (vj.x - vi.x) * (point.y - vi.y) / (vj.y - vi.y) + vi.x)
        {
            inside = !inside;
        }
        j = i;
    }

    inside
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn square(size: f64) -> Polygon<f64> {
        Polygon::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(size, 0.0),
            Point2::new(size, size),
            Point2::new(0.0, size),
        ])
    }

    #[test]
    fn test_area_square() {
        assert_relative_eq!(square(2.0).area(), 4.0, epsilon = 1e-10);
    }

    #[test]
    fn test_signed_area_winding() {
        let ccw = square(1.0);
        assert!(ccw.signed_area() > 0.0);
        assert!(ccw.reversed().signed_area() < 0.0);
    }

    #[test]
    fn test_centroid() {
        let centroid = square(2.0).centroid().unwrap();
        assert_relative_eq!(centroid.x, 1.0, epsilon = 1e-10);
        assert_relative_eq!(centroid.y, 1.0, epsilon = 1e-10);
    }

    #[test]
    fn test_centroid_degenerate() {
        let line: Polygon<f64> = Polygon::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(2.0, 0.0),
        ]);
        assert!(line.centroid().is_none());
    }

    #[test]
    fn test_contains() {
        let sq = square(2.0);
        assert!(sq.contains(Point2::new(1.0, 1.0)));
        assert!(!sq.contains(Point2::new(3.0, 3.0)));
        assert!(!sq.contains(Point2::new(-1.0, 1.0)));
    }

    #[test]
    fn test_is_convex() {
        assert!(square(1.0).is_convex());

        let l_shape: Polygon<f64> = Polygon::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(2.0, 1.0),
            Point2::new(1.0, 1.0),
            Point2::new(1.0, 2.0),
            Point2::new(0.0, 2.0),
        ]);
        assert!(!l_shape.is_convex());
    }

    #[test]
    fn test_winding_normalization() {
        let mut poly = square(1.0).reversed();
        assert!(poly.signed_area() < 0.0);
        poly.ensure_ccw();
        assert!(poly.signed_area() > 0.0);
        poly.ensure_cw();
        assert!(poly.signed_area() < 0.0);
    }

    #[test]
    fn test_perimeter_and_average_edge() {
        let sq = square(1.0);
        assert_relative_eq!(sq.perimeter(), 4.0, epsilon = 1e-10);
        assert_relative_eq!(sq.average_edge_length(), 1.0, epsilon = 1e-10);
    }

    #[test]
    fn test_edge_wraps() {
        let sq = square(1.0);
        let last = sq.edge(3);
        assert_eq!(last.start, Point2::new(0.0, 1.0));
        assert_eq!(last.end, Point2::new(0.0, 0.0));
    }

    #[test]
    fn test_bounding_box() {
        let poly: Polygon<f64> = Polygon::new(vec![
            Point2::new(1.0, 2.0),
            Point2::new(3.0, 1.0),
            Point2::new(4.0, 3.0),
            Point2::new(2.0, 4.0),
        ]);
        let (min, max) = poly.bounding_box().unwrap();
        assert_eq!((min.x, min.y), (1.0, 1.0));
        assert_eq!((max.x, max.y), (4.0, 4.0));
    }
}
