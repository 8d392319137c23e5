//! Delaunay triangulation using the Bowyer-Watson algorithm.
//!
//! The triangulation is built incrementally: starting from a synthetic
//! super-triangle enclosing all input points, each point is inserted by
//! removing every triangle whose circumcircle contains it and fanning the
//! resulting cavity from the new point.
//!
//! Constraint edges are recovered afterwards by repeated edge flips
//! ([`Triangulation::enforce_constraint`]), which is what makes the result a
//! CDT usable for polygon interiors.
//!
//! # Example
//!
//! ```
//! use axium::triangulation::Triangulation;
//! use axium::Point2;
//!
//! let points: Vec<Point2<f64>> = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(1.0, 0.0),
//!     Point2::new(1.0, 1.0),
//!     Point2::new(0.0, 1.0),
//! ];
//!
//! let tri = Triangulation::create(&points);
//! assert_eq!(tri.interior_triangles().count(), 2);
//! ```

use crate::error::AxiumError;
use crate::polygon::Polygon;
use crate::primitives::{Point2, Segment2};
use num_traits::Float;
use std::collections::HashMap;

/// Number of synthetic super-triangle vertices stored at the front of the
/// point array (indices 0..3).
pub const SUPER_VERTICES: usize = 3;

/// Relative tolerance of the in-circumcircle determinant. Co-circular points
/// are biased toward "inside" so that degenerate configurations (regular
/// polygons, grids) still trigger re-triangulation.
const IN_CIRCLE_BIAS: f64 = 1e-10;

/// A triangle represented by indices into the triangulation's point array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Triangle {
    /// First vertex index
    pub a: usize,
    /// Second vertex index
    pub b: usize,
    /// Third vertex index
    pub c: usize,
}

impl Triangle {
    /// Creates a new triangle from vertex indices.
    #[inline]
    pub fn new(a: usize, b: usize, c: usize) -> Self {
        Self { a, b, c }
    }

    /// Returns the three edges of this triangle as pairs of indices.
    #[inline]
    pub fn edges(&self) -> [(usize, usize); 3] {
        [(self.a, self.b), (self.b, self.c), (self.c, self.a)]
    }

    /// Checks if the triangle contains a specific vertex index.
    #[inline]
    pub fn contains_vertex(&self, v: usize) -> bool {
        self.a == v || self.b == v || self.c == v
    }

    /// Checks if the triangle has the (unordered) edge `(p, q)`.
    #[inline]
    pub fn has_edge(&self, p: usize, q: usize) -> bool {
        self.contains_vertex(p) && self.contains_vertex(q) && p != q
    }

    /// Returns the vertex opposite the edge `(p, q)`.
    ///
    /// Assumes the triangle actually has that edge.
    #[inline]
    pub fn opposite_vertex(&self, p: usize, q: usize) -> usize {
        if self.a != p && self.a != q {
            self.a
        } else if self.b != p && self.b != q {
            self.b
        } else {
            self.c
        }
    }

    /// Checks if any vertex belongs to the synthetic super-triangle.
    #[inline]
    pub fn touches_super(&self) -> bool {
        self.a < SUPER_VERTICES || self.b < SUPER_VERTICES || self.c < SUPER_VERTICES
    }
}

/// Normalizes an edge so the smaller index comes first.
#[inline]
fn edge_key(p: usize, q: usize) -> (usize, usize) {
    if p < q {
        (p, q)
    } else {
        (q, p)
    }
}

/// Computes the orientation of three points.
/// Positive if CCW, negative if CW, zero if collinear.
fn orient2d<F: Float>(a: Point2<F>, b: Point2<F>, c: Point2<F>) -> F {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

/// Tests if two segments cross at a point interior to both.
fn segments_cross_properly<F: Float>(
    p1: Point2<F>,
    p2: Point2<F>,
    q1: Point2<F>,
    q2: Point2<F>,
) -> bool {
    let d1 = orient2d(p1, p2, q1);
    let d2 = orient2d(p1, p2, q2);
    let d3 = orient2d(q1, q2, p1);
    let d4 = orient2d(q1, q2, p2);

    (d1 > F::zero()) != (d2 > F::zero())
        && (d3 > F::zero()) != (d4 > F::zero())
        && d1 != F::zero()
        && d2 != F::zero()
        && d3 != F::zero()
        && d4 != F::zero()
}

/// An incremental Delaunay triangulation with constraint support.
///
/// The point array starts with the three super-triangle vertices (indices
/// `0..SUPER_VERTICES`); input points follow in their original order. Public
/// methods taking vertex indices use *input-space* indices and offset
/// internally.
#[derive(Debug, Clone)]
pub struct Triangulation<F> {
    points: Vec<Point2<F>>,
    triangles: Vec<Triangle>,
}

impl<F: Float> Triangulation<F> {
    /// Builds the Delaunay triangulation of a point set.
    ///
    /// Fewer than 3 points yield an empty triangulation (no triangles).
    pub fn create(input: &[Point2<F>]) -> Self {
        Self::try_create(input).unwrap_or_else(|_| Self {
            points: input.to_vec(),
            triangles: Vec::new(),
        })
    }

    /// Builds the triangulation, reporting degenerate input as an error.
    pub fn try_create(input: &[Point2<F>]) -> Result<Self, AxiumError> {
        if input.len() < 3 {
            return Err(AxiumError::DegenerateInput);
        }

        // Bounding box of the input
        let mut min_x = input[0].x;
        let mut max_x = input[0].x;
        let mut min_y = input[0].y;
        let mut max_y = input[0].y;
        for p in input.iter().skip(1) {
            min_x = min_x.min(p.x);
            max_x = max_x.max(p.x);
            min_y = min_y.min(p.y);
            max_y = max_y.max(p.y);
        }

        // Super-triangle with a 10x bounding-box margin, which keeps the
        // synthetic vertices far enough away that hull-adjacent circumcircles
        // stay well conditioned.
        let dx = max_x - min_x;
        let dy = max_y - min_y;
        let delta = dx.max(dy).max(F::one());
        let half = F::from(0.5).unwrap();
        let mid_x = (min_x + max_x) * half;
        let mid_y = (min_y + max_y) * half;
        let margin = F::from(10.0).unwrap();

        let mut points = Vec::with_capacity(input.len() + SUPER_VERTICES);
        points.push(Point2::new(mid_x - margin * delta, mid_y - delta));
        points.push(Point2::new(mid_x + margin * delta, mid_y - delta));
        points.push(Point2::new(mid_x, mid_y + margin * delta));
        points.extend_from_slice(input);

        let mut triangulation = Self {
            points,
            triangles: vec![Triangle::new(0, 1, 2)],
        };

        for i in SUPER_VERTICES..triangulation.points.len() {
            triangulation.insert(i);
        }

        Ok(triangulation)
    }

    /// Returns all triangles, including those still attached to the
    /// super-triangle vertices.
    #[inline]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Returns the triangles not touching the super-triangle vertices.
    pub fn interior_triangles(&self) -> impl Iterator<Item = &Triangle> {
        self.triangles.iter().filter(|t| !t.touches_super())
    }

    /// Returns the full point array (super-triangle vertices first).
    #[inline]
    pub fn points(&self) -> &[Point2<F>] {
        &self.points
    }

    /// Returns the position of a vertex by raw index.
    #[inline]
    pub fn position(&self, index: usize) -> Point2<F> {
        self.points[index]
    }

    /// Checks if the (unordered) edge between two input points is present.
    pub fn edge_exists(&self, a: usize, b: usize) -> bool {
        let (a, b) = (a + SUPER_VERTICES, b + SUPER_VERTICES);
        self.triangles.iter().any(|t| t.has_edge(a, b))
    }

    /// Forces the edge between two input points into the triangulation.
    ///
    /// Repeatedly flips whichever triangulation edge geometrically crosses
    /// the target edge. Bounded by `2 x triangle_count` flips; if the bound
    /// is reached the constraint is silently left unresolved, which callers
    /// must tolerate (the search has no termination proof on pathological
    /// input).
    pub fn enforce_constraint(&mut self, a: usize, b: usize) {
        let _ = self.try_enforce_constraint(a, b);
    }

    /// Like [`Triangulation::enforce_constraint`], but reports a ceiling hit.
    pub fn try_enforce_constraint(&mut self, a: usize, b: usize) -> Result<(), AxiumError> {
        let (ra, rb) = (a + SUPER_VERTICES, b + SUPER_VERTICES);
        if ra >= self.points.len() || rb >= self.points.len() || ra == rb {
            return Err(AxiumError::DegenerateInput);
        }

        let ceiling = 2 * self.triangles.len();
        let pa = self.points[ra];
        let pb = self.points[rb];

        for _ in 0..ceiling {
            if self.triangles.iter().any(|t| t.has_edge(ra, rb)) {
                return Ok(());
            }
            if !self.flip_one_crossing(ra, rb, pa, pb) {
                break;
            }
        }

        if self.triangles.iter().any(|t| t.has_edge(ra, rb)) {
            Ok(())
        } else {
            Err(AxiumError::ConstraintUnresolved { iterations: ceiling })
        }
    }

    /// Finds one triangulation edge properly crossing segment (pa, pb) and
    /// flips it. Returns false when no flippable crossing remains.
    fn flip_one_crossing(&mut self, ra: usize, rb: usize, pa: Point2<F>, pb: Point2<F>) -> bool {
        for ti in 0..self.triangles.len() {
            for (p, q) in self.triangles[ti].edges() {
                if p == ra || p == rb || q == ra || q == rb {
                    continue;
                }
                if !segments_cross_properly(self.points[p], self.points[q], pa, pb) {
                    continue;
                }
                if let Some(tj) = self.adjacent_to(ti, p, q) {
                    let r = self.triangles[ti].opposite_vertex(p, q);
                    let s = self.triangles[tj].opposite_vertex(p, q);
                    // Replace the crossing edge with the quad's other diagonal
                    self.triangles[ti] = Triangle::new(r, s, p);
                    self.triangles[tj] = Triangle::new(r, s, q);
                    return true;
                }
            }
        }
        false
    }

    /// Finds the triangle adjacent to `ti` across the raw edge `(p, q)`.
    ///
    /// Linear scan; instance counts are small enough that a cached adjacency
    /// structure is not worth maintaining through flips and removals.
    pub fn adjacent_to(&self, ti: usize, p: usize, q: usize) -> Option<usize> {
        self.triangles
            .iter()
            .enumerate()
            .find(|(tj, t)| *tj != ti && t.has_edge(p, q))
            .map(|(tj, _)| tj)
    }

    /// Removes every triangle whose centroid lies outside the boundary.
    ///
    /// Run after constraint enforcement to isolate the triangles strictly
    /// inside a polygon; super-triangle fans fall away as a side effect.
    pub fn remove_exterior(&mut self, boundary: &Polygon<F>) {
        let points = std::mem::take(&mut self.points);
        self.triangles
            .retain(|t| boundary.contains(triangle_centroid(&points, t)));
        self.points = points;
    }

    /// Returns the centroid of a triangle.
    #[inline]
    pub fn centroid(&self, tri: &Triangle) -> Point2<F> {
        triangle_centroid(&self.points, tri)
    }

    /// Returns the circumcenter of a triangle.
    ///
    /// Falls back to the centroid when the vertices are collinear within
    /// epsilon, so callers never have to handle a missing center.
    pub fn circumcenter(&self, tri: &Triangle) -> Point2<F> {
        let a = self.points[tri.a];
        let b = self.points[tri.b];
        let c = self.points[tri.c];

        let two = F::from(2.0).unwrap();
        let d = two * (a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y));

        if d.abs() < F::epsilon() {
            return triangle_centroid(&self.points, tri);
        }

        let aa = a.x * a.x + a.y * a.y;
        let bb = b.x * b.x + b.y * b.y;
        let cc = c.x * c.x + c.y * c.y;

        let ux = (aa * (b.y - c.y) + bb * (c.y - a.y) + cc * (a.y - b.y)) / d;
        let uy = (aa * (c.x - b.x) + bb * (a.x - c.x) + cc * (b.x - a.x)) / d;

        Point2::new(ux, uy)
    }

    /// Returns the Voronoi-dual edges of the triangulation.
    ///
    /// Every pair of (non-super) triangles sharing an edge contributes the
    /// segment between their circumcenters. Hull edges, with a single
    /// incident triangle, emit nothing.
    pub fn voronoi_edges(&self) -> Vec<Segment2<F>> {
        let mut incidence: HashMap<(usize, usize), Vec<usize>> = HashMap::new();

        for (ti, tri) in self.triangles.iter().enumerate() {
            if tri.touches_super() {
                continue;
            }
            for (p, q) in tri.edges() {
                incidence.entry(edge_key(p, q)).or_default().push(ti);
            }
        }

        let mut edges = Vec::new();
        for shared in incidence.values() {
            if let [ti, tj] = shared[..] {
                let c1 = self.circumcenter(&self.triangles[ti]);
                let c2 = self.circumcenter(&self.triangles[tj]);
                edges.push(Segment2::new(c1, c2));
            }
        }

        edges
    }

    /// Counts how many edges of `tri` are shared with another remaining
    /// triangle and are not part of the given boundary loop.
    pub fn internal_edges(&self, ti: usize, boundary_len: usize) -> Vec<(usize, usize)> {
        let tri = self.triangles[ti];
        let mut internal = Vec::new();

        for (p, q) in tri.edges() {
            if is_boundary_edge(p, q, boundary_len) {
                continue;
            }
            if self.adjacent_to(ti, p, q).is_some() {
                internal.push((p, q));
            }
        }

        internal
    }

    /// Bowyer-Watson insertion of the point at raw index `pi`.
    fn insert(&mut self, pi: usize) {
        let p = self.points[pi];

        // Triangles whose circumcircle contains the new point
        let mut bad: Vec<usize> = Vec::new();
        for (ti, tri) in self.triangles.iter().enumerate() {
            if self.in_circumcircle(tri, p) {
                bad.push(ti);
            }
        }

        // Cavity boundary: edges used by exactly one bad triangle
        let mut edge_count: HashMap<(usize, usize), (usize, (usize, usize))> = HashMap::new();
        for &ti in &bad {
            for (p1, q1) in self.triangles[ti].edges() {
                let entry = edge_count.entry(edge_key(p1, q1)).or_insert((0, (p1, q1)));
                entry.0 += 1;
            }
        }

        let boundary: Vec<(usize, usize)> = edge_count
            .values()
            .filter(|(count, _)| *count == 1)
            .map(|(_, edge)| *edge)
            .collect();

        // Remove bad triangles in reverse order to preserve indices
        bad.sort_unstable();
        for &ti in bad.iter().rev() {
            self.triangles.swap_remove(ti);
        }

        // Fan the cavity from the new point, keeping CCW orientation
        for (ea, eb) in boundary {
            let a = self.points[ea];
            let b = self.points[eb];
            if orient2d(a, b, p) > F::zero() {
                self.triangles.push(Triangle::new(ea, eb, pi));
            } else {
                self.triangles.push(Triangle::new(eb, ea, pi));
            }
        }
    }

    /// Tests if a point lies inside a triangle's circumcircle.
    ///
    /// Signed determinant of relative coordinates and squared distances. The
    /// sign convention follows the triangle's own winding so the test is
    /// orientation-independent, and the tolerance biases co-circular points
    /// toward "inside".
    fn in_circumcircle(&self, tri: &Triangle, p: Point2<F>) -> bool {
        let a = self.points[tri.a];
        let b = self.points[tri.b];
        let c = self.points[tri.c];

        let ax = a.x - p.x;
        let ay = a.y - p.y;
        let bx = b.x - p.x;
        let by = b.y - p.y;
        let cx = c.x - p.x;
        let cy = c.y - p.y;

        let aa = ax * ax + ay * ay;
        let bb = bx * bx + by * by;
        let cc = cx * cx + cy * cy;

        let det = ax * (by * cc - cy * bb) - ay * (bx * cc - cx * bb) + aa * (bx * cy - cx * by);

        let signed = if orient2d(a, b, c) < F::zero() { -det } else { det };

        let bias = F::from(IN_CIRCLE_BIAS).unwrap() * (aa + bb + cc);
        signed > -bias
    }
}

/// Checks if a raw edge corresponds to two consecutive boundary vertices.
fn is_boundary_edge(p: usize, q: usize, boundary_len: usize) -> bool {
    if p < SUPER_VERTICES || q < SUPER_VERTICES {
        return false;
    }
    let (i, j) = edge_key(p - SUPER_VERTICES, q - SUPER_VERTICES);
    if i >= boundary_len || j >= boundary_len {
        return false;
    }
    j == i + 1 || (i == 0 && j == boundary_len - 1)
}

fn triangle_centroid<F: Float>(points: &[Point2<F>], tri: &Triangle) -> Point2<F> {
    let three = F::from(3.0).unwrap();
    let a = points[tri.a];
    let b = points[tri.b];
    let c = points[tri.c];
    Point2::new((a.x + b.x + c.x) / three, (a.y + b.y + c.y) / three)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_square() -> Vec<Point2<f64>> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ]
    }

    /// Brute-force check of the empty-circumcircle property over the
    /// interior triangles.
    fn assert_delaunay(points: &[Point2<f64>], tri: &Triangulation<f64>) {
        for t in tri.interior_triangles() {
            for (i, p) in points.iter().enumerate() {
                let raw = i + SUPER_VERTICES;
                if t.contains_vertex(raw) {
                    continue;
                }
                assert!(
                    !strictly_in_circumcircle(
                        tri.position(t.a),
                        tri.position(t.b),
                        tri.position(t.c),
                        *p
                    ),
                    "point {i} lies inside circumcircle of ({}, {}, {})",
                    t.a,
                    t.b,
                    t.c
                );
            }
        }
    }

    /// Strict variant without the co-circular bias, for verification only.
    fn strictly_in_circumcircle(
        a: Point2<f64>,
        b: Point2<f64>,
        c: Point2<f64>,
        p: Point2<f64>,
    ) -> bool {
        let (ax, ay) = (a.x - p.x, a.y - p.y);
        let (bx, by) = (b.x - p.x, b.y - p.y);
        let (cx, cy) = (c.x - p.x, c.y - p.y);
        let (aa, bb, cc) = (ax * ax + ay * ay, bx * bx + by * by, cx * cx + cy * cy);
        let det = ax * (by * cc - cy * bb) - ay * (bx * cc - cx * bb) + aa * (bx * cy - cx * by);
        let orient = (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x);
        let signed = if orient < 0.0 { -det } else { det };
        signed > 1e-9 * (aa + bb + cc)
    }

    #[test]
    fn test_too_few_points() {
        let tri: Triangulation<f64> = Triangulation::create(&[Point2::new(0.0, 0.0)]);
        assert!(tri.triangles().is_empty());
        assert!(Triangulation::<f64>::try_create(&[]).is_err());
    }

    #[test]
    fn test_triangle_helpers() {
        let t = Triangle::new(3, 4, 5);
        assert!(t.has_edge(4, 3));
        assert!(!t.has_edge(3, 6));
        assert_eq!(t.opposite_vertex(3, 4), 5);
        assert_eq!(t.opposite_vertex(5, 3), 4);
        assert!(!t.touches_super());
        assert!(Triangle::new(0, 4, 5).touches_super());
    }

    #[test]
    fn test_three_points_single_triangle() {
        let points = vec![
            Point2::new(0.0_f64, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.5, 1.0),
        ];
        let tri = Triangulation::create(&points);
        assert_eq!(tri.interior_triangles().count(), 1);
    }

    #[test]
    fn test_square_two_triangles() {
        let tri = Triangulation::create(&unit_square());
        assert_eq!(tri.interior_triangles().count(), 2);
    }

    #[test]
    fn test_square_with_center() {
        let mut points = unit_square();
        points.push(Point2::new(0.5, 0.5));
        let tri = Triangulation::create(&points);
        assert_eq!(tri.interior_triangles().count(), 4);
        assert_delaunay(&points, &tri);
    }

    #[test]
    fn test_empty_circumcircle_property() {
        let points: Vec<Point2<f64>> = vec![
            Point2::new(0.1, 0.2),
            Point2::new(0.8, 0.1),
            Point2::new(0.9, 0.9),
            Point2::new(0.2, 0.85),
            Point2::new(0.5, 0.5),
            Point2::new(0.3, 0.3),
            Point2::new(0.7, 0.6),
            Point2::new(0.4, 0.8),
        ];
        let tri = Triangulation::create(&points);
        assert!(tri.interior_triangles().count() > 0);
        assert_delaunay(&points, &tri);
    }

    #[test]
    fn test_grid() {
        let mut points: Vec<Point2<f64>> = Vec::new();
        for i in 0..4 {
            for j in 0..4 {
                points.push(Point2::new(f64::from(i), f64::from(j)));
            }
        }
        let tri = Triangulation::create(&points);
        // 3x3 cells, two triangles each
        assert_eq!(tri.interior_triangles().count(), 18);
        assert_delaunay(&points, &tri);
    }

    #[test]
    fn test_collinear_points_no_interior_triangles() {
        let points = vec![
            Point2::new(0.0_f64, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(2.0, 0.0),
        ];
        let tri = Triangulation::create(&points);
        assert_eq!(tri.interior_triangles().count(), 0);
    }

    #[test]
    fn test_edge_exists_after_constraint() {
        // Square: the diagonal picked by Delaunay is one of the two; force
        // the other one in.
        let tri = Triangulation::create(&unit_square());
        let mut tri = tri;
        let (a, b) = if tri.edge_exists(0, 2) { (1, 3) } else { (0, 2) };
        assert!(!tri.edge_exists(a, b));
        tri.enforce_constraint(a, b);
        assert!(tri.edge_exists(a, b));
    }

    #[test]
    fn test_constraint_already_present() {
        let mut tri = Triangulation::create(&unit_square());
        // Boundary edges exist already; enforcing them must be a no-op
        for i in 0..4 {
            assert!(tri.try_enforce_constraint(i, (i + 1) % 4).is_ok());
        }
        assert_eq!(tri.interior_triangles().count(), 2);
    }

    #[test]
    fn test_constraint_invalid_indices() {
        let mut tri = Triangulation::create(&unit_square());
        assert_eq!(
            tri.try_enforce_constraint(1, 99),
            Err(AxiumError::DegenerateInput)
        );
    }

    #[test]
    fn test_remove_exterior() {
        let square = unit_square();
        let mut tri = Triangulation::create(&square);
        tri.remove_exterior(&Polygon::new(square));
        // Only the two interior triangles survive, super fans included gone
        assert_eq!(tri.triangles().len(), 2);
        assert!(tri.triangles().iter().all(|t| !t.touches_super()));
    }

    #[test]
    fn test_circumcenter_right_triangle() {
        let points = vec![
            Point2::new(0.0_f64, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 1.0),
        ];
        let tri = Triangulation::create(&points);
        let t = *tri.interior_triangles().next().unwrap();
        let center = tri.circumcenter(&t);
        // Circumcenter of a right triangle sits on the hypotenuse midpoint
        assert_relative_eq!(center.x, 0.5, epsilon = 1e-10);
        assert_relative_eq!(center.y, 0.5, epsilon = 1e-10);
    }

    #[test]
    fn test_circumcenter_collinear_falls_back_to_centroid() {
        let points = vec![
            Point2::new(0.0_f64, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.5, 1.0),
        ];
        let tri = Triangulation::create(&points);
        let degenerate = Triangle::new(3, 4, 4); // repeated vertex, zero area
        let center = tri.circumcenter(&degenerate);
        let centroid = tri.centroid(&degenerate);
        assert_relative_eq!(center.x, centroid.x, epsilon = 1e-12);
        assert_relative_eq!(center.y, centroid.y, epsilon = 1e-12);
    }

    #[test]
    fn test_voronoi_edges_square_with_center() {
        let mut points = unit_square();
        points.push(Point2::new(0.5, 0.5));
        let tri = Triangulation::create(&points);
        // Four interior triangles around the center share four edges
        assert_eq!(tri.voronoi_edges().len(), 4);
    }

    #[test]
    fn test_voronoi_edges_single_triangle_empty() {
        let points = vec![
            Point2::new(0.0_f64, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.5, 1.0),
        ];
        let tri = Triangulation::create(&points);
        // All edges are hull edges; nothing pairs up
        assert!(tri.voronoi_edges().is_empty());
    }

    #[test]
    fn test_adjacency_linear_scan() {
        let tri = Triangulation::create(&unit_square());
        let interior: Vec<usize> = tri
            .triangles()
            .iter()
            .enumerate()
            .filter(|(_, t)| !t.touches_super())
            .map(|(i, _)| i)
            .collect();
        assert_eq!(interior.len(), 2);

        // The two interior triangles are adjacent across the diagonal
        let t0 = tri.triangles()[interior[0]];
        let shared: Vec<(usize, usize)> = t0
            .edges()
            .iter()
            .copied()
            .filter(|&(p, q)| {
                tri.adjacent_to(interior[0], p, q)
                    .map(|tj| !tri.triangles()[tj].touches_super())
                    .unwrap_or(false)
            })
            .collect();
        assert_eq!(shared.len(), 1);
    }
}
