//! Medial-axis skeleton extraction for simple polygons.
//!
//! Three independent algorithms produce a [`Skeleton`] from a polygon
//! boundary:
//!
//! - [`SkeletonAlgorithm::Straight`] shrinks the boundary inward as a
//!   wavefront and records the traces of its vertices (the straight
//!   skeleton).
//! - [`SkeletonAlgorithm::Chordal`] triangulates the interior and connects
//!   midpoints of internal triangle edges (the chordal axis transform).
//! - [`SkeletonAlgorithm::Voronoi`] densifies the boundary, takes the
//!   Voronoi diagram of the samples, and prunes short branches.
//!
//! The resulting skeleton is a plain segment soup with interned node
//! positions; [`Skeleton`] layers graph queries (longest path, spine,
//! branches, shape intersections) on top by rebuilding topology on demand.

mod builder;
mod chordal;
mod graph;
mod straight;
mod voronoi;

pub use builder::SkeletonBuilder;

use crate::polygon::Polygon;
use crate::primitives::{Point2, Segment2};
use num_traits::Float;

/// Coordinate tolerance used when interning skeleton node positions.
///
/// Two points closer than this (per axis, after rounding to the tolerance
/// grid) are treated as the same node. This single weld also serves as the
/// chordal-axis midpoint match: adjacent triangles compute bit-identical
/// midpoints for a shared edge, so any positive tolerance joins them.
pub(crate) const NODE_TOLERANCE: f64 = 1e-7;

/// Selects which skeleton extraction algorithm [`skeletonize`] runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkeletonAlgorithm {
    /// Straight skeleton via inward wavefront propagation.
    Straight,
    /// Chordal axis transform over a constrained Delaunay triangulation.
    Chordal,
    /// Pruned Voronoi diagram of densified boundary samples.
    Voronoi,
}

/// A polygon skeleton: a set of node positions and the segments joining
/// them.
///
/// Edges store positions directly rather than node indices, so a skeleton
/// remains valid under any reordering of `nodes`. Endpoint positions of
/// every edge are guaranteed to appear in `nodes` exactly (the builder
/// interns them), which is what the graph queries rely on.
#[derive(Debug, Clone, PartialEq)]
pub struct Skeleton<F> {
    /// Distinct node positions.
    pub nodes: Vec<Point2<F>>,
    /// Skeleton edges; endpoints coincide with entries of `nodes`.
    pub edges: Vec<Segment2<F>>,
}

impl<F: Float> Skeleton<F> {
    /// Creates an empty skeleton.
    #[inline]
    pub fn empty() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Returns true if the skeleton has no edges.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Returns the total length of all skeleton edges.
    pub fn total_length(&self) -> F {
        self.edges
            .iter()
            .fold(F::zero(), |acc, e| acc + e.length())
    }

    /// Returns the skeleton edges as a segment list.
    #[inline]
    pub fn to_segments(&self) -> Vec<Segment2<F>> {
        self.edges.clone()
    }
}

/// Extracts the skeleton of a polygon with the chosen algorithm.
///
/// Polygons with fewer than three vertices yield an empty skeleton. Input
/// winding does not matter; each algorithm normalizes as needed.
pub fn skeletonize<F: Float>(polygon: &Polygon<F>, algorithm: SkeletonAlgorithm) -> Skeleton<F> {
    if polygon.len() < 3 {
        return Skeleton::empty();
    }

    match algorithm {
        SkeletonAlgorithm::Straight => straight::straight_skeleton(polygon),
        SkeletonAlgorithm::Chordal => chordal::chordal_axis(polygon),
        SkeletonAlgorithm::Voronoi => voronoi::voronoi_skeleton(polygon),
    }
}
