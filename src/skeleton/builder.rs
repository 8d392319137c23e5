//! Incremental skeleton assembly with node interning.

use super::{Skeleton, NODE_TOLERANCE};
use crate::primitives::{Point2, Segment2};
use num_traits::Float;
use std::collections::HashMap;

/// Accumulates skeleton edges, merging nearly coincident endpoints into
/// shared nodes.
///
/// Positions are interned on a tolerance grid: coordinates are divided by
/// the tolerance, rounded, and used as an integer key. Everything mapping to
/// the same key reuses the first position seen, so edge endpoints compare
/// exactly equal to their node.
#[derive(Debug)]
pub struct SkeletonBuilder<F> {
    nodes: Vec<Point2<F>>,
    index: HashMap<(i64, i64), usize>,
    edges: Vec<(usize, usize)>,
    edge_set: HashMap<(usize, usize), ()>,
}

impl<F: Float> SkeletonBuilder<F> {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            index: HashMap::new(),
            edges: Vec::new(),
            edge_set: HashMap::new(),
        }
    }

    /// Interns a position, returning its node index.
    pub fn intern(&mut self, p: Point2<F>) -> usize {
        let key = grid_key(p);
        if let Some(&i) = self.index.get(&key) {
            return i;
        }
        let i = self.nodes.len();
        self.nodes.push(p);
        self.index.insert(key, i);
        i
    }

    /// Adds an edge between two positions.
    ///
    /// Edges that collapse to a single node after interning are dropped, as
    /// are duplicates of an edge already added (in either direction).
    pub fn add_edge(&mut self, a: Point2<F>, b: Point2<F>) {
        let ia = self.intern(a);
        let ib = self.intern(b);
        if ia == ib {
            return;
        }
        let key = if ia < ib { (ia, ib) } else { (ib, ia) };
        if self.edge_set.insert(key, ()).is_none() {
            self.edges.push((ia, ib));
        }
    }

    /// Returns the number of distinct nodes so far.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Finalizes the skeleton.
    ///
    /// Edge endpoints are the interned node positions, so every endpoint is
    /// bit-identical to an entry of `nodes`.
    pub fn build(self) -> Skeleton<F> {
        let edges = self
            .edges
            .iter()
            .map(|&(ia, ib)| Segment2::new(self.nodes[ia], self.nodes[ib]))
            .collect();
        Skeleton {
            nodes: self.nodes,
            edges,
        }
    }
}

impl<F: Float> Default for SkeletonBuilder<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Maps a position onto the interning grid.
pub(crate) fn grid_key<F: Float>(p: Point2<F>) -> (i64, i64) {
    let tol = F::from(NODE_TOLERANCE).unwrap();
    (
        (p.x / tol).round().to_i64().unwrap_or(0),
        (p.y / tol).round().to_i64().unwrap_or(0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interning_merges_close_points() {
        let mut builder: SkeletonBuilder<f64> = SkeletonBuilder::new();
        let a = builder.intern(Point2::new(1.0, 2.0));
        let b = builder.intern(Point2::new(1.0 + 1e-9, 2.0 - 1e-9));
        assert_eq!(a, b);
        assert_eq!(builder.node_count(), 1);
    }

    #[test]
    fn test_distinct_points_stay_distinct() {
        let mut builder: SkeletonBuilder<f64> = SkeletonBuilder::new();
        let a = builder.intern(Point2::new(0.0, 0.0));
        let b = builder.intern(Point2::new(1e-3, 0.0));
        assert_ne!(a, b);
    }

    #[test]
    fn test_degenerate_edges_dropped() {
        let mut builder: SkeletonBuilder<f64> = SkeletonBuilder::new();
        builder.add_edge(Point2::new(0.5, 0.5), Point2::new(0.5 + 1e-10, 0.5));
        let skeleton = builder.build();
        assert!(skeleton.edges.is_empty());
    }

    #[test]
    fn test_duplicate_edges_dropped() {
        let mut builder: SkeletonBuilder<f64> = SkeletonBuilder::new();
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(1.0, 0.0);
        builder.add_edge(a, b);
        builder.add_edge(b, a);
        let skeleton = builder.build();
        assert_eq!(skeleton.edges.len(), 1);
    }

    #[test]
    fn test_endpoints_match_nodes_exactly() {
        let mut builder: SkeletonBuilder<f64> = SkeletonBuilder::new();
        let canonical = Point2::new(0.3, 0.7);
        builder.add_edge(canonical, Point2::new(1.0, 1.0));
        // A nudged copy of the same node: interning must snap the edge
        // endpoint back to the canonical position.
        builder.add_edge(Point2::new(0.3 + 1e-9, 0.7), Point2::new(2.0, 2.0));
        let skeleton = builder.build();
        assert_eq!(skeleton.edges[1].start, canonical);
    }
}
