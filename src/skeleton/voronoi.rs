//! Skeleton extraction from the Voronoi diagram of boundary samples.
//!
//! The boundary is densified with evenly spaced samples, the Voronoi
//! diagram of the samples is read off the Delaunay dual, edges leaving the
//! polygon are discarded, and short leaf branches (sampling noise near the
//! boundary) are pruned away. What remains approximates the medial axis.

use super::builder::{grid_key, SkeletonBuilder};
use super::Skeleton;
use crate::polygon::Polygon;
use crate::primitives::{Point2, Segment2};
use crate::triangulation::Triangulation;
use num_traits::Float;
use std::collections::HashMap;

/// Samples per average boundary edge.
const DENSIFY_FACTOR: f64 = 5.0;

/// Upper bound on pruning passes.
const MAX_PRUNE_PASSES: usize = 50;

pub(super) fn voronoi_skeleton<F: Float>(polygon: &Polygon<F>) -> Skeleton<F> {
    let n = polygon.len();
    if n < 3 {
        return Skeleton::empty();
    }

    let step = polygon.average_edge_length() / F::from(DENSIFY_FACTOR).unwrap();
    if step <= F::zero() {
        return Skeleton::empty();
    }

    // Each edge contributes its start vertex plus interior samples; the end
    // vertex belongs to the next edge.
    let mut samples: Vec<Point2<F>> = Vec::new();
    for i in 0..n {
        let edge = polygon.edge(i);
        let len = edge.length();
        let count = (len / step).ceil().to_usize().unwrap_or(1).max(1);
        for j in 0..count {
            let t = F::from(j).unwrap() / F::from(count).unwrap();
            samples.push(edge.point_at(t));
        }
    }

    let tri = Triangulation::create(&samples);

    let interior: Vec<Segment2<F>> = tri
        .voronoi_edges()
        .into_iter()
        .filter(|seg| {
            !seg.is_degenerate(F::from(super::NODE_TOLERANCE).unwrap())
                && polygon.contains(seg.start)
                && polygon.contains(seg.end)
        })
        .collect();

    let threshold = polygon.perimeter() / (F::from(2.0).unwrap() * F::from(n).unwrap());
    let pruned = prune_short_branches(interior, threshold);

    let mut builder = SkeletonBuilder::new();
    for seg in pruned {
        builder.add_edge(seg.start, seg.end);
    }
    builder.build()
}

/// Repeatedly removes leaf branches shorter than `threshold`.
///
/// A branch is the chain from a degree-1 node through degree-2 nodes to the
/// first junction or opposite leaf. Passes repeat until a pass removes
/// nothing, so branches that become leaves after a removal get pruned too.
fn prune_short_branches<F: Float>(
    mut edges: Vec<Segment2<F>>,
    threshold: F,
) -> Vec<Segment2<F>> {
    for _ in 0..MAX_PRUNE_PASSES {
        let mut node_of: HashMap<(i64, i64), usize> = HashMap::new();
        let mut node_id = |p: Point2<F>, next: &mut usize| -> usize {
            *node_of.entry(grid_key(p)).or_insert_with(|| {
                let id = *next;
                *next += 1;
                id
            })
        };

        let mut nodes = 0usize;
        let ends: Vec<(usize, usize)> = edges
            .iter()
            .map(|e| {
                let a = node_id(e.start, &mut nodes);
                let b = node_id(e.end, &mut nodes);
                (a, b)
            })
            .collect();

        let mut incident: Vec<Vec<(usize, usize)>> = vec![Vec::new(); nodes];
        for (ei, &(a, b)) in ends.iter().enumerate() {
            incident[a].push((ei, b));
            incident[b].push((ei, a));
        }

        let mut remove = vec![false; edges.len()];
        for leaf in 0..nodes {
            if incident[leaf].len() != 1 {
                continue;
            }
            let mut branch = Vec::new();
            let mut length = F::zero();
            let mut prev_edge = usize::MAX;
            let mut current = leaf;
            loop {
                let Some(&(ei, other)) = incident[current]
                    .iter()
                    .find(|&&(ei, _)| ei != prev_edge)
                else {
                    break;
                };
                branch.push(ei);
                length = length + edges[ei].length();
                prev_edge = ei;
                current = other;
                if incident[current].len() != 2 {
                    break;
                }
            }
            if length < threshold {
                for ei in branch {
                    remove[ei] = true;
                }
            }
        }

        if !remove.iter().any(|&r| r) {
            break;
        }
        let mut i = 0;
        edges.retain(|_| {
            let keep = !remove[i];
            i += 1;
            keep
        });
    }
    edges
}
