//! Graph queries over a skeleton.
//!
//! A [`Skeleton`] stores positions, not indices, so every query starts by
//! rebuilding node topology: edge endpoints are matched back to nodes with
//! a small spatial hash. Skeletons are small enough that rebuilding per
//! call beats keeping an adjacency structure in sync with edits.

use super::{Skeleton, NODE_TOLERANCE};
use crate::polygon::Polygon;
use crate::primitives::{Circle2, Line2, Point2, Rect2, Segment2};
use num_traits::Float;
use std::collections::{HashMap, HashSet, VecDeque};

/// Per-node incidence lists: `(edge index, node at the other end)`.
struct Topology {
    incident: Vec<Vec<(usize, usize)>>,
}

impl Topology {
    fn degree(&self, node: usize) -> usize {
        self.incident[node].len()
    }
}

/// Spatial hash over node positions for endpoint lookup.
struct NodeIndex<F> {
    cells: HashMap<(i64, i64), Vec<usize>>,
    cell: F,
}

impl<F: Float> NodeIndex<F> {
    fn build(nodes: &[Point2<F>]) -> Self {
        let cell = F::from(2.0 * NODE_TOLERANCE).unwrap();
        let mut cells: HashMap<(i64, i64), Vec<usize>> = HashMap::new();
        for (i, n) in nodes.iter().enumerate() {
            cells.entry(Self::key(*n, cell)).or_default().push(i);
        }
        Self { cells, cell }
    }

    fn key(p: Point2<F>, cell: F) -> (i64, i64) {
        (
            (p.x / cell).floor().to_i64().unwrap_or(0),
            (p.y / cell).floor().to_i64().unwrap_or(0),
        )
    }

    /// Finds the nearest node within tolerance, probing the 3x3 cell
    /// neighborhood around the query point.
    fn find(&self, nodes: &[Point2<F>], p: Point2<F>) -> Option<usize> {
        let (kx, ky) = Self::key(p, self.cell);
        let mut best: Option<(usize, F)> = None;
        for dx in -1..=1 {
            for dy in -1..=1 {
                let Some(candidates) = self.cells.get(&(kx + dx, ky + dy)) else {
                    continue;
                };
                for &i in candidates {
                    let d = nodes[i].distance(p);
                    if d <= self.cell && best.map_or(true, |(_, bd)| d < bd) {
                        best = Some((i, d));
                    }
                }
            }
        }
        best.map(|(i, _)| i)
    }
}

impl<F: Float> Skeleton<F> {
    fn topology(&self) -> Topology {
        let index = NodeIndex::build(&self.nodes);
        let mut incident = vec![Vec::new(); self.nodes.len()];
        for (ei, e) in self.edges.iter().enumerate() {
            let a = index.find(&self.nodes, e.start);
            let b = index.find(&self.nodes, e.end);
            if let (Some(a), Some(b)) = (a, b) {
                incident[a].push((ei, b));
                incident[b].push((ei, a));
            }
        }
        Topology { incident }
    }

    /// Returns the longest path through the skeleton as a node polyline.
    ///
    /// Path length is cumulative euclidean edge length. Uses the
    /// double-sweep farthest-node search per connected component, which is
    /// exact on trees (the common case) and a good approximation when the
    /// skeleton has cycles.
    pub fn longest_path(&self) -> Vec<Point2<F>> {
        if self.edges.is_empty() {
            return Vec::new();
        }
        let topo = self.topology();
        let n = self.nodes.len();

        let mut seen = vec![false; n];
        let mut best_length = F::zero();
        let mut best_path: Vec<usize> = Vec::new();

        for start in 0..n {
            if seen[start] || topo.incident[start].is_empty() {
                continue;
            }
            let sweep = farthest_from(&topo, self, start);
            for (i, visited) in sweep.visited.iter().enumerate() {
                if *visited {
                    seen[i] = true;
                }
            }
            let sweep = farthest_from(&topo, self, sweep.node);
            if sweep.distance > best_length || best_path.is_empty() {
                best_length = sweep.distance;
                let mut path = Vec::new();
                let mut at = sweep.node;
                while at != usize::MAX {
                    path.push(at);
                    at = sweep.parent[at];
                }
                best_path = path;
            }
        }

        best_path.iter().map(|&i| self.nodes[i]).collect()
    }

    /// Returns the junction core of the skeleton.
    ///
    /// Every chain from a degree-1 node through degree-2 nodes that ends at
    /// a junction (degree 3 or more) is dropped. Removal can demote a
    /// junction to a leaf and expose new removable branches, so the pass
    /// repeats until nothing changes; the result is therefore its own spine.
    /// A remainder with no junction has no core and yields the empty
    /// skeleton, which means tree-shaped skeletons reduce to nothing and
    /// only cycles passing through junctions survive.
    pub fn spine(&self) -> Skeleton<F> {
        let mut current = self.clone();
        loop {
            let topo = current.topology();
            if !(0..current.nodes.len()).any(|i| topo.degree(i) >= 3) {
                return Skeleton::empty();
            }

            let mut remove = vec![false; current.edges.len()];
            for leaf in 0..current.nodes.len() {
                if topo.degree(leaf) != 1 {
                    continue;
                }
                let mut branch = Vec::new();
                let mut prev_edge = usize::MAX;
                let mut at = leaf;
                loop {
                    let Some(&(ei, other)) = topo.incident[at]
                        .iter()
                        .find(|&&(ei, _)| ei != prev_edge)
                    else {
                        break;
                    };
                    branch.push(ei);
                    prev_edge = ei;
                    at = other;
                    if topo.degree(at) != 2 {
                        break;
                    }
                }
                if topo.degree(at) >= 3 {
                    for ei in branch {
                        remove[ei] = true;
                    }
                }
            }

            if !remove.iter().any(|&r| r) {
                return current;
            }
            let mut builder = super::SkeletonBuilder::new();
            for (ei, e) in current.edges.iter().enumerate() {
                if !remove[ei] {
                    builder.add_edge(e.start, e.end);
                }
            }
            current = builder.build();
        }
    }

    /// Decomposes the skeleton into branches: polylines running between
    /// endpoint nodes (degree 1 or degree 3+) through degree-2 nodes.
    ///
    /// Pure cycles with no endpoint node are not reported.
    pub fn branches(&self) -> Vec<Vec<Point2<F>>> {
        let topo = self.topology();
        let mut used = vec![false; self.edges.len()];
        let mut result = Vec::new();

        for node in 0..self.nodes.len() {
            let degree = topo.degree(node);
            if degree == 0 || degree == 2 {
                continue;
            }
            for &(first_edge, first_next) in &topo.incident[node] {
                if used[first_edge] {
                    continue;
                }
                used[first_edge] = true;
                let mut polyline = vec![self.nodes[node], self.nodes[first_next]];
                let mut prev_edge = first_edge;
                let mut current = first_next;
                while topo.degree(current) == 2 {
                    let Some(&(ei, next)) = topo.incident[current]
                        .iter()
                        .find(|&&(ei, _)| ei != prev_edge)
                    else {
                        break;
                    };
                    if used[ei] {
                        break;
                    }
                    used[ei] = true;
                    prev_edge = ei;
                    current = next;
                    polyline.push(self.nodes[current]);
                }
                result.push(polyline);
            }
        }
        result
    }

    /// Returns the intersection points of the skeleton with an infinite
    /// line.
    pub fn intersections_with_line(&self, line: &Line2<F>) -> Vec<Point2<F>> {
        // If every node sits strictly on one side, no edge can cross
        let mut positive = false;
        let mut negative = false;
        let mut on_line = false;
        for n in &self.nodes {
            let s = line.side(*n);
            if s > F::zero() {
                positive = true;
            } else if s < F::zero() {
                negative = true;
            } else {
                on_line = true;
            }
        }
        if !on_line && !(positive && negative) {
            return Vec::new();
        }

        dedup_points(
            self.edges
                .iter()
                .filter_map(|e| line.intersect_segment(e))
                .collect(),
        )
    }

    /// Returns the intersection points of the skeleton with a segment.
    pub fn intersections_with_segment(&self, segment: &Segment2<F>) -> Vec<Point2<F>> {
        dedup_points(
            self.edges
                .iter()
                .filter_map(|e| e.intersect_segment(*segment))
                .collect(),
        )
    }

    /// Returns the intersection points of the skeleton with a circle's
    /// boundary.
    pub fn intersections_with_circle(&self, circle: &Circle2<F>) -> Vec<Point2<F>> {
        dedup_points(
            self.edges
                .iter()
                .flat_map(|e| e.intersect_circle(circle))
                .collect(),
        )
    }

    /// Returns the intersection points of the skeleton with a rectangle's
    /// boundary.
    pub fn intersections_with_rect(&self, rect: &Rect2<F>) -> Vec<Point2<F>> {
        let mut points = Vec::new();
        for side in rect.edges() {
            points.extend(self.edges.iter().filter_map(|e| e.intersect_segment(side)));
        }
        dedup_points(points)
    }

    /// Returns the intersection points of the skeleton with a triangle's
    /// boundary.
    pub fn intersections_with_triangle(
        &self,
        a: Point2<F>,
        b: Point2<F>,
        c: Point2<F>,
    ) -> Vec<Point2<F>> {
        let sides = [
            Segment2::new(a, b),
            Segment2::new(b, c),
            Segment2::new(c, a),
        ];
        let mut points = Vec::new();
        for side in sides {
            points.extend(self.edges.iter().filter_map(|e| e.intersect_segment(side)));
        }
        dedup_points(points)
    }

    /// Returns the intersection points of the skeleton with a polygon's
    /// boundary.
    pub fn intersections_with_polygon(&self, polygon: &Polygon<F>) -> Vec<Point2<F>> {
        let mut points = Vec::new();
        for i in 0..polygon.len() {
            let side = polygon.edge(i);
            points.extend(self.edges.iter().filter_map(|e| e.intersect_segment(side)));
        }
        dedup_points(points)
    }
}

/// Result of one farthest-node sweep.
struct Sweep<F> {
    node: usize,
    distance: F,
    parent: Vec<usize>,
    visited: Vec<bool>,
}

/// Breadth-first sweep from `start`, tracking cumulative edge length at
/// first visit. Exact farthest node on trees.
fn farthest_from<F: Float>(topo: &Topology, skeleton: &Skeleton<F>, start: usize) -> Sweep<F> {
    let n = skeleton.nodes.len();
    let mut visited = vec![false; n];
    let mut parent = vec![usize::MAX; n];
    let mut distance = vec![F::zero(); n];

    let mut best_node = start;
    let mut best_distance = F::zero();

    let mut queue = VecDeque::from([start]);
    visited[start] = true;
    while let Some(u) = queue.pop_front() {
        for &(ei, v) in &topo.incident[u] {
            if visited[v] {
                continue;
            }
            visited[v] = true;
            parent[v] = u;
            distance[v] = distance[u] + skeleton.edges[ei].length();
            if distance[v] > best_distance {
                best_distance = distance[v];
                best_node = v;
            }
            queue.push_back(v);
        }
    }

    Sweep {
        node: best_node,
        distance: best_distance,
        parent,
        visited,
    }
}

/// Drops near-duplicate points (shared corner hits and the like).
fn dedup_points<F: Float>(points: Vec<Point2<F>>) -> Vec<Point2<F>> {
    let mut seen: HashSet<(i64, i64)> = HashSet::new();
    points
        .into_iter()
        .filter(|p| seen.insert(super::builder::grid_key(*p)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skeleton::SkeletonBuilder;
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64) -> Point2<f64> {
        Point2::new(x, y)
    }

    /// Three branches meeting at (1, 0).
    fn tee() -> Skeleton<f64> {
        let mut b = SkeletonBuilder::new();
        b.add_edge(p(0.0, 0.0), p(1.0, 0.0));
        b.add_edge(p(1.0, 0.0), p(2.0, 0.0));
        b.add_edge(p(1.0, 0.0), p(1.0, 1.0));
        b.build()
    }

    /// A path with two spurs: junctions at (1, 0) and (2, 0).
    fn caterpillar() -> Skeleton<f64> {
        let mut b = SkeletonBuilder::new();
        b.add_edge(p(0.0, 0.0), p(1.0, 0.0));
        b.add_edge(p(1.0, 0.0), p(2.0, 0.0));
        b.add_edge(p(2.0, 0.0), p(3.0, 0.0));
        b.add_edge(p(1.0, 0.0), p(1.0, 1.0));
        b.add_edge(p(2.0, 0.0), p(2.0, 1.0));
        b.build()
    }

    #[test]
    fn test_longest_path_tee() {
        let path = tee().longest_path();
        assert_eq!(path.len(), 3);
        let length: f64 = path.windows(2).map(|w| w[0].distance(w[1])).sum();
        assert_relative_eq!(length, 2.0, epsilon = 1e-12);
        // The horizontal arm beats the vertical spur
        assert!(path.iter().all(|pt| pt.y == 0.0));
    }

    #[test]
    fn test_longest_path_empty() {
        assert!(Skeleton::<f64>::empty().longest_path().is_empty());
    }

    #[test]
    fn test_longest_path_picks_largest_component() {
        let mut b = SkeletonBuilder::new();
        b.add_edge(p(0.0, 0.0), p(0.5, 0.0));
        b.add_edge(p(10.0, 0.0), p(13.0, 0.0));
        let path = b.build().longest_path();
        let length: f64 = path.windows(2).map(|w| w[0].distance(w[1])).sum();
        assert_relative_eq!(length, 3.0, epsilon = 1e-12);
    }

    /// Two arcs and a chord between (0, 0) and (2, 0), plus one spur.
    fn theta_with_spur() -> Skeleton<f64> {
        let mut b = SkeletonBuilder::new();
        b.add_edge(p(0.0, 0.0), p(1.0, 1.0));
        b.add_edge(p(1.0, 1.0), p(2.0, 0.0));
        b.add_edge(p(0.0, 0.0), p(1.0, -1.0));
        b.add_edge(p(1.0, -1.0), p(2.0, 0.0));
        b.add_edge(p(0.0, 0.0), p(2.0, 0.0));
        b.add_edge(p(0.0, 0.0), p(-1.0, 0.0));
        b.build()
    }

    #[test]
    fn test_spine_keeps_junction_cycles() {
        let spine = theta_with_spur().spine();
        // The spur goes, the cycle through the two junctions stays
        assert_eq!(spine.edges.len(), 5);
        assert!(!spine.nodes.contains(&p(-1.0, 0.0)));
        assert_eq!(spine.spine(), spine);
    }

    #[test]
    fn test_spine_empty_without_junction() {
        let mut b = SkeletonBuilder::new();
        b.add_edge(p(0.0, 0.0), p(1.0, 0.0));
        b.add_edge(p(1.0, 0.0), p(2.0, 0.0));
        assert!(b.build().spine().is_empty());
    }

    #[test]
    fn test_spine_idempotent() {
        let spine = tee().spine();
        // All branches of the tee are leaf-to-junction, so the spine is
        // empty, and the spine of an empty skeleton stays empty.
        assert!(spine.is_empty());
        assert_eq!(spine.spine(), spine);
    }

    #[test]
    fn test_spine_idempotent_with_demoted_junctions() {
        // Removing the spurs leaves the middle segment with two degree-1
        // ends and no junction, so repeated pruning empties the skeleton
        // rather than keeping a segment a second application would drop.
        let skeleton = caterpillar();
        let once = skeleton.spine();
        assert!(once.is_empty());
        assert_eq!(once.spine(), once);
    }

    #[test]
    fn test_branches_tee() {
        let branches = tee().branches();
        assert_eq!(branches.len(), 3);
        for branch in &branches {
            assert_eq!(branch.len(), 2);
            assert_relative_eq!(branch[0].distance(branch[1]), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_branches_merge_degree_two_nodes() {
        let mut b = SkeletonBuilder::new();
        b.add_edge(p(0.0, 0.0), p(1.0, 0.0));
        b.add_edge(p(1.0, 0.0), p(2.0, 0.0));
        let branches = b.build().branches();
        assert_eq!(branches.len(), 1);
        assert_eq!(branches[0].len(), 3);
    }

    #[test]
    fn test_intersections_with_line() {
        let skeleton = tee();
        let line = Line2::from_points(p(-1.0, 0.5), p(5.0, 0.5));
        let hits = skeleton.intersections_with_line(&line);
        assert_eq!(hits.len(), 1);
        assert_relative_eq!(hits[0].x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(hits[0].y, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_intersections_with_line_same_side_fast_path() {
        let skeleton = tee();
        let line = Line2::from_points(p(0.0, 5.0), p(1.0, 5.0));
        assert!(skeleton.intersections_with_line(&line).is_empty());
    }

    #[test]
    fn test_intersections_with_segment() {
        let skeleton = tee();
        let crossing = Segment2::new(p(0.5, -1.0), p(0.5, 1.0));
        let hits = skeleton.intersections_with_segment(&crossing);
        assert_eq!(hits.len(), 1);
        assert_relative_eq!(hits[0].x, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_intersections_with_circle() {
        let skeleton = tee();
        let circle = Circle2::new(p(1.0, 0.0), 0.5);
        let hits = skeleton.intersections_with_circle(&circle);
        assert_eq!(hits.len(), 3);
    }

    #[test]
    fn test_intersections_with_rect() {
        let skeleton = tee();
        let rect = Rect2::new(p(0.5, -0.5), p(1.5, 0.5));
        let hits = skeleton.intersections_with_rect(&rect);
        assert_eq!(hits.len(), 3);
    }

    #[test]
    fn test_intersections_with_triangle() {
        let skeleton = tee();
        let hits = skeleton.intersections_with_triangle(p(0.5, -1.0), p(1.5, -1.0), p(1.0, 2.0));
        // The two slanted sides cross the horizontal arm, one of them also
        // crosses the vertical spur
        assert!(!hits.is_empty());
    }

    #[test]
    fn test_intersections_with_polygon() {
        let skeleton = tee();
        let square = Polygon::new(vec![
            p(0.5, -0.25),
            p(1.5, -0.25),
            p(1.5, 0.25),
            p(0.5, 0.25),
        ]);
        let hits = skeleton.intersections_with_polygon(&square);
        // Left and right sides cross the horizontal arm; the top side
        // crosses the vertical spur
        assert_eq!(hits.len(), 3);
    }
}
