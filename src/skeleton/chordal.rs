//! Chordal axis transform over a constrained Delaunay triangulation.
//!
//! The polygon interior is triangulated with its boundary edges enforced as
//! constraints, exterior triangles are discarded, and each remaining
//! triangle contributes skeleton edges based on how many of its edges are
//! internal (shared with another interior triangle):
//!
//! - one internal edge (terminal triangle): midpoint of the internal edge
//!   to the opposite vertex,
//! - two internal edges (sleeve triangle): midpoint to midpoint,
//! - three internal edges (junction triangle): centroid to each midpoint.
//!
//! Both triangles adjacent to an internal edge derive its midpoint from the
//! same vertex positions, so the midpoints agree bit for bit and the
//! builder's node weld (`NODE_TOLERANCE`) joins them exactly; no separate
//! midpoint-matching tolerance is needed.

use super::builder::SkeletonBuilder;
use super::Skeleton;
use crate::polygon::Polygon;
use crate::triangulation::Triangulation;
use num_traits::Float;

pub(super) fn chordal_axis<F: Float>(polygon: &Polygon<F>) -> Skeleton<F> {
    let n = polygon.len();
    let Ok(mut tri) = Triangulation::try_create(&polygon.vertices) else {
        return Skeleton::empty();
    };

    for i in 0..n {
        tri.enforce_constraint(i, (i + 1) % n);
    }
    tri.remove_exterior(polygon);

    let mut builder = SkeletonBuilder::new();

    for ti in 0..tri.triangles().len() {
        let t = tri.triangles()[ti];
        let internal = tri.internal_edges(ti, n);
        match internal.len() {
            1 => {
                let (p, q) = internal[0];
                let mid = tri.position(p).midpoint(tri.position(q));
                builder.add_edge(mid, tri.position(t.opposite_vertex(p, q)));
            }
            2 => {
                let (p0, q0) = internal[0];
                let (p1, q1) = internal[1];
                let m0 = tri.position(p0).midpoint(tri.position(q0));
                let m1 = tri.position(p1).midpoint(tri.position(q1));
                builder.add_edge(m0, m1);
            }
            3 => {
                let c = tri.centroid(&t);
                for (p, q) in internal {
                    builder.add_edge(c, tri.position(p).midpoint(tri.position(q)));
                }
            }
            _ => {}
        }
    }

    builder.build()
}
