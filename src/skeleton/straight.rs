//! Straight skeleton via inward wavefront propagation.
//!
//! The polygon boundary is treated as a wavefront that shrinks inward at
//! unit speed. Each wavefront vertex slides along its angle bisector; the
//! skeleton is the set of traces the vertices leave behind. The wavefront
//! changes topology at two kinds of events:
//!
//! - *edge events*: two adjacent vertices meet and the edge between them
//!   collapses,
//! - *split events*: a reflex vertex strikes a non-adjacent edge and cuts
//!   the wavefront into two separate loops.
//!
//! Events are processed in offset order. After each event the coincident
//! vertices are clustered, their traces emitted, and the wavefront chains
//! rebuilt; loops pinched at a shared point are cut apart. A chain that
//! shrinks to one or two vertices terminates by closing its traces.

use super::builder::SkeletonBuilder;
use super::Skeleton;
use crate::polygon::{polygon_signed_area, Polygon};
use crate::primitives::{Point2, Vec2};
use num_traits::Float;

/// A vertex of the moving wavefront.
///
/// `origin` is where the vertex started its current trace; the skeleton
/// edge `origin -> final position` is emitted when the vertex dies.
#[derive(Debug, Clone, Copy)]
struct WavefrontVertex<F> {
    position: Point2<F>,
    origin: Point2<F>,
}

/// Per-vertex motion data, recomputed from positions each pass.
struct VertexMotion<F> {
    /// Unit direction of travel.
    bisector: Vec2<F>,
    /// Offset gained per unit of travel along the bisector. Equals the sine
    /// of half the interior angle, so sharp spikes move fast and flat
    /// vertices move at unit speed.
    velocity: F,
    reflex: bool,
}

pub(super) fn straight_skeleton<F: Float>(polygon: &Polygon<F>) -> Skeleton<F> {
    // Drop repeated consecutive vertices, including a duplicated closing
    // vertex.
    let mut boundary: Vec<Point2<F>> = Vec::with_capacity(polygon.len());
    for &v in &polygon.vertices {
        let distinct = boundary
            .last()
            .map_or(true, |last| last.distance(v) > F::epsilon());
        if distinct {
            boundary.push(v);
        }
    }
    if boundary.len() > 1 && boundary[0].distance(boundary[boundary.len() - 1]) <= F::epsilon() {
        boundary.pop();
    }
    if boundary.len() < 3 {
        return Skeleton::empty();
    }

    // The motion formulas assume CW winding (interior to the right of each
    // directed edge).
    if polygon_signed_area(&boundary) > F::zero() {
        boundary.reverse();
    }

    let mut min = boundary[0];
    let mut max = boundary[0];
    for v in &boundary[1..] {
        min.x = min.x.min(v.x);
        min.y = min.y.min(v.y);
        max.x = max.x.max(v.x);
        max.y = max.y.max(v.y);
    }
    let diag = min.distance(max);
    let cluster_tol = diag * F::from(1e-6).unwrap();
    let progress_tol = diag * F::from(1e-9).unwrap();

    let mut builder = SkeletonBuilder::new();
    let mut chains: Vec<Vec<WavefrontVertex<F>>> = vec![boundary
        .iter()
        .map(|&p| WavefrontVertex {
            position: p,
            origin: p,
        })
        .collect()];

    // Each pass consumes at least one event; splits add at most one chain
    // per reflex vertex, so event count is linear in the input size.
    let ceiling = 4 * boundary.len();

    for _ in 0..ceiling {
        let mut survivors = Vec::new();
        for chain in std::mem::take(&mut chains) {
            match chain.len() {
                0 => {}
                1 => builder.add_edge(chain[0].origin, chain[0].position),
                2 => {
                    let mid = chain[0].position.midpoint(chain[1].position);
                    builder.add_edge(chain[0].origin, mid);
                    builder.add_edge(chain[1].origin, mid);
                }
                _ => survivors.push(chain),
            }
        }
        if survivors.is_empty() {
            break;
        }
        for chain in survivors {
            chains.extend(advance_chain(chain, &mut builder, cluster_tol, progress_tol));
        }
    }

    // Ceiling hit with work remaining: freeze the wavefront where it stands.
    for chain in chains {
        for v in chain {
            builder.add_edge(v.origin, v.position);
        }
    }

    builder.build()
}

/// Advances one wavefront chain to its next event.
///
/// Returns the chains the wavefront continues as (empty when the chain has
/// no further events and its traces were closed).
fn advance_chain<F: Float>(
    mut chain: Vec<WavefrontVertex<F>>,
    builder: &mut SkeletonBuilder<F>,
    cluster_tol: F,
    progress_tol: F,
) -> Vec<Vec<WavefrontVertex<F>>> {
    let motions = chain_motions(&chain);
    let n = chain.len();

    let mut min_distance: Option<F> = None;
    let mut splits: Vec<(usize, usize, F)> = Vec::new();

    for i in 0..n {
        let j = (i + 1) % n;
        if let Some(d) = edge_collapse(
            chain[i].position,
            &motions[i],
            chain[j].position,
            &motions[j],
            progress_tol,
        ) {
            min_distance = Some(min_distance.map_or(d, |m: F| m.min(d)));
        }
    }

    for r in 0..n {
        if !motions[r].reflex {
            continue;
        }
        for s in 0..n {
            // Skip the two edges incident to the reflex vertex itself
            if s == r || s == (r + n - 1) % n {
                continue;
            }
            if let Some(d) = split_distance(&chain, &motions, r, s, progress_tol) {
                min_distance = Some(min_distance.map_or(d, |m: F| m.min(d)));
                splits.push((r, s, d));
            }
        }
    }

    let Some(distance) = min_distance else {
        // Diverging wavefront: no vertex ever meets another
        for v in &chain {
            builder.add_edge(v.origin, v.position);
        }
        return Vec::new();
    };

    for (v, m) in chain.iter_mut().zip(&motions) {
        v.position = v.position + m.bisector * (distance / m.velocity);
    }

    // Splits landing at this offset insert the strike point into the struck
    // edge; the reflex vertex now sits at the same point, and the cluster
    // and pinch steps below take it from there.
    let mut inserts: Vec<(usize, Point2<F>)> = splits
        .iter()
        .filter(|&&(_, _, d)| (d - distance).abs() <= cluster_tol)
        .map(|&(r, s, _)| (s + 1, chain[r].position))
        .collect();
    inserts.sort_by(|a, b| b.0.cmp(&a.0));
    inserts.dedup_by_key(|e| e.0);
    for (at, p) in inserts {
        chain.insert(
            at,
            WavefrontVertex {
                position: p,
                origin: p,
            },
        );
    }

    let contracted = contract(chain, cluster_tol, builder);
    pinch_cut(contracted, cluster_tol)
}

/// Recomputes per-vertex motion for a CW wavefront chain.
fn chain_motions<F: Float>(chain: &[WavefrontVertex<F>]) -> Vec<VertexMotion<F>> {
    let n = chain.len();
    let straight_eps = F::from(1e-9).unwrap();
    let min_velocity = F::from(1e-9).unwrap();
    let half = F::from(0.5).unwrap();

    (0..n)
        .map(|i| {
            let prev = chain[(i + n - 1) % n].position;
            let here = chain[i].position;
            let next = chain[(i + 1) % n].position;

            let u = (here - prev).normalize();
            let w = (next - here).normalize();
            let (u, w) = match (u, w) {
                (Some(u), Some(w)) => (u, w),
                (Some(u), None) => (u, u),
                (None, Some(w)) => (w, w),
                (None, None) => {
                    return VertexMotion {
                        bisector: Vec2::zero(),
                        velocity: F::one(),
                        reflex: false,
                    }
                }
            };

            let cross = u.cross(w);
            let dot = u.dot(w);
            let reflex = cross > straight_eps;

            // Interior is to the right of each directed edge (CW winding),
            // so the straight-case normal is the CW perpendicular.
            let bisector = if cross.abs() <= straight_eps && dot > F::zero() {
                w.perpendicular_cw()
            } else if reflex {
                (u - w).normalize().unwrap_or_else(|| w.perpendicular_cw())
            } else {
                (w - u).normalize().unwrap_or_else(|| w.perpendicular_cw())
            };

            let velocity = ((F::one() + dot) * half).max(F::zero()).sqrt().max(min_velocity);

            VertexMotion {
                bisector,
                velocity,
                reflex,
            }
        })
        .collect()
}

/// Offset at which two adjacent wavefront vertices meet, if they do.
///
/// Intersects the two bisector rays and converts the travel parameters back
/// to offset distance through each vertex's velocity.
fn edge_collapse<F: Float>(
    pi: Point2<F>,
    mi: &VertexMotion<F>,
    pj: Point2<F>,
    mj: &VertexMotion<F>,
    progress_tol: F,
) -> Option<F> {
    let bi = mi.bisector;
    let bj = mj.bisector;

    let det = bi.y * bj.x - bi.x * bj.y;
    if det.abs() < F::from(1e-12).unwrap() {
        return None;
    }

    let d = pj - pi;
    let ti = (bj.x * d.y - bj.y * d.x) / det;
    let tj = (bi.x * d.y - bi.y * d.x) / det;
    if ti < -progress_tol || tj < -progress_tol {
        return None;
    }

    let distance = (ti * mi.velocity).min(tj * mj.velocity);
    if distance <= progress_tol {
        return None;
    }
    Some(distance)
}

/// Offset at which a reflex vertex strikes the wavefront edge starting at
/// chain index `s`, if it does.
fn split_distance<F: Float>(
    chain: &[WavefrontVertex<F>],
    motions: &[VertexMotion<F>],
    r: usize,
    s: usize,
    progress_tol: F,
) -> Option<F> {
    let n = chain.len();
    let e = (s + 1) % n;
    let pr = chain[r].position;
    let ps = chain[s].position;
    let pe = chain[e].position;

    let dir = (pe - ps).normalize()?;
    let normal = dir.perpendicular_cw();

    let m = &motions[r];
    // Edge advances at unit speed along its interior normal; the reflex
    // vertex closes on it at the normal component of its own motion.
    let denom = F::one() - normal.dot(m.bisector) / m.velocity;
    if denom < F::from(1e-9).unwrap() {
        return None;
    }

    let distance = normal.dot(pr - ps) / denom;
    if distance <= progress_tol {
        return None;
    }

    // The strike must land within the edge as it stands at the event
    // offset, so project against the endpoints advanced along their own
    // bisectors rather than their pass-start positions.
    let ms = &motions[s];
    let me = &motions[e];
    let ps_grown = ps + ms.bisector * (distance / ms.velocity);
    let pe_grown = pe + me.bisector * (distance / me.velocity);
    let grown = pe_grown - ps_grown;
    let len = grown.magnitude();
    let dir = grown.normalize()?;

    let strike = pr + m.bisector * (distance / m.velocity);
    let t = (strike - ps_grown).dot(dir);
    if t < -progress_tol || t > len + progress_tol {
        return None;
    }
    Some(distance)
}

/// Clusters coincident vertices, emits their traces, and rebuilds the chain
/// with each maximal run of coincident vertices replaced by one vertex at
/// the cluster point.
fn contract<F: Float>(
    chain: Vec<WavefrontVertex<F>>,
    cluster_tol: F,
    builder: &mut SkeletonBuilder<F>,
) -> Vec<WavefrontVertex<F>> {
    let n = chain.len();

    let mut cluster = vec![usize::MAX; n];
    let mut clusters = 0;
    for i in 0..n {
        if cluster[i] != usize::MAX {
            continue;
        }
        cluster[i] = clusters;
        for j in (i + 1)..n {
            if cluster[j] == usize::MAX
                && chain[i].position.distance(chain[j].position) <= cluster_tol
            {
                cluster[j] = clusters;
            }
        }
        clusters += 1;
    }

    let mut count = vec![0usize; clusters];
    let mut sum_x = vec![F::zero(); clusters];
    let mut sum_y = vec![F::zero(); clusters];
    for i in 0..n {
        let c = cluster[i];
        count[c] += 1;
        sum_x[c] = sum_x[c] + chain[i].position.x;
        sum_y[c] = sum_y[c] + chain[i].position.y;
    }
    let centroid: Vec<Point2<F>> = (0..clusters)
        .map(|c| {
            let k = F::from(count[c]).unwrap();
            Point2::new(sum_x[c] / k, sum_y[c] / k)
        })
        .collect();

    let multi = |c: usize| count[c] >= 2;

    for i in 0..n {
        if multi(cluster[i]) {
            builder.add_edge(chain[i].origin, centroid[cluster[i]]);
        }
    }

    // Rotate so index 0 does not continue a run from the tail
    let start = (0..n).find(|&i| {
        let prev = (i + n - 1) % n;
        !(multi(cluster[i]) && cluster[prev] == cluster[i])
    });
    let Some(start) = start else {
        // The whole chain collapsed into one cluster
        let p = centroid[cluster[0]];
        return vec![WavefrontVertex {
            position: p,
            origin: p,
        }];
    };

    let mut result = Vec::new();
    let mut i = 0;
    while i < n {
        let idx = (start + i) % n;
        let c = cluster[idx];
        if multi(c) {
            let p = centroid[c];
            result.push(WavefrontVertex {
                position: p,
                origin: p,
            });
            let mut k = i + 1;
            while k < n && cluster[(start + k) % n] == c {
                k += 1;
            }
            i = k;
        } else {
            result.push(chain[idx]);
            i += 1;
        }
    }
    result
}

/// Cuts a chain containing two distinct vertices at the same point into
/// sub-chains, each keeping a copy of the pinch vertex.
fn pinch_cut<F: Float>(
    chain: Vec<WavefrontVertex<F>>,
    cluster_tol: F,
) -> Vec<Vec<WavefrontVertex<F>>> {
    let n = chain.len();
    for i in 0..n {
        for j in (i + 1)..n {
            if chain[i].position.distance(chain[j].position) <= cluster_tol {
                let first: Vec<_> = chain[i..j].to_vec();
                let second: Vec<_> = chain[j..].iter().chain(chain[..i].iter()).copied().collect();
                let mut out = pinch_cut(first, cluster_tol);
                out.extend(pinch_cut(second, cluster_tol));
                return out;
            }
        }
    }
    vec![chain]
}
