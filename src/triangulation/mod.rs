//! Incremental Delaunay triangulation with edge constraints.
//!
//! The [`Triangulation`] type builds a Delaunay triangulation of a point set
//! with the Bowyer-Watson algorithm, then optionally enforces constraint
//! edges (CDT) and removes triangles outside a boundary polygon. It also
//! answers the adjacency and Voronoi-dual queries the skeleton algorithms
//! are built on.

mod delaunay;

pub use delaunay::{Triangle, Triangulation, SUPER_VERTICES};
