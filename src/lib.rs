//! axium - Polygon skeleton extraction
//!
//! A skeleton approximates the "centerline" of a simple polygon: a graph of
//! interior nodes and edges that captures the shape's branching structure.
//! This crate builds skeletons with three interchangeable algorithms sharing
//! a common triangulation substrate:
//!
//! - **Straight skeleton** — simulates the polygon boundary shrinking inward
//!   at constant speed and records where the wavefront collides.
//! - **Chordal axis** — classifies the triangles of a constrained Delaunay
//!   triangulation and connects their midpoints.
//! - **Voronoi** — densifies the boundary, filters the Voronoi dual to the
//!   interior, and prunes short dangling branches.
//!
//! All algorithms are best-effort: degenerate input yields an empty skeleton
//! rather than an error.
//!
//! # Example
//!
//! ```
//! use axium::{skeletonize, Point2, Polygon, SkeletonAlgorithm};
//!
//! let square = Polygon::new(vec![
//!     Point2::new(0.0_f64, 0.0),
//!     Point2::new(1.0, 0.0),
//!     Point2::new(1.0, 1.0),
//!     Point2::new(0.0, 1.0),
//! ]);
//!
//! let skeleton = skeletonize(&square, SkeletonAlgorithm::Straight);
//! assert!(!skeleton.is_empty());
//! ```

pub mod error;
pub mod polygon;
pub mod primitives;
pub mod skeleton;
pub mod triangulation;

pub use error::AxiumError;
pub use polygon::Polygon;
pub use primitives::{Circle2, Line2, Point2, Rect2, Segment2, Vec2};
pub use skeleton::{skeletonize, Skeleton, SkeletonAlgorithm};
pub use triangulation::{Triangle, Triangulation};
