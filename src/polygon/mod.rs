//! Simple polygon type and basic operations.
//!
//! A [`Polygon`] is an ordered vertex list, implicitly closed. The skeleton
//! algorithms consume polygons read-only; none of them require a particular
//! winding order on input.

mod core;

pub use core::{polygon_contains, polygon_signed_area, Polygon};
