//! Nearest-edge resolution.
//!
//! Finds the street segment closest to a query point and derives the cross
//! streets bounding it at each end.

mod geometry;
mod index;
mod resolver;

pub use geometry::{haversine_m, LocalProjection};
pub use index::EdgeIndex;
pub use resolver::{nearest_node, resolve};
