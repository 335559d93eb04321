//! Overpass API providers.
//!
//! Two consumers share one HTTP client: the road-network fetch that builds
//! the per-query graph, and the point-of-interest fetch behind the landmark
//! lookup.

mod client;
mod network;
mod poi;

pub use client::{OverpassClient, OverpassElement, OverpassResponse};
pub use network::fetch_graph;
pub use poi::{fetch_pois, Poi, PoiKind};
