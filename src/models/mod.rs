//! Core data models for street resolution.

pub mod graph;
pub mod resolved;

pub use graph::{Edge, GeoPoint, GraphNode, NetworkKind, NodeId, RoadGraph, StreetName};
pub use resolved::{Landmark, ResolvedEdge, UNKNOWN};
