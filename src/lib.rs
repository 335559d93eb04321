//! Wayside - street descriptions for a coordinate pair.
//!
//! Given a latitude/longitude, Wayside fetches the surrounding road network
//! from Overpass, finds the nearest street segment, and describes it as
//! "Main St between 1st Ave and 2nd Ave", optionally annotated with the
//! nearest named point of interest.
//!
//! This library provides shared types and modules for the CLI and server
//! binaries.

pub mod config;
pub mod describe;
pub mod error;
pub mod landmark;
pub mod models;
pub mod overpass;
pub mod resolve;
pub mod service;

pub use error::LookupError;
pub use models::{Edge, GeoPoint, Landmark, NetworkKind, ResolvedEdge, RoadGraph, UNKNOWN};
pub use service::{LookupService, StreetDescription};
