//! Resolution results: the described edge and the nearby landmark.

use serde::{Deserialize, Serialize};

use super::graph::NodeId;

/// Explicit absence sentinel. Output strings are never null; a street or
/// landmark that cannot be named resolves to this literal.
pub const UNKNOWN: &str = "Unknown";

/// Result of the nearest-edge search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedEdge {
    /// Endpoints of the selected segment.
    pub u: NodeId,
    pub v: NodeId,
    /// Disambiguating key among parallel edges between `u` and `v`.
    pub key: u32,
    /// Display name of the segment itself, or `"Unknown"`.
    pub main_street: String,
    /// Cross street chosen at `u`, or `"Unknown"`.
    pub from_street: String,
    /// Cross street chosen at `v`, or `"Unknown"`.
    pub to_street: String,
    /// Deduplicated cross-street names discovered at `u`, in discovery order.
    pub cross_streets_at_u: Vec<String>,
    /// Deduplicated cross-street names discovered at `v`, in discovery order.
    pub cross_streets_at_v: Vec<String>,
}

/// A named point of interest near the query location, or the explicit
/// absence of one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Landmark {
    Named(String),
    Unknown,
}

// On the wire the landmark is always a string: a real name, or the literal
// "Unknown" sentinel. Never null.
impl Serialize for Landmark {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Landmark {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        if name == UNKNOWN {
            Ok(Landmark::Unknown)
        } else {
            Ok(Landmark::Named(name))
        }
    }
}

impl Landmark {
    pub fn name(&self) -> &str {
        match self {
            Landmark::Named(name) => name,
            Landmark::Unknown => UNKNOWN,
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, Landmark::Named(_))
    }
}

impl std::fmt::Display for Landmark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
