//! Road-network graph types.
//!
//! The graph is an undirected multigraph built fresh per query from the
//! provider and discarded afterwards: nodes are intersections with WGS84
//! coordinates, edges are street segments carrying an optional name.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::error::LookupError;

/// Opaque node identifier, stable within one graph instance.
pub type NodeId = i64;

/// Geographic point (WGS84 decimal degrees).
///
/// No range validation is performed here; out-of-range values are the
/// caller's responsibility and are treated as opaque coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Parse a `"lat, lng"` string into a point.
    ///
    /// Accepts flexible whitespace around the comma. Anything that does not
    /// split into exactly two parseable floats is `InvalidInput`.
    pub fn parse(input: &str) -> Result<Self, LookupError> {
        let invalid = || LookupError::InvalidInput {
            input: input.to_string(),
        };

        let mut parts = input.split(',');
        let lat = parts
            .next()
            .and_then(|p| p.trim().parse::<f64>().ok())
            .ok_or_else(invalid)?;
        let lon = parts
            .next()
            .and_then(|p| p.trim().parse::<f64>().ok())
            .ok_or_else(invalid)?;
        if parts.next().is_some() {
            return Err(invalid());
        }

        Ok(Self { lat, lon })
    }
}

/// Which network profile to request from the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkKind {
    /// Drivable roads only (the default, matching the lookup's purpose).
    Drivable,
    /// Every highway-tagged way, including footpaths and cycleways.
    All,
}

impl Default for NetworkKind {
    fn default() -> Self {
        NetworkKind::Drivable
    }
}

/// A street name as carried by an edge.
///
/// Segments occasionally carry several official names (e.g. a road that is
/// also a numbered route); the list is ordered and the first alias is
/// canonical for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StreetName {
    Single(String),
    Aliases(Vec<String>),
}

impl StreetName {
    /// The display name: the string itself, or the first alias.
    ///
    /// An `Aliases` list is never constructed empty; `from_tag` guards it.
    pub fn canonical(&self) -> &str {
        match self {
            StreetName::Single(name) => name,
            StreetName::Aliases(names) => names.first().map(String::as_str).unwrap_or_default(),
        }
    }

    /// Build a name from a raw OSM `name` tag value. Semicolons separate
    /// alternate names; blank values yield `None`.
    pub fn from_tag(value: &str) -> Option<Self> {
        let mut parts: Vec<String> = value
            .split(';')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(String::from)
            .collect();

        match parts.len() {
            0 => None,
            1 => parts.pop().map(StreetName::Single),
            _ => Some(StreetName::Aliases(parts)),
        }
    }
}

/// An intersection or way endpoint with coordinates.
#[derive(Debug, Clone, Copy)]
pub struct GraphNode {
    pub id: NodeId,
    pub point: GeoPoint,
}

/// One street segment between two intersections.
///
/// `key` disambiguates parallel edges between the same node pair (divided
/// roadways produce these). `geometry` is the segment's polyline from `u`
/// to `v`, endpoints included; distance queries follow it rather than the
/// straight chord, so curved roads resolve correctly.
#[derive(Debug, Clone)]
pub struct Edge {
    pub u: NodeId,
    pub v: NodeId,
    pub key: u32,
    pub name: Option<StreetName>,
    pub geometry: Vec<GeoPoint>,
}

impl Edge {
    /// Display name of this segment, or the `"Unknown"` sentinel.
    pub fn resolved_name(&self) -> &str {
        self.name
            .as_ref()
            .map(StreetName::canonical)
            .unwrap_or(super::resolved::UNKNOWN)
    }
}

/// Undirected road-network multigraph scoped to one query.
///
/// Edges live in a `Vec` in provider order and adjacency lists hold edge
/// indices in insertion order, so every traversal downstream is
/// reproducible for identical input. Nodes with no incident edges are
/// allowed; resolution never anchors on a bare node.
#[derive(Debug, Default)]
pub struct RoadGraph {
    nodes: HashMap<NodeId, GraphNode>,
    edges: Vec<Edge>,
    adjacency: HashMap<NodeId, Vec<usize>>,
}

impl RoadGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(&mut self, id: NodeId, point: GeoPoint) {
        self.nodes.insert(id, GraphNode { id, point });
    }

    /// Insert a straight edge between two existing nodes; the geometry is
    /// the chord between their coordinates.
    pub fn add_edge(&mut self, u: NodeId, v: NodeId, name: Option<StreetName>) -> Option<u32> {
        let geometry = match (self.nodes.get(&u), self.nodes.get(&v)) {
            (Some(a), Some(b)) => vec![a.point, b.point],
            _ => return None,
        };
        self.add_edge_with_geometry(u, v, name, geometry)
    }

    /// Insert an edge carrying its full polyline. The disambiguating key is
    /// assigned automatically: 0 for the first edge between a node pair,
    /// counting up for parallels.
    ///
    /// Returns the assigned key, or `None` when either endpoint is missing
    /// from the graph (the provider guarantees referenced nodes exist, so a
    /// miss means a truncated response and the edge is dropped).
    pub fn add_edge_with_geometry(
        &mut self,
        u: NodeId,
        v: NodeId,
        name: Option<StreetName>,
        geometry: Vec<GeoPoint>,
    ) -> Option<u32> {
        if !self.nodes.contains_key(&u) || !self.nodes.contains_key(&v) {
            return None;
        }

        let key = self
            .edges
            .iter()
            .filter(|e| (e.u == u && e.v == v) || (e.u == v && e.v == u))
            .count() as u32;

        let index = self.edges.len();
        self.edges.push(Edge {
            u,
            v,
            key,
            name,
            geometry,
        });
        self.adjacency.entry(u).or_default().push(index);
        if v != u {
            self.adjacency.entry(v).or_default().push(index);
        }

        Some(key)
    }

    pub fn node(&self, id: NodeId) -> Option<&GraphNode> {
        self.nodes.get(&id)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &GraphNode> {
        self.nodes.values()
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn edge(&self, index: usize) -> Option<&Edge> {
        self.edges.get(index)
    }

    /// Indices of edges incident to a node, in insertion order.
    pub fn incident_edges(&self, id: NodeId) -> &[usize] {
        self.adjacency.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_coordinates() {
        let p = GeoPoint::parse("40.7217267, -73.9870392").unwrap();
        assert_eq!(p.lat, 40.7217267);
        assert_eq!(p.lon, -73.9870392);

        let p = GeoPoint::parse("40.5,-73.9").unwrap();
        assert_eq!(p.lat, 40.5);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(GeoPoint::parse("forty, -73").is_err());
        assert!(GeoPoint::parse("40.5").is_err());
        assert!(GeoPoint::parse("40.5, -73.9, 12").is_err());
        assert!(GeoPoint::parse("").is_err());
    }

    #[test]
    fn test_street_name_from_tag() {
        assert_eq!(
            StreetName::from_tag("Main Street"),
            Some(StreetName::Single("Main Street".to_string()))
        );
        assert_eq!(
            StreetName::from_tag("Broadway;NY 25"),
            Some(StreetName::Aliases(vec![
                "Broadway".to_string(),
                "NY 25".to_string()
            ]))
        );
        assert_eq!(StreetName::from_tag("  "), None);
    }

    #[test]
    fn test_alias_first_is_canonical() {
        let name = StreetName::from_tag("Broadway;NY 25").unwrap();
        assert_eq!(name.canonical(), "Broadway");
    }

    #[test]
    fn test_parallel_edges_get_distinct_keys() {
        let mut g = RoadGraph::new();
        g.add_node(1, GeoPoint::new(0.0, 0.0));
        g.add_node(2, GeoPoint::new(0.0, 1.0));

        assert_eq!(g.add_edge(1, 2, None), Some(0));
        assert_eq!(g.add_edge(2, 1, None), Some(1));
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn test_edge_to_missing_node_is_dropped() {
        let mut g = RoadGraph::new();
        g.add_node(1, GeoPoint::new(0.0, 0.0));
        assert_eq!(g.add_edge(1, 99, None), None);
        assert!(g.is_empty());
    }

    #[test]
    fn test_incident_edges_keep_insertion_order() {
        let mut g = RoadGraph::new();
        for id in 1..=4 {
            g.add_node(id, GeoPoint::new(0.0, id as f64));
        }
        g.add_edge(1, 2, None);
        g.add_edge(1, 3, None);
        g.add_edge(1, 4, None);

        assert_eq!(g.incident_edges(1), &[0, 1, 2]);
        assert_eq!(g.incident_edges(4), &[2]);
        assert!(g.incident_edges(99).is_empty());
    }
}
