//! Nearest-edge resolution and cross-street naming.

use tracing::debug;

use super::geometry::{haversine_m, LocalProjection};
use super::index::EdgeIndex;
use crate::error::LookupError;
use crate::models::{GeoPoint, NodeId, ResolvedEdge, RoadGraph, UNKNOWN};

/// Node closest to the query point by haversine distance.
///
/// Ties break on node id so the answer never depends on map iteration
/// order. `None` only for a graph with no nodes.
pub fn nearest_node(graph: &RoadGraph, point: GeoPoint) -> Option<NodeId> {
    graph
        .nodes()
        .map(|n| (haversine_m(point, n.point), n.id))
        .min_by(|a, b| a.0.total_cmp(&b.0).then_with(|| a.1.cmp(&b.1)))
        .map(|(_, id)| id)
}

/// Resolve the street segment nearest to `point` and name the streets that
/// bound it.
///
/// Selection uses true point-to-segment distance over every loaded edge,
/// computed in a planar frame centered on the query point. Cross streets at
/// each endpoint are collected in discovery order, deduplicated, and
/// stripped of the segment's own name; the from/to pair is then chosen so
/// that both sides differ from each other and from the main street, falling
/// back to `"Unknown"` where no distinct name exists.
pub fn resolve(graph: &RoadGraph, point: GeoPoint) -> Result<ResolvedEdge, LookupError> {
    if graph.is_empty() {
        return Err(LookupError::EmptyGraph {
            lat: point.lat,
            lng: point.lon,
        });
    }

    if let Some(anchor) = nearest_node(graph, point) {
        debug!("nearest node to ({}, {}): {}", point.lat, point.lon, anchor);
    }

    let projection = LocalProjection::centered_on(point);
    let index = EdgeIndex::build(graph, &projection);

    // A non-empty graph always yields a nearest segment.
    let edge_index = index
        .nearest(projection.project(point))
        .ok_or(LookupError::EmptyGraph {
            lat: point.lat,
            lng: point.lon,
        })?;
    let edge = &graph.edges()[edge_index];

    let main_name = edge.name.as_ref().map(|n| n.canonical().to_string());
    let main_street = main_name.clone().unwrap_or_else(|| UNKNOWN.to_string());

    let at_u = cross_streets(graph, edge_index, edge.u, main_name.as_deref());
    let at_v = cross_streets(graph, edge_index, edge.v, main_name.as_deref());
    debug!(
        "edge ({}, {}, key {}): {} cross streets at u, {} at v",
        edge.u,
        edge.v,
        edge.key,
        at_u.len(),
        at_v.len()
    );

    let (from_street, to_street) = pick_bounding_streets(&at_u, &at_v);

    Ok(ResolvedEdge {
        u: edge.u,
        v: edge.v,
        key: edge.key,
        main_street,
        from_street,
        to_street,
        cross_streets_at_u: at_u,
        cross_streets_at_v: at_v,
    })
}

/// Named streets crossing at one endpoint of the selected edge.
///
/// Walks the incident edges in insertion order, skipping the selected edge
/// itself, unnamed segments, anything matching the main street's name, and
/// names already collected. The sequential seen-scan keeps discovery order,
/// which keeps repeated resolutions identical.
fn cross_streets(
    graph: &RoadGraph,
    selected: usize,
    node: NodeId,
    main_name: Option<&str>,
) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();

    for &idx in graph.incident_edges(node) {
        if idx == selected {
            continue;
        }
        let Some(edge) = graph.edge(idx) else {
            continue;
        };
        let Some(name) = edge.name.as_ref() else {
            continue;
        };
        let name = name.canonical();
        if main_name == Some(name) {
            continue;
        }
        if names.iter().any(|seen| seen == name) {
            continue;
        }
        names.push(name.to_string());
    }

    names
}

/// Choose the from/to pair from the per-endpoint cross-street lists.
///
/// When both endpoints lead with the same name (a straight segment whose
/// cross road continues through), the `u` side advances to its next
/// distinct name if it has one; the `v` side then takes its first name not
/// equal to the chosen `from`. A side with no usable name is `"Unknown"`.
fn pick_bounding_streets(at_u: &[String], at_v: &[String]) -> (String, String) {
    let from = match (at_u.first(), at_v.first()) {
        (Some(u0), Some(v0)) if u0 == v0 => at_u.get(1).unwrap_or(u0),
        (Some(u0), _) => u0,
        (None, _) => {
            let to = at_v.first().cloned().unwrap_or_else(|| UNKNOWN.to_string());
            return (UNKNOWN.to_string(), to);
        }
    };

    let to = at_v
        .iter()
        .find(|name| *name != from)
        .cloned()
        .unwrap_or_else(|| UNKNOWN.to_string());

    (from.clone(), to)
}
