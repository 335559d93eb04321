//! Road-network fetch and graph assembly.
//!
//! Overpass returns raw ways; the graph wants one edge per street segment
//! between intersections. Ways are split at every node shared with another
//! way, interior shape points are kept as edge geometry, and `name` tags
//! become (possibly aliased) street names.

use hashbrown::HashMap;
use tracing::{info, warn};

use super::client::{OverpassClient, OverpassElement, OverpassResponse};
use crate::error::LookupError;
use crate::models::{GeoPoint, NetworkKind, RoadGraph, StreetName};

/// Highway classes excluded from the drivable profile.
const NON_DRIVABLE: &str = "abandoned|bridleway|bus_guideway|construction|corridor|cycleway|\
                            elevator|escalator|footway|path|pedestrian|planned|platform|proposed|\
                            raceway|steps|track";

/// Fetch the road network around a point and assemble it into a graph.
///
/// Fails with `ProviderUnavailable` on transport or service errors, and
/// with `EmptyGraph` when the provider answered but no usable street exists
/// in the region. The two are distinct: only the former is a retryable
/// infrastructure problem.
pub async fn fetch_graph(
    client: &OverpassClient,
    center: GeoPoint,
    radius_m: f64,
    kind: NetworkKind,
) -> Result<RoadGraph, LookupError> {
    let query = network_query(center, radius_m, kind);

    let response = client
        .run_query(&query)
        .await
        .map_err(|e| LookupError::provider(center.lat, center.lon, e.to_string()))?;

    let graph = build_graph(response);
    info!(
        "road network near ({}, {}): {} nodes, {} edges",
        center.lat,
        center.lon,
        graph.node_count(),
        graph.edge_count()
    );

    if graph.is_empty() {
        return Err(LookupError::EmptyGraph {
            lat: center.lat,
            lng: center.lon,
        });
    }

    Ok(graph)
}

fn network_query(center: GeoPoint, radius_m: f64, kind: NetworkKind) -> String {
    let way_filter = match kind {
        NetworkKind::Drivable => format!(
            "[\"highway\"][\"highway\"!~\"{NON_DRIVABLE}\"][\"area\"!~\"yes\"]"
        ),
        NetworkKind::All => "[\"highway\"]".to_string(),
    };

    format!(
        "[out:json][timeout:25];way(around:{},{},{}){};(._;>;);out body;",
        radius_m, center.lat, center.lon, way_filter
    )
}

/// Assemble a multigraph from raw Overpass elements.
///
/// Intersection nodes are those referenced by more than one way position
/// (or way endpoints); each way is split there, and every piece becomes one
/// edge carrying its polyline. Ways referencing nodes absent from the
/// response are dropped with a warning rather than producing a torn edge.
fn build_graph(response: OverpassResponse) -> RoadGraph {
    let mut coords: HashMap<i64, GeoPoint> = HashMap::new();
    let mut ways: Vec<(Vec<i64>, Option<StreetName>)> = Vec::new();

    for element in response.elements {
        match element.kind.as_str() {
            "node" => {
                if let (Some(lat), Some(lon)) = (element.lat, element.lon) {
                    coords.insert(element.id, GeoPoint::new(lat, lon));
                }
            }
            "way" => {
                if element.nodes.len() < 2 {
                    continue;
                }
                let name = element.tags.get("name").and_then(|v| StreetName::from_tag(v));
                ways.push((element.nodes, name));
            }
            _ => {}
        }
    }

    // Drop ways with missing node coordinates before counting usage, so a
    // truncated response cannot manufacture phantom intersections.
    ways.retain(|(nodes, _)| {
        let complete = nodes.iter().all(|id| coords.contains_key(id));
        if !complete {
            warn!("dropping way with unresolved node references");
        }
        complete
    });

    let mut usage: HashMap<i64, u32> = HashMap::new();
    for (nodes, _) in &ways {
        for id in nodes {
            *usage.entry(*id).or_default() += 1;
        }
    }

    let mut graph = RoadGraph::new();

    for (nodes, name) in &ways {
        let last = nodes.len() - 1;
        let mut start = 0;
        let mut geometry = vec![coords[&nodes[0]]];

        for (pos, id) in nodes.iter().enumerate().skip(1) {
            geometry.push(coords[id]);

            let splits = pos == last || usage[id] > 1;
            if !splits {
                continue;
            }

            let (u, v) = (nodes[start], *id);
            graph.add_node(u, coords[&u]);
            graph.add_node(v, coords[&v]);
            graph.add_edge_with_geometry(u, v, name.clone(), std::mem::take(&mut geometry));

            start = pos;
            geometry = vec![coords[id]];
        }
    }

    graph
}
