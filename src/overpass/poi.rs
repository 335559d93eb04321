//! Point-of-interest fetch.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::client::{OverpassClient, OverpassResponse};
use crate::models::GeoPoint;

/// Geometry kind of a POI result, in precedence order: a tagged point is a
/// better landmark than a building outline, which beats a composite
/// relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PoiKind {
    Node,
    Way,
    Relation,
}

impl PoiKind {
    pub fn all() -> [PoiKind; 3] {
        [PoiKind::Node, PoiKind::Way, PoiKind::Relation]
    }

    fn from_element_kind(kind: &str) -> Option<Self> {
        match kind {
            "node" => Some(PoiKind::Node),
            "way" => Some(PoiKind::Way),
            "relation" => Some(PoiKind::Relation),
            _ => None,
        }
    }
}

impl std::fmt::Display for PoiKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PoiKind::Node => write!(f, "node"),
            PoiKind::Way => write!(f, "way"),
            PoiKind::Relation => write!(f, "relation"),
        }
    }
}

/// One tagged point of interest, in provider-returned order.
#[derive(Debug, Clone)]
pub struct Poi {
    pub kind: PoiKind,
    pub name: Option<String>,
}

/// Fetch POIs carrying `tag_filter` within `radius_m` of the center.
pub async fn fetch_pois(
    client: &OverpassClient,
    center: GeoPoint,
    radius_m: f64,
    tag_filter: &str,
) -> Result<Vec<Poi>> {
    validate_tag_filter(tag_filter)?;
    let query = poi_query(center, radius_m, tag_filter);
    let response = client.run_query(&query).await?;
    Ok(collect_pois(response))
}

/// The filter is interpolated into OverpassQL, so it must stay a plain tag
/// key. Anything outside the tag-key alphabet is rejected rather than
/// escaped; a quote or bracket here is a configuration mistake, not a name.
fn validate_tag_filter(tag_filter: &str) -> Result<()> {
    let valid = !tag_filter.is_empty()
        && tag_filter
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == ':');
    if !valid {
        anyhow::bail!("invalid POI tag filter: {tag_filter:?}");
    }
    Ok(())
}

fn poi_query(center: GeoPoint, radius_m: f64, tag_filter: &str) -> String {
    let around = format!("(around:{},{},{})", radius_m, center.lat, center.lon);
    format!(
        "[out:json][timeout:25];(node{around}[\"{tag}\"];way{around}[\"{tag}\"];relation{around}[\"{tag}\"];);out center;",
        around = around,
        tag = tag_filter
    )
}

fn collect_pois(response: OverpassResponse) -> Vec<Poi> {
    response
        .elements
        .into_iter()
        .filter_map(|element| {
            let kind = PoiKind::from_element_kind(&element.kind)?;
            let name = element.tags.get("name").cloned().filter(|n| !n.is_empty());
            Some(Poi { kind, name })
        })
        .collect()
}
