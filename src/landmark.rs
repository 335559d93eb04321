//! Landmark lookup: the nearest named point of interest.
//!
//! Advisory and best-effort. A provider failure here never fails the
//! street description; it degrades to `Landmark::Unknown`.

use tracing::{debug, warn};

use crate::models::{GeoPoint, Landmark};
use crate::overpass::{fetch_pois, OverpassClient, Poi, PoiKind};

/// Pick a landmark name from POI candidates.
///
/// Precedence is by geometry kind (point, then way, then relation), keeping
/// provider order within each kind. Candidates are scanned in that order
/// until one has a non-empty name; only when none do is the result
/// `Unknown`.
pub fn pick_landmark(pois: &[Poi]) -> Landmark {
    for kind in PoiKind::all() {
        for poi in pois.iter().filter(|p| p.kind == kind) {
            if let Some(name) = &poi.name {
                debug!("landmark candidate ({kind}): {name}");
                return Landmark::Named(name.clone());
            }
        }
    }
    Landmark::Unknown
}

/// Query the POI provider and pick a landmark, failing closed.
pub async fn find_landmark(
    client: &OverpassClient,
    center: GeoPoint,
    radius_m: f64,
    tag_filter: &str,
) -> Landmark {
    match fetch_pois(client, center, radius_m, tag_filter).await {
        Ok(pois) => pick_landmark(&pois),
        Err(e) => {
            warn!(
                "landmark lookup near ({}, {}) failed, continuing without: {e:#}",
                center.lat, center.lon
            );
            Landmark::Unknown
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poi(kind: PoiKind, name: Option<&str>) -> Poi {
        Poi {
            kind,
            name: name.map(String::from),
        }
    }

    #[test]
    fn test_point_beats_way_beats_relation() {
        let pois = vec![
            poi(PoiKind::Relation, Some("Community Board 3")),
            poi(PoiKind::Way, Some("PS 140")),
            poi(PoiKind::Node, Some("Ludlow Coffee")),
        ];
        assert_eq!(pick_landmark(&pois), Landmark::Named("Ludlow Coffee".into()));
    }

    #[test]
    fn test_unnamed_candidate_falls_through() {
        // First node has tags but no display name; the scan continues
        // rather than giving up.
        let pois = vec![
            poi(PoiKind::Node, None),
            poi(PoiKind::Node, Some("Ludlow Coffee")),
        ];
        assert_eq!(pick_landmark(&pois), Landmark::Named("Ludlow Coffee".into()));
    }

    #[test]
    fn test_falls_back_across_kinds() {
        let pois = vec![
            poi(PoiKind::Node, None),
            poi(PoiKind::Way, Some("PS 140")),
        ];
        assert_eq!(pick_landmark(&pois), Landmark::Named("PS 140".into()));
    }

    #[test]
    fn test_no_named_candidates_is_unknown() {
        assert_eq!(pick_landmark(&[]), Landmark::Unknown);
        let pois = vec![poi(PoiKind::Node, None), poi(PoiKind::Relation, None)];
        assert_eq!(pick_landmark(&pois), Landmark::Unknown);
    }

    #[tokio::test]
    async fn test_provider_failure_degrades_to_unknown() {
        // Unroutable endpoint: the fetch errors immediately and the lookup
        // falls back instead of surfacing the failure.
        let client = OverpassClient::new(
            "http://127.0.0.1:1",
            std::time::Duration::from_millis(250),
        )
        .unwrap();

        let landmark = find_landmark(&client, GeoPoint::new(40.72, -73.98), 120.0, "amenity").await;
        assert_eq!(landmark, Landmark::Unknown);
    }

    #[tokio::test]
    async fn test_invalid_filter_degrades_to_unknown() {
        let client = OverpassClient::new(
            "http://127.0.0.1:1",
            std::time::Duration::from_millis(250),
        )
        .unwrap();

        let landmark = find_landmark(&client, GeoPoint::new(40.72, -73.98), 120.0, "a\"]").await;
        assert_eq!(landmark, Landmark::Unknown);
    }

    #[test]
    fn test_provider_order_within_kind() {
        let pois = vec![
            poi(PoiKind::Node, Some("First Cafe")),
            poi(PoiKind::Node, Some("Second Cafe")),
        ];
        assert_eq!(pick_landmark(&pois), Landmark::Named("First Cafe".into()));
    }
}
