//! Output formatting: the description sentence and the map link.

use crate::models::{GeoPoint, Landmark, ResolvedEdge};

/// Compose the final description.
///
/// Always appends exactly one landmark qualifier, so output shape never
/// depends on which lookup path produced the landmark.
pub fn describe(resolved: &ResolvedEdge, landmark: &Landmark) -> String {
    let mut text = format!(
        "{} between {} and {}",
        resolved.main_street, resolved.from_street, resolved.to_street
    );

    match landmark {
        Landmark::Named(name) => {
            text.push_str(". Nearest landmark: ");
            text.push_str(name);
        }
        Landmark::Unknown => text.push_str(". No recognizable landmarks found nearby."),
    }

    text
}

/// Google Maps search link for a point.
///
/// The query-string shape is a third-party contract; do not reformat it.
pub fn map_link(point: GeoPoint) -> String {
    format!(
        "https://www.google.com/maps/search/?api=1&query={},{}",
        point.lat, point.lon
    )
}
