//! Distance helpers for resolution.

use geo::{Distance, Haversine};
use geo_types::Point;

use crate::models::GeoPoint;

/// Haversine distance between two points, in meters.
pub fn haversine_m(a: GeoPoint, b: GeoPoint) -> f64 {
    Haversine.distance(Point::new(a.lon, a.lat), Point::new(b.lon, b.lat))
}

/// Equirectangular projection centered on the query point, mapping WGS84
/// degrees to planar meters.
///
/// Segment distances are computed in this plane. The approximation is valid
/// at the scale the graph is fetched at (a few hundred meters around the
/// query point); it is not usable for region-scale geometry.
#[derive(Debug, Clone, Copy)]
pub struct LocalProjection {
    origin: GeoPoint,
    cos_lat: f64,
}

const EARTH_RADIUS_M: f64 = 6_371_000.0;

impl LocalProjection {
    pub fn centered_on(origin: GeoPoint) -> Self {
        Self {
            origin,
            cos_lat: origin.lat.to_radians().cos(),
        }
    }

    /// Project a point to planar `[x, y]` meters relative to the origin.
    pub fn project(&self, p: GeoPoint) -> [f64; 2] {
        let x = (p.lon - self.origin.lon).to_radians() * self.cos_lat * EARTH_RADIUS_M;
        let y = (p.lat - self.origin.lat).to_radians() * EARTH_RADIUS_M;
        [x, y]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_haversine_known_distance() {
        // Manhattan to downtown LA is roughly 3,940 km.
        let nyc = GeoPoint::new(40.7128, -74.0060);
        let la = GeoPoint::new(34.0522, -118.2437);
        let d = haversine_m(nyc, la);
        assert!((d - 3_936_000.0).abs() < 50_000.0);
    }

    #[test]
    fn test_haversine_zero_for_same_point() {
        let p = GeoPoint::new(40.7217267, -73.9870392);
        assert!(haversine_m(p, p) < 1e-6);
    }

    #[test]
    fn test_projection_matches_haversine_at_block_scale() {
        let origin = GeoPoint::new(40.7217, -73.9870);
        let proj = LocalProjection::centered_on(origin);

        // A point ~200 m north-east.
        let other = GeoPoint::new(40.7230, -73.9850);
        let [x, y] = proj.project(other);
        let planar = (x * x + y * y).sqrt();
        let geodesic = haversine_m(origin, other);

        // Within a meter at this scale.
        assert!((planar - geodesic).abs() < 1.0, "planar {planar} vs geodesic {geodesic}");
    }

    #[test]
    fn test_projection_origin_is_zero() {
        let origin = GeoPoint::new(40.0, -73.0);
        let proj = LocalProjection::centered_on(origin);
        let [x, y] = proj.project(origin);
        assert_eq!([x, y], [0.0, 0.0]);
    }
}
