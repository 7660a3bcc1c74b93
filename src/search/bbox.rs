//! Bounding-box pre-filter
//!
//! Projects an origin point along the four compass bearings to build a
//! lat/long rectangle for a cheap range query ahead of the exact distance
//! filter.

use geo::{Destination, Geodesic, Point as GeoPoint};

use crate::Result;
use crate::error::GeoSearchError;
use crate::models::{BoundingBox, Point};

// Compass bearings in degrees
const NORTH: f64 = 0.0;
const EAST: f64 = 90.0;
const SOUTH: f64 = 180.0;
const WEST: f64 = 270.0;

/// Translate `origin` along `bearing` by `distance_km` on the WGS84
/// ellipsoid (geodesic direct problem).
fn translate(origin: Point, bearing: f64, distance_km: f64) -> GeoPoint<f64> {
    let start = GeoPoint::new(origin.longitude(), origin.latitude());
    Geodesic::destination(start, bearing, distance_km * 1000.0)
}

/// Axis-aligned lat/long rectangle around `center` at `radius_km`.
///
/// The edges come from geodesic projections due north, east, south and west
/// of the center, so the box fully covers the search circle away from the
/// domain edges. The approximation is only valid while the box stays clear
/// of the ±180° meridian and the poles; a box that would cross either is
/// rejected with [`GeoSearchError::InvalidBoundingBox`] rather than wrapped.
pub fn bounding_box(center: Point, radius_km: f64) -> Result<BoundingBox> {
    if radius_km <= 0.0 || !radius_km.is_finite() {
        return Err(GeoSearchError::InvalidRadius { radius_km });
    }

    let max_lat = translate(center, NORTH, radius_km).y();
    let min_lat = translate(center, SOUTH, radius_km).y();
    let max_long = translate(center, EAST, radius_km).x();
    let min_long = translate(center, WEST, radius_km).x();

    BoundingBox::new(min_lat, max_lat, min_long, max_long)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_box_surrounds_center() {
        let center = Point::new(51.5074, -0.1278).unwrap();
        let bounds = bounding_box(center, 10.0).unwrap();

        assert!(bounds.contains(center));
        assert!(bounds.min_lat < center.latitude());
        assert!(bounds.max_lat > center.latitude());
        assert!(bounds.min_long < center.longitude());
        assert!(bounds.max_long > center.longitude());
    }

    #[test]
    fn test_box_size_matches_radius() {
        // 1 degree of latitude is ~111 km, so a 10 km radius spans ~0.18
        // degrees of latitude
        let center = Point::new(51.5074, -0.1278).unwrap();
        let bounds = bounding_box(center, 10.0).unwrap();

        assert_relative_eq!(bounds.max_lat - bounds.min_lat, 0.18, epsilon = 0.01);
        // Longitude degrees shrink with cos(latitude)
        assert!(bounds.max_long - bounds.min_long > 0.18);
    }

    #[test]
    fn test_rejects_non_positive_radius() {
        let center = Point::new(51.5074, -0.1278).unwrap();

        assert!(matches!(
            bounding_box(center, 0.0),
            Err(GeoSearchError::InvalidRadius { .. })
        ));
        assert!(matches!(
            bounding_box(center, -5.0),
            Err(GeoSearchError::InvalidRadius { .. })
        ));
        assert!(matches!(
            bounding_box(center, f64::NAN),
            Err(GeoSearchError::InvalidRadius { .. })
        ));
    }

    #[test]
    fn test_rejects_antimeridian_crossing() {
        let center = Point::new(0.0, 179.95).unwrap();
        let result = bounding_box(center, 25.0);

        assert!(matches!(
            result,
            Err(GeoSearchError::InvalidBoundingBox { .. })
        ));
    }
}
