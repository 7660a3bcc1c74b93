//! Coordinate value type

use serde::{Deserialize, Serialize};

use crate::error::GeoSearchError;

/// An immutable latitude/longitude pair in decimal degrees.
///
/// Latitude is restricted to [-90, 90] and longitude to [-180, 180];
/// construction and deserialization both reject anything outside.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPoint")]
pub struct Point {
    latitude: f64,
    longitude: f64,
}

#[derive(Deserialize)]
struct RawPoint {
    latitude: f64,
    longitude: f64,
}

impl TryFrom<RawPoint> for Point {
    type Error = GeoSearchError;

    fn try_from(raw: RawPoint) -> Result<Self, Self::Error> {
        Point::new(raw.latitude, raw.longitude)
    }
}

impl Point {
    /// Create a validated point
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, GeoSearchError> {
        // NaN fails both range checks
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(GeoSearchError::InvalidCoordinate {
                latitude,
                longitude,
            });
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Latitude in decimal degrees
    #[must_use]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in decimal degrees
    #[must_use]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Format as a coordinates string
    #[must_use]
    pub fn format_coordinates(&self) -> String {
        format!("{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_valid_point() {
        let point = Point::new(51.5074, -0.1278).unwrap();
        assert_eq!(point.latitude(), 51.5074);
        assert_eq!(point.longitude(), -0.1278);
        assert_eq!(point.format_coordinates(), "51.5074, -0.1278");
    }

    #[rstest]
    #[case(90.1, 0.0)]
    #[case(-90.1, 0.0)]
    #[case(0.0, 180.1)]
    #[case(0.0, -180.1)]
    #[case(f64::NAN, 0.0)]
    fn test_out_of_range_rejected(#[case] latitude: f64, #[case] longitude: f64) {
        let result = Point::new(latitude, longitude);
        assert!(matches!(
            result,
            Err(GeoSearchError::InvalidCoordinate { .. })
        ));
    }

    #[test]
    fn test_range_edges_accepted() {
        assert!(Point::new(90.0, 180.0).is_ok());
        assert!(Point::new(-90.0, -180.0).is_ok());
    }

    #[test]
    fn test_deserialization_validates() {
        let ok: Result<Point, _> =
            serde_json::from_str(r#"{"latitude": 51.5, "longitude": -0.12}"#);
        assert!(ok.is_ok());

        let bad: Result<Point, _> =
            serde_json::from_str(r#"{"latitude": 123.0, "longitude": -0.12}"#);
        assert!(bad.is_err());
    }
}
