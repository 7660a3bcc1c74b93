//! Axis-aligned lat/long rectangle

use serde::{Deserialize, Serialize};

use super::Point;
use crate::error::GeoSearchError;

/// A lat/long rectangle used as a cheap pre-filter before exact distance
/// computation.
///
/// Invariant: `min_lat <= max_lat` and `min_long <= max_long`, enforced at
/// construction. A box whose edges would wrap the ±180° meridian cannot be
/// represented and is rejected instead.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_long: f64,
    pub max_long: f64,
}

impl BoundingBox {
    /// Create a bounding box, enforcing the edge-ordering invariant
    pub fn new(
        min_lat: f64,
        max_lat: f64,
        min_long: f64,
        max_long: f64,
    ) -> Result<Self, GeoSearchError> {
        if min_lat > max_lat || min_long > max_long {
            return Err(GeoSearchError::InvalidBoundingBox {
                message: format!(
                    "edges out of order: lat [{min_lat}, {max_lat}], long [{min_long}, {max_long}]"
                ),
            });
        }
        Ok(Self {
            min_lat,
            max_lat,
            min_long,
            max_long,
        })
    }

    /// Inclusive containment check
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.latitude() >= self.min_lat
            && point.latitude() <= self.max_lat
            && point.longitude() >= self.min_long
            && point.longitude() <= self.max_long
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_inclusive() {
        let bounds = BoundingBox::new(51.0, 52.0, -1.0, 1.0).unwrap();

        assert!(bounds.contains(Point::new(51.5, 0.0).unwrap()));
        assert!(bounds.contains(Point::new(51.0, -1.0).unwrap()));
        assert!(bounds.contains(Point::new(52.0, 1.0).unwrap()));
        assert!(!bounds.contains(Point::new(52.1, 0.0).unwrap()));
        assert!(!bounds.contains(Point::new(51.5, 1.1).unwrap()));
    }

    #[test]
    fn test_out_of_order_edges_rejected() {
        let result = BoundingBox::new(52.0, 51.0, -1.0, 1.0);
        assert!(matches!(
            result,
            Err(GeoSearchError::InvalidBoundingBox { .. })
        ));

        let result = BoundingBox::new(51.0, 52.0, 1.0, -1.0);
        assert!(matches!(
            result,
            Err(GeoSearchError::InvalidBoundingBox { .. })
        ));
    }
}
