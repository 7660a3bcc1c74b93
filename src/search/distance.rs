//! Exact geodesic distance filter
//!
//! Uses the same WGS84 geodesic model as the bounding-box projection so the
//! coarse and fine filter stages agree.

use geo::{Distance, Geodesic, Point as GeoPoint};

use crate::models::{Location, Point};

/// Geodesic distance between two points in kilometers
#[must_use]
pub fn distance_km(a: Point, b: Point) -> f64 {
    let from = GeoPoint::new(a.longitude(), a.latitude());
    let to = GeoPoint::new(b.longitude(), b.latitude());
    Geodesic::distance(from, to) / 1000.0
}

/// Keep the candidates within `radius_km` of `origin`.
///
/// Stable: the output preserves the input order, nothing is re-sorted.
#[must_use]
pub fn filter_within_radius(
    origin: Point,
    candidates: Vec<Location>,
    radius_km: f64,
) -> Vec<Location> {
    candidates
        .into_iter()
        .filter(|candidate| distance_km(origin, candidate.point) <= radius_km)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    fn point(latitude: f64, longitude: f64) -> Point {
        Point::new(latitude, longitude).unwrap()
    }

    #[rstest]
    // London to Paris, ~344 km
    #[case(51.5074, -0.1278, 48.8566, 2.3522, 343.9)]
    // London to Westminster-ish, under a kilometer
    #[case(51.5074, -0.1278, 51.5, -0.12, 0.98)]
    fn test_known_distances(
        #[case] lat1: f64,
        #[case] lon1: f64,
        #[case] lat2: f64,
        #[case] lon2: f64,
        #[case] expected_km: f64,
    ) {
        let distance = distance_km(point(lat1, lon1), point(lat2, lon2));
        assert_relative_eq!(distance, expected_km, max_relative = 0.02);
    }

    #[test]
    fn test_zero_distance_to_self() {
        let origin = point(51.5074, -0.1278);
        assert_relative_eq!(distance_km(origin, origin), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_filter_keeps_input_order() {
        let origin = point(51.5074, -0.1278);
        let candidates = vec![
            Location::new("B NEAR", point(51.51, -0.13)),
            Location::new("FAR", point(52.0, -0.1)),
            Location::new("A NEAR", point(51.5, -0.12)),
        ];

        let kept = filter_within_radius(origin, candidates, 10.0);

        let names: Vec<&str> = kept.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["B NEAR", "A NEAR"]);
    }

    #[test]
    fn test_filter_never_grows_the_candidate_set() {
        let origin = point(51.5074, -0.1278);
        let candidates = vec![
            Location::new("ONE", point(51.5, -0.12)),
            Location::new("TWO", point(52.0, -0.1)),
        ];
        let input_len = candidates.len();

        let kept = filter_within_radius(origin, candidates, 10.0);

        assert!(kept.len() <= input_len);
    }

    #[test]
    fn test_candidate_beyond_radius_excluded() {
        let origin = point(51.5074, -0.1278);
        // ~55 km north of London
        let candidates = vec![Location::new("ROYSTON", point(52.0, -0.1))];

        let kept = filter_within_radius(origin, candidates, 10.0);

        assert!(kept.is_empty());
    }
}
