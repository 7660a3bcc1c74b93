//! Nearby location search
//!
//! Two-stage filter: a bounding-box range query against the store prunes
//! cheaply, then the exact geodesic distance check narrows the candidates
//! to the requested radius. Both stages use the same WGS84 geodesic model.

pub mod bbox;
pub mod distance;

pub use bbox::bounding_box;
pub use distance::{distance_km, filter_within_radius};

use std::sync::Arc;

use tracing::{info, warn};

use crate::Result;
use crate::error::GeocodeFailure;
use crate::geocode::Geocoder;
use crate::models::{Location, Point};
use crate::store::LocationStore;

/// How trustworthy a search result set is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precision {
    /// Candidates were narrowed to the requested radius
    Filtered,
    /// Geocoding the query failed; the full store contents were returned
    Unfiltered { reason: GeocodeFailure },
}

/// Result set of a nearby search
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResults {
    pub matches: Vec<Location>,
    pub precision: Precision,
}

/// Location search service combining geocoding with the two-stage filter
pub struct NearbySearch {
    geocoder: Arc<dyn Geocoder>,
    store: Arc<dyn LocationStore>,
}

impl NearbySearch {
    /// Create a search service over a geocoder and a store
    pub fn new(geocoder: Arc<dyn Geocoder>, store: Arc<dyn LocationStore>) -> Self {
        Self { geocoder, store }
    }

    /// Find stored locations within `radius_km` of the place named by
    /// `query`.
    ///
    /// When the query cannot be geocoded, the full store contents are
    /// returned marked [`Precision::Unfiltered`] — degraded rather than
    /// empty, and visibly so.
    pub async fn nearby(&self, query: &str, radius_km: f64) -> Result<SearchResults> {
        let origin = match self.geocoder.geocode(query).await {
            Ok(origin) => origin,
            Err(err) => {
                return match err.geocode_failure() {
                    Some(reason) => {
                        warn!("Geocoding {query:?} failed ({err}); returning unfiltered locations");
                        self.unfiltered(reason).await
                    }
                    None => Err(err),
                };
            }
        };

        self.nearby_point(origin, radius_km).await
    }

    /// Two-stage filter around an already-resolved origin
    pub async fn nearby_point(&self, origin: Point, radius_km: f64) -> Result<SearchResults> {
        let bounds = bounding_box(origin, radius_km)?;
        let candidates = self.store.range_query(&bounds).await?;
        let matches = filter_within_radius(origin, candidates, radius_km);

        info!(
            "Nearby search matched {} locations within {radius_km} km of {}",
            matches.len(),
            origin.format_coordinates()
        );

        Ok(SearchResults {
            matches,
            precision: Precision::Filtered,
        })
    }

    async fn unfiltered(&self, reason: GeocodeFailure) -> Result<SearchResults> {
        let matches = self.store.all().await?;
        Ok(SearchResults {
            matches,
            precision: Precision::Unfiltered { reason },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GeoSearchError;
    use crate::models::Point;
    use crate::store::MemoryStore;
    use async_trait::async_trait;

    struct StubGeocoder;

    #[async_trait]
    impl Geocoder for StubGeocoder {
        async fn geocode(&self, name: &str) -> Result<Point> {
            match Location::normalize(name).as_str() {
                "LONDON" => Point::new(51.5074, -0.1278),
                "OFFLINE" => Err(GeoSearchError::unavailable("service down")),
                _ => Err(GeoSearchError::not_found(name)),
            }
        }
    }

    async fn seeded_search() -> NearbySearch {
        let store = Arc::new(MemoryStore::new());
        store
            .seed([
                Location::new("WESTMINSTER", Point::new(51.5, -0.12).unwrap()),
                Location::new("ROYSTON", Point::new(52.0, -0.1).unwrap()),
            ])
            .await
            .unwrap();
        NearbySearch::new(Arc::new(StubGeocoder), store)
    }

    #[tokio::test]
    async fn nearby_narrows_to_radius() {
        let search = seeded_search().await;

        let results = search.nearby("London", 10.0).await.unwrap();

        assert_eq!(results.precision, Precision::Filtered);
        assert_eq!(results.matches.len(), 1);
        assert_eq!(results.matches[0].name, "WESTMINSTER");
    }

    #[tokio::test]
    async fn unknown_query_falls_back_to_unfiltered() {
        let search = seeded_search().await;

        let results = search.nearby("Atlantis", 10.0).await.unwrap();

        assert_eq!(
            results.precision,
            Precision::Unfiltered {
                reason: GeocodeFailure::NotFound
            }
        );
        assert_eq!(results.matches.len(), 2);
    }

    #[tokio::test]
    async fn unavailable_geocoder_falls_back_to_unfiltered() {
        let search = seeded_search().await;

        let results = search.nearby("offline", 10.0).await.unwrap();

        assert_eq!(
            results.precision,
            Precision::Unfiltered {
                reason: GeocodeFailure::Unavailable
            }
        );
        assert_eq!(results.matches.len(), 2);
    }

    #[tokio::test]
    async fn invalid_radius_is_an_error_not_a_fallback() {
        let search = seeded_search().await;

        let result = search.nearby("London", 0.0).await;

        assert!(matches!(result, Err(GeoSearchError::InvalidRadius { .. })));
    }
}
