//! Geocoding Client Module
//!
//! Resolves free-text place names to coordinates through the Open-Meteo
//! geocoding API. Transient failures are retried with exponential backoff;
//! resolved names are cached in memory so repeated lookups of the same
//! place do not hit the network again.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{RetryTransientMiddleware, policies::ExponentialBackoff};
use tokio::sync::RwLock;
use tracing::debug;

use crate::Result;
use crate::config::GeocoderConfig;
use crate::error::GeoSearchError;
use crate::models::{Location, Point};

/// Resolves a place name to a coordinate.
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Resolve `name` to a point.
    ///
    /// Fails with [`GeoSearchError::GeocodeUnavailable`] when the service
    /// cannot be reached and [`GeoSearchError::NotFound`] when it has no
    /// match for the name.
    async fn geocode(&self, name: &str) -> Result<Point>;
}

/// Geocoding client for the Open-Meteo geocoding API
pub struct OpenMeteoGeocoder {
    client: ClientWithMiddleware,
    base_url: String,
    api_key: Option<String>,
    cache: RwLock<HashMap<String, Point>>,
}

impl OpenMeteoGeocoder {
    /// Create a new client from configuration
    pub fn new(config: &GeocoderConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(u64::from(config.timeout_seconds)))
            .user_agent(concat!("geosearch/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| GeoSearchError::config(format!("Failed to create HTTP client: {e}")))?;

        let retry_policy = ExponentialBackoff::builder().build_with_max_retries(config.max_retries);
        let client = ClientBuilder::new(client)
            .with(RetryTransientMiddleware::new_with_policy(retry_policy))
            .build();

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            cache: RwLock::new(HashMap::new()),
        })
    }
}

#[async_trait]
impl Geocoder for OpenMeteoGeocoder {
    async fn geocode(&self, name: &str) -> Result<Point> {
        let cache_key = Location::normalize(name);

        if let Some(point) = self.cache.read().await.get(&cache_key) {
            debug!("Geocode cache hit for {name:?}");
            return Ok(*point);
        }

        let mut url = format!(
            "{}/search?name={}&count=1&language=en&format=json",
            self.base_url,
            urlencoding::encode(name)
        );
        if let Some(api_key) = &self.api_key {
            url.push_str("&apikey=");
            url.push_str(api_key);
        }

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| GeoSearchError::unavailable(format!("Geocoding request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(GeoSearchError::unavailable(format!(
                "Geocoding service returned {}",
                response.status()
            )));
        }

        let payload: openmeteo::GeocodingResponse = response.json().await.map_err(|e| {
            GeoSearchError::unavailable(format!("Failed to parse geocoding response: {e}"))
        })?;

        let Some(hit) = payload.results.unwrap_or_default().into_iter().next() else {
            return Err(GeoSearchError::not_found(name));
        };

        // Defensive: a successful geocode should never produce an
        // out-of-range coordinate.
        let point = Point::new(hit.latitude, hit.longitude)?;
        debug!(
            "Geocoded {:?} to {} ({})",
            name,
            hit.name,
            point.format_coordinates()
        );

        self.cache.write().await.insert(cache_key, point);
        Ok(point)
    }
}

/// `OpenMeteo` geocoding API response structures
mod openmeteo {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    pub struct GeocodingResponse {
        pub results: Option<Vec<GeocodingResult>>,
    }

    #[derive(Debug, Deserialize)]
    pub struct GeocodingResult {
        pub name: String,
        pub latitude: f64,
        pub longitude: f64,
    }
}
