//! Location Resolution Module
//!
//! Resolves free-text place names into stored `Location` records:
//! an existing record is reused, otherwise the name is geocoded and
//! stored on first use.

use std::sync::Arc;

use tracing::{debug, info};

use crate::Result;
use crate::geocode::Geocoder;
use crate::models::Location;
use crate::store::LocationStore;

/// Service for resolving place names to stored locations
pub struct LocationResolver {
    geocoder: Arc<dyn Geocoder>,
    store: Arc<dyn LocationStore>,
}

impl LocationResolver {
    /// Create a resolver over a geocoder and a store
    pub fn new(geocoder: Arc<dyn Geocoder>, store: Arc<dyn LocationStore>) -> Self {
        Self { geocoder, store }
    }

    /// Return the stored location for `name`, geocoding and storing it on
    /// first use. Lookup is case-insensitive on the normalized name.
    ///
    /// A failed geocode leaves no partial record behind.
    pub async fn find_or_create(&self, name: &str) -> Result<Location> {
        let key = Location::normalize(name);

        if let Some(existing) = self.store.find(&key).await? {
            debug!("Found existing location for {name:?}");
            return Ok(existing);
        }

        let point = self.geocoder.geocode(name).await?;
        let location = self.store.upsert(Location::new(key, point)).await?;
        info!(
            "Created location {} at {}",
            location.name,
            location.point.format_coordinates()
        );
        Ok(location)
    }
}
