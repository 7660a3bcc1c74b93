//! Location persistence seam
//!
//! The store owns persistence mechanics; callers only see range queries and
//! a keyed upsert. Records are keyed by normalized name, so two concurrent
//! resolutions of the same name converge on a single record.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;

use crate::Result;
use crate::models::{BoundingBox, Location};

/// Persistence-agnostic lookup of location records.
#[async_trait]
pub trait LocationStore: Send + Sync {
    /// Inclusive range filter on stored latitude/longitude.
    async fn range_query(&self, bounds: &BoundingBox) -> Result<Vec<Location>>;

    /// Look up a location by its normalized name.
    async fn find(&self, normalized_name: &str) -> Result<Option<Location>>;

    /// Insert or replace the record keyed by the location's normalized name.
    async fn upsert(&self, location: Location) -> Result<Location>;

    /// All stored locations, used by the degraded search fallback.
    async fn all(&self) -> Result<Vec<Location>>;
}

/// In-memory location store
#[derive(Default)]
pub struct MemoryStore {
    records: Mutex<HashMap<String, Location>>,
}

impl MemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a batch of locations
    pub async fn seed(&self, locations: impl IntoIterator<Item = Location> + Send) -> Result<()> {
        for location in locations {
            self.upsert(location).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl LocationStore for MemoryStore {
    async fn range_query(&self, bounds: &BoundingBox) -> Result<Vec<Location>> {
        let records = self.records.lock().await;
        let mut matches: Vec<Location> = records
            .values()
            .filter(|location| bounds.contains(location.point))
            .cloned()
            .collect();
        // HashMap iteration order is arbitrary; keep query output deterministic
        matches.sort_by(|a, b| a.name.cmp(&b.name));
        debug!(
            "Range query matched {} of {} locations",
            matches.len(),
            records.len()
        );
        Ok(matches)
    }

    async fn find(&self, normalized_name: &str) -> Result<Option<Location>> {
        let records = self.records.lock().await;
        Ok(records.get(normalized_name).cloned())
    }

    async fn upsert(&self, location: Location) -> Result<Location> {
        let mut records = self.records.lock().await;
        records.insert(location.normalized_name(), location.clone());
        Ok(location)
    }

    async fn all(&self) -> Result<Vec<Location>> {
        let records = self.records.lock().await;
        let mut locations: Vec<Location> = records.values().cloned().collect();
        locations.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(locations)
    }
}
