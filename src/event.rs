//! Event entities
//!
//! Events embed a [`Locatable`] capability instead of inheriting location
//! behavior, and an index selects and searches them.

use std::collections::HashSet;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::Result;
use crate::locatable::Locatable;
use crate::models::Location;
use crate::search::{NearbySearch, Precision, SearchResults};

/// Who an event is open to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Audience {
    Public,
    Private,
}

/// A published event with an optional place
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub title: String,
    /// Start date
    pub date_from: NaiveDate,
    /// End date, not required if the event is on a single day
    pub date_to: Option<NaiveDate>,
    pub time_from: Option<NaiveTime>,
    pub time_to: Option<NaiveTime>,
    pub audience: Audience,
    pub cost: String,
    pub signup_link: Option<String>,
    pub locatable: Locatable,
}

impl Event {
    /// Create a public, free event on a single day
    #[must_use]
    pub fn new(title: impl Into<String>, date_from: NaiveDate) -> Self {
        Self {
            title: title.into(),
            date_from,
            date_to: None,
            time_from: None,
            time_to: None,
            audience: Audience::Public,
            cost: "Free".to_string(),
            signup_link: None,
            locatable: Locatable::new(),
        }
    }

    /// Whether the event is running now or starts in the future
    #[must_use]
    pub fn is_current(&self, today: NaiveDate) -> bool {
        self.date_from >= today || self.date_to.is_some_and(|date_to| date_to >= today)
    }
}

/// Selects and orders events for an index listing
pub struct EventIndex;

impl EventIndex {
    /// Events that are running now or start in the future, ordered by
    /// start date
    #[must_use]
    pub fn upcoming<'a>(events: &'a [Event], today: NaiveDate) -> Vec<&'a Event> {
        let mut upcoming: Vec<&Event> = events
            .iter()
            .filter(|event| event.is_current(today))
            .collect();
        upcoming.sort_by_key(|event| event.date_from);
        upcoming
    }

    /// Events whose resolved location lies near the place named by `query`.
    ///
    /// On a degraded search (the query could not be geocoded) every located
    /// event is kept, mirroring the unfiltered fallback of the location
    /// search itself. Events without a resolved location never match.
    pub async fn search_nearby<'a>(
        events: &'a [Event],
        search: &NearbySearch,
        query: &str,
        radius_km: f64,
    ) -> Result<(Vec<&'a Event>, Precision)> {
        let SearchResults { matches, precision } = search.nearby(query, radius_km).await?;

        let nearby_names: HashSet<String> =
            matches.iter().map(Location::normalized_name).collect();

        let hits = events
            .iter()
            .filter(|event| {
                event
                    .locatable
                    .location()
                    .is_some_and(|location| nearby_names.contains(&location.normalized_name()))
            })
            .collect();

        Ok((hits, precision))
    }
}
