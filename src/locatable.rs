//! Locatable capability
//!
//! A `Locatable` gives an entity an optional free-text place name that can
//! resolve to a stored location. It is a plain value embedded in entity
//! structs.
//!
//! Lifecycle: `Unset` (no name) -> `PendingResolve` (name set, no location)
//! -> `Resolved` (name and location set); clearing the name returns to
//! `Unset` and drops the location reference.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::Result;
use crate::error::GeocodeFailure;
use crate::location_resolver::LocationResolver;
use crate::models::Location;

/// Lifecycle state of a [`Locatable`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocatableState {
    /// No place name set
    Unset,
    /// A name is set but has not resolved to a location
    PendingResolve,
    /// Name and resolved location both present
    Resolved,
}

/// Outcome of [`Locatable::save_location`].
///
/// Geocoding failures do not raise an error; they are reported here so
/// callers can observe degraded resolution instead of it being invisible.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolutionStatus {
    /// The name resolved to this location
    Resolved(Location),
    /// Geocoding failed; the entity keeps its name but has no location
    Deferred(GeocodeFailure),
    /// No name was set; any previous location reference was cleared
    Unset,
}

/// An optional place name with its resolved location reference.
///
/// The location is a shared reference: many locatables may point at the
/// same stored record, and none of them owns it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Locatable {
    location_name: String,
    location: Option<Location>,
}

impl Locatable {
    /// Create an unset locatable
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a locatable with a pending place name
    #[must_use]
    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            location_name: name.into(),
            location: None,
        }
    }

    /// The free-text place name
    #[must_use]
    pub fn location_name(&self) -> &str {
        &self.location_name
    }

    /// The resolved location, if any
    #[must_use]
    pub fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }

    /// Set the place name.
    ///
    /// An empty name clears any resolved location; a name that no longer
    /// matches the resolved location drops the stale reference.
    pub fn set_location_name(&mut self, name: impl Into<String>) {
        self.location_name = name.into();
        if self.location_name.trim().is_empty() {
            self.location = None;
        } else if let Some(location) = &self.location {
            if location.normalized_name() != Location::normalize(&self.location_name) {
                self.location = None;
            }
        }
    }

    /// Current lifecycle state
    #[must_use]
    pub fn state(&self) -> LocatableState {
        if self.location_name.trim().is_empty() {
            LocatableState::Unset
        } else if self.location.is_some() {
            LocatableState::Resolved
        } else {
            LocatableState::PendingResolve
        }
    }

    /// Resolve the place name through `resolver` as part of saving the
    /// owning entity.
    ///
    /// Geocoding failures are swallowed and reported in the returned
    /// status: the entity stays usable without a location. Store failures
    /// are a different concern and do propagate.
    pub async fn save_location(&mut self, resolver: &LocationResolver) -> Result<ResolutionStatus> {
        if self.location_name.trim().is_empty() {
            self.location = None;
            return Ok(ResolutionStatus::Unset);
        }

        match resolver.find_or_create(&self.location_name).await {
            Ok(location) => {
                self.location = Some(location.clone());
                Ok(ResolutionStatus::Resolved(location))
            }
            Err(err) => match err.geocode_failure() {
                Some(reason) => {
                    warn!("Could not resolve location {:?}: {err}", self.location_name);
                    self.location = None;
                    Ok(ResolutionStatus::Deferred(reason))
                }
                None => Err(err),
            },
        }
    }
}
