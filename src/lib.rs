//! `GeoSearch` - Location search for event publishing
//!
//! This library geocodes free-text place names, pre-filters stored
//! locations with a bounding box and narrows the candidates by geodesic
//! distance, and gives entities an optional, resolvable place name.

pub mod config;
pub mod error;
pub mod event;
pub mod geocode;
pub mod locatable;
pub mod location_resolver;
pub mod models;
pub mod search;
pub mod store;

// Re-export core types for public API
pub use config::{DefaultsConfig, GeoSearchConfig, GeocoderConfig, LoggingConfig};
pub use error::{GeoSearchError, GeocodeFailure};
pub use event::{Audience, Event, EventIndex};
pub use geocode::{Geocoder, OpenMeteoGeocoder};
pub use locatable::{Locatable, LocatableState, ResolutionStatus};
pub use location_resolver::LocationResolver;
pub use models::{BoundingBox, Location, Point};
pub use search::{NearbySearch, Precision, SearchResults};
pub use store::{LocationStore, MemoryStore};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, GeoSearchError>;
