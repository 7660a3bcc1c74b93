//! Error types and handling for the `geosearch` library

use thiserror::Error;

/// Main error type for the `geosearch` library
#[derive(Error, Debug)]
pub enum GeoSearchError {
    /// The geocoding service could not be reached or misbehaved (transient)
    #[error("Geocoding service unavailable: {message}")]
    GeocodeUnavailable { message: String },

    /// The geocoding service had no match for the input text (terminal)
    #[error("No geocoding match for: {query}")]
    NotFound { query: String },

    /// Latitude or longitude outside the valid range
    #[error("Invalid coordinate: latitude {latitude}, longitude {longitude}")]
    InvalidCoordinate { latitude: f64, longitude: f64 },

    /// Search radius must be a positive, finite number of kilometers
    #[error("Invalid search radius: {radius_km} km")]
    InvalidRadius { radius_km: f64 },

    /// A bounding box violated min <= max, e.g. across the antimeridian
    #[error("Invalid bounding box: {message}")]
    InvalidBoundingBox { message: String },

    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Location store errors
    #[error("Store error: {message}")]
    Store { message: String },
}

/// Why a geocode attempt failed, for callers that degrade instead of erroring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeocodeFailure {
    /// Retrying later may succeed.
    Unavailable,
    /// The input text has no match; retrying will not help.
    NotFound,
}

impl GeoSearchError {
    /// Create a new unavailable error
    pub fn unavailable<S: Into<String>>(message: S) -> Self {
        Self::GeocodeUnavailable {
            message: message.into(),
        }
    }

    /// Create a new not-found error
    pub fn not_found<S: Into<String>>(query: S) -> Self {
        Self::NotFound {
            query: query.into(),
        }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new store error
    pub fn store<S: Into<String>>(message: S) -> Self {
        Self::Store {
            message: message.into(),
        }
    }

    /// Classify this error as a geocode failure, if it is one.
    ///
    /// `InvalidCoordinate` counts as unavailable: it means the service
    /// answered with garbage, which is indistinguishable from an outage
    /// for the caller.
    #[must_use]
    pub fn geocode_failure(&self) -> Option<GeocodeFailure> {
        match self {
            Self::NotFound { .. } => Some(GeocodeFailure::NotFound),
            Self::GeocodeUnavailable { .. } | Self::InvalidCoordinate { .. } => {
                Some(GeocodeFailure::Unavailable)
            }
            _ => None,
        }
    }
}
