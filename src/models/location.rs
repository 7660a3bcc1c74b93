//! Named location model

use serde::{Deserialize, Serialize};

use super::Point;

/// A named place with resolved coordinates.
///
/// Identity is the normalized name: lookups and deduplication are
/// case-insensitive on the trimmed, upper-cased form.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Location {
    /// Place name as stored (normalized on creation through the resolver)
    pub name: String,
    /// Resolved coordinates
    pub point: Point,
}

impl Location {
    /// Create a new location
    #[must_use]
    pub fn new(name: impl Into<String>, point: Point) -> Self {
        Self {
            name: name.into(),
            point,
        }
    }

    /// The normalized form of this location's name
    #[must_use]
    pub fn normalized_name(&self) -> String {
        Self::normalize(&self.name)
    }

    /// Normalize a place name for identity comparisons.
    ///
    /// Idempotent: normalizing an already-normalized name is a no-op.
    #[must_use]
    pub fn normalize(name: &str) -> String {
        name.trim().to_uppercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_and_uppercases() {
        assert_eq!(Location::normalize("  London "), "LONDON");
        assert_eq!(Location::normalize("paris"), "PARIS");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = Location::normalize("St. Ives");
        assert_eq!(Location::normalize(&once), once);
    }

    #[test]
    fn test_normalized_name_matches_case_variants() {
        let point = Point::new(51.5074, -0.1278).unwrap();
        let lower = Location::new("london", point);
        let upper = Location::new("LONDON", point);
        assert_eq!(lower.normalized_name(), upper.normalized_name());
    }
}
