//! Matching policy shared by the location resolver and the route stop resolver.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_MERGE_THRESHOLD_KM, DEFAULT_STOP_THRESHOLD_KM};
use crate::env_config::env_parse_with_default;
use crate::location::{CanonicalLocation, Coordinates, LocationRecord, LocationType};

/// Distance thresholds used when deciding whether two records are one place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchPolicy {
    /// Same-type locations closer than this are merged.
    pub merge_threshold_km: f64,
    /// Route stop candidates farther than this from the anchor are rejected.
    pub stop_threshold_km: f64,
}

impl Default for MatchPolicy {
    fn default() -> Self {
        Self {
            merge_threshold_km: DEFAULT_MERGE_THRESHOLD_KM,
            stop_threshold_km: DEFAULT_STOP_THRESHOLD_KM,
        }
    }
}

impl MatchPolicy {
    /// Reads `CARPATLAS_MERGE_THRESHOLD_KM` and `CARPATLAS_STOP_THRESHOLD_KM`.
    /// Non-positive or non-finite values fall back to the defaults.
    #[must_use]
    pub fn from_env() -> Self {
        let merge = env_parse_with_default("CARPATLAS_MERGE_THRESHOLD_KM", DEFAULT_MERGE_THRESHOLD_KM);
        let stop = env_parse_with_default("CARPATLAS_STOP_THRESHOLD_KM", DEFAULT_STOP_THRESHOLD_KM);
        Self {
            merge_threshold_km: positive_or_default("CARPATLAS_MERGE_THRESHOLD_KM", merge, DEFAULT_MERGE_THRESHOLD_KM),
            stop_threshold_km: positive_or_default("CARPATLAS_STOP_THRESHOLD_KM", stop, DEFAULT_STOP_THRESHOLD_KM),
        }
    }

    /// Whether an existing location and an incoming record describe the same place.
    ///
    /// Types must be equal (an unknown type only equals another unknown type).
    /// Coordinates must either be absent on both sides, or present on both and
    /// strictly closer than the merge threshold.
    #[must_use]
    pub fn is_same_place(&self, existing: &CanonicalLocation, record: &LocationRecord) -> bool {
        existing.location_type == record.location_type
            && self.coordinates_match(existing.coordinates.as_ref(), record.coordinates.as_ref())
    }

    fn coordinates_match(&self, a: Option<&Coordinates>, b: Option<&Coordinates>) -> bool {
        match (a, b) {
            (None, None) => true,
            (Some(a), Some(b)) => a.distance_km(b) < self.merge_threshold_km,
            _ => false,
        }
    }
}

fn positive_or_default(var: &str, value: f64, default: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        tracing::warn!(var, value, default, "threshold must be positive, using default");
        default
    }
}

/// An absent hint matches any type; a present hint matches only that exact type.
#[must_use]
pub fn type_matches(hint: Option<LocationType>, location: &CanonicalLocation) -> bool {
    hint.is_none_or(|t| location.location_type == Some(t))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::LocationId;

    fn existing(location_type: Option<LocationType>, coordinates: Option<Coordinates>) -> CanonicalLocation {
        CanonicalLocation {
            id: LocationId(1),
            canonical_name: "Петрос".to_owned(),
            coordinates,
            elevation: None,
            location_type,
            description: None,
        }
    }

    #[test]
    fn different_types_never_merge() {
        let policy = MatchPolicy::default();
        let loc = existing(Some(LocationType::Mountain), Some(Coordinates::new(48.17, 24.42)));
        let record = LocationRecord::new("Петрос", Some(LocationType::Stream)).with_coordinates(48.17, 24.42);
        assert!(!policy.is_same_place(&loc, &record));
    }

    #[test]
    fn coordinate_asymmetry_never_merges() {
        let policy = MatchPolicy::default();
        let with = existing(Some(LocationType::Mountain), Some(Coordinates::new(48.17, 24.42)));
        let without_record = LocationRecord::new("Петрос", Some(LocationType::Mountain));
        assert!(!policy.is_same_place(&with, &without_record));

        let without = existing(Some(LocationType::Mountain), None);
        let with_record = LocationRecord::new("Петрос", Some(LocationType::Mountain)).with_coordinates(48.17, 24.42);
        assert!(!policy.is_same_place(&without, &with_record));
    }

    #[test]
    fn both_without_coordinates_merge() {
        let policy = MatchPolicy::default();
        let loc = existing(None, None);
        let record = LocationRecord::new("Петрос", None);
        assert!(policy.is_same_place(&loc, &record));
    }

    #[test]
    fn nearby_points_merge_and_far_points_do_not() {
        let policy = MatchPolicy::default();
        let loc = existing(Some(LocationType::Mountain), Some(Coordinates::new(48.0, 24.0)));
        // ~5.6 km north
        let near = LocationRecord::new("Петрос", Some(LocationType::Mountain)).with_coordinates(48.05, 24.0);
        // ~22 km north
        let far = LocationRecord::new("Петрос", Some(LocationType::Mountain)).with_coordinates(48.2, 24.0);
        assert!(policy.is_same_place(&loc, &near));
        assert!(!policy.is_same_place(&loc, &far));
    }

    #[test]
    fn absent_hint_matches_anything() {
        let loc = existing(Some(LocationType::Lake), None);
        assert!(type_matches(None, &loc));
        assert!(type_matches(Some(LocationType::Lake), &loc));
        assert!(!type_matches(Some(LocationType::Mountain), &loc));
        assert!(!type_matches(Some(LocationType::Mountain), &existing(None, None)));
    }
}
