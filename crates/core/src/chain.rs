//! Nearest-anchor chaining used to resolve route stops.
//!
//! A route is walked stop by stop. The last resolved location that has
//! coordinates is the *anchor*; among same-named candidates the one nearest to
//! the anchor is chosen. There is no look-ahead to later stops.

use serde::{Deserialize, Serialize};

use crate::location::{CanonicalLocation, LocationId, LocationType};
use crate::matching::type_matches;

/// Outcome of choosing among candidates for one stop.
#[derive(Debug, Clone, PartialEq)]
pub enum StopSelection<'a> {
    /// Reuse an existing location.
    Existing(&'a CanonicalLocation),
    /// No acceptable candidate; a new location must be created.
    CreateNew,
}

/// A route stop bound to its resolved location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedStop {
    pub index: u32,
    pub location_id: LocationId,
    pub display_name: Option<String>,
    /// Whether the location was created for this stop
    pub created: bool,
}

/// Accumulator folded over a route's stops.
#[derive(Debug, Clone, Default)]
pub struct StopChain {
    anchor: Option<CanonicalLocation>,
    stops: Vec<ResolvedStop>,
}

impl StopChain {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn anchor(&self) -> Option<&CanonicalLocation> {
        self.anchor.as_ref()
    }

    #[must_use]
    pub fn stops(&self) -> &[ResolvedStop] {
        &self.stops
    }

    /// Index the next pushed stop will receive.
    #[must_use]
    pub fn next_index(&self) -> u32 {
        u32::try_from(self.stops.len()).unwrap_or(u32::MAX)
    }

    /// Chooses a location for the next stop among same-named locations.
    ///
    /// Candidates whose type disagrees with `hint` are ignored. With no anchor,
    /// or when no candidate has coordinates, the first candidate wins. Otherwise
    /// the nearest coordinate-bearing candidate wins unless it is farther than
    /// `threshold_km`, in which case a new location is required.
    #[must_use]
    pub fn select<'a>(
        &self,
        candidates: &'a [CanonicalLocation],
        hint: Option<LocationType>,
        threshold_km: f64,
    ) -> StopSelection<'a> {
        let mut possible = candidates.iter().filter(|c| type_matches(hint, c)).peekable();
        let Some(first) = possible.peek().copied() else {
            return StopSelection::CreateNew;
        };
        let Some(anchor) = self.anchor.as_ref().and_then(|a| a.coordinates) else {
            return StopSelection::Existing(first);
        };

        let nearest = possible
            .filter_map(|c| c.coordinates.map(|coords| (c, anchor.distance_km(&coords))))
            .min_by(|(_, a), (_, b)| a.total_cmp(b));

        match nearest {
            None => StopSelection::Existing(first),
            Some((location, distance)) if distance <= threshold_km => {
                StopSelection::Existing(location)
            },
            Some((location, distance)) => {
                tracing::debug!(
                    candidate = %location.id,
                    name = %location.canonical_name,
                    distance_km = distance,
                    threshold_km,
                    "nearest candidate too far from anchor"
                );
                StopSelection::CreateNew
            },
        }
    }

    /// Records the resolved location for the next stop and moves the anchor
    /// when the location has coordinates.
    #[must_use]
    pub fn push(
        mut self,
        location: &CanonicalLocation,
        display_name: Option<String>,
        created: bool,
    ) -> Self {
        let index = self.next_index();
        self.stops.push(ResolvedStop { index, location_id: location.id, display_name, created });
        if location.has_coordinates() {
            self.anchor = Some(location.clone());
        }
        self
    }

    #[must_use]
    pub fn into_stops(self) -> Vec<ResolvedStop> {
        self.stops
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::Coordinates;

    fn loc(id: i64, location_type: Option<LocationType>, coords: Option<(f64, f64)>) -> CanonicalLocation {
        CanonicalLocation {
            id: LocationId(id),
            canonical_name: format!("loc-{id}"),
            coordinates: coords.map(|(lat, lon)| Coordinates::new(lat, lon)),
            elevation: None,
            location_type,
            description: None,
        }
    }

    fn anchored_at(lat: f64, lon: f64) -> StopChain {
        StopChain::new().push(&loc(100, Some(LocationType::Settlement), Some((lat, lon))), None, false)
    }

    #[test]
    fn no_candidates_requires_creation() {
        let chain = StopChain::new();
        assert_eq!(chain.select(&[], None, 100.0), StopSelection::CreateNew);
    }

    #[test]
    fn hint_filters_out_other_types() {
        let chain = StopChain::new();
        let candidates = vec![loc(1, Some(LocationType::Stream), None)];
        assert_eq!(
            chain.select(&candidates, Some(LocationType::Mountain), 100.0),
            StopSelection::CreateNew
        );
        assert_eq!(chain.select(&candidates, None, 100.0), StopSelection::Existing(&candidates[0]));
    }

    #[test]
    fn without_anchor_first_candidate_wins() {
        let chain = StopChain::new();
        let candidates = vec![
            loc(1, Some(LocationType::Mountain), Some((49.0, 23.0))),
            loc(2, Some(LocationType::Mountain), Some((48.0, 24.0))),
        ];
        assert_eq!(chain.select(&candidates, None, 100.0), StopSelection::Existing(&candidates[0]));
    }

    #[test]
    fn coordinate_less_candidates_fall_back_to_first() {
        let chain = anchored_at(48.0, 24.0);
        let candidates = vec![loc(1, None, None), loc(2, None, None)];
        assert_eq!(chain.select(&candidates, None, 100.0), StopSelection::Existing(&candidates[0]));
    }

    #[test]
    fn nearest_candidate_to_anchor_wins() {
        let chain = anchored_at(48.0, 24.0);
        // ~150 km and ~5 km from the anchor
        let candidates = vec![
            loc(1, Some(LocationType::Mountain), Some((49.35, 24.0))),
            loc(2, Some(LocationType::Mountain), Some((48.045, 24.0))),
        ];
        assert_eq!(chain.select(&candidates, None, 100.0), StopSelection::Existing(&candidates[1]));
    }

    #[test]
    fn far_only_candidate_is_rejected() {
        let chain = anchored_at(48.0, 24.0);
        let candidates = vec![loc(1, Some(LocationType::Mountain), Some((49.35, 24.0)))];
        assert_eq!(chain.select(&candidates, None, 100.0), StopSelection::CreateNew);
    }

    #[test]
    fn coordinate_less_candidates_are_ignored_when_others_have_coordinates() {
        let chain = anchored_at(48.0, 24.0);
        let candidates = vec![
            loc(1, Some(LocationType::Mountain), None),
            loc(2, Some(LocationType::Mountain), Some((48.1, 24.1))),
        ];
        assert_eq!(chain.select(&candidates, None, 100.0), StopSelection::Existing(&candidates[1]));
    }

    #[test]
    fn anchor_persists_across_coordinate_less_stops() {
        let chain = anchored_at(48.0, 24.0).push(&loc(2, None, None), Some("gap".to_owned()), true);
        assert_eq!(chain.anchor().map(|a| a.id), Some(LocationId(100)));

        let chain = chain.push(&loc(3, None, Some((48.2, 24.2))), None, false);
        assert_eq!(chain.anchor().map(|a| a.id), Some(LocationId(3)));
    }

    #[test]
    fn pushed_indices_are_contiguous() {
        let chain = StopChain::new()
            .push(&loc(1, None, None), None, true)
            .push(&loc(2, None, Some((48.0, 24.0))), None, false)
            .push(&loc(1, None, None), None, false);
        let indices: Vec<u32> = chain.into_stops().iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }
}
