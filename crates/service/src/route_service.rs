use std::sync::Arc;

use carpatlas_core::{
    CanonicalLocation, MatchPolicy, NewLocation, ResolvedStop, RouteId, RouteStop, StopChain,
    StopDescriptor, StopSelection,
};
use carpatlas_storage::traits::{LocationStore, NameIndex, RouteStore};
use carpatlas_storage::StorageBackend;
use serde::Serialize;

use crate::{NameLocks, ServiceError};

/// A persisted route and how each of its stops was resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedRoute {
    pub route_id: RouteId,
    pub stops: Vec<ResolvedStop>,
}

/// Resolves parsed route stops to canonical locations by nearest-anchor chaining.
pub struct RouteService {
    storage: Arc<StorageBackend>,
    locks: Arc<NameLocks>,
    policy: MatchPolicy,
}

impl RouteService {
    #[must_use]
    pub fn new(storage: Arc<StorageBackend>, locks: Arc<NameLocks>, policy: MatchPolicy) -> Self {
        Self { storage, locks, policy }
    }

    /// Create a route and persist one stop per descriptor, in order.
    ///
    /// Stops are resolved strictly one after another since each choice
    /// depends on the anchor left by the previous stop.
    pub async fn store_route(&self, stops: &[StopDescriptor]) -> Result<ResolvedRoute, ServiceError> {
        let route_id = self.storage.create_route().await?;
        let mut chain = StopChain::new();
        for stop in stops {
            chain = self.resolve_stop(chain, stop).await?;
            if let Some(resolved) = chain.stops().last() {
                self.storage
                    .append_route_stop(&RouteStop {
                        route_id,
                        stop_index: resolved.index,
                        location_id: resolved.location_id,
                        display_name: resolved.display_name.clone(),
                    })
                    .await?;
            }
        }
        tracing::debug!(%route_id, stops = chain.stops().len(), "stored route");
        Ok(ResolvedRoute { route_id, stops: chain.into_stops() })
    }

    /// Resolve one stop against the chain's current anchor and push it.
    pub async fn resolve_stop(
        &self,
        chain: StopChain,
        stop: &StopDescriptor,
    ) -> Result<StopChain, ServiceError> {
        let _guard = self.locks.lock(&stop.name).await;
        let candidates = self.storage.locations_by_name(&stop.name).await?;

        let (location, created) =
            match chain.select(&candidates, stop.location_type, self.policy.stop_threshold_km) {
                StopSelection::Existing(location) => (location.clone(), false),
                StopSelection::CreateNew => (self.create_for_stop(stop).await?, true),
            };
        Ok(chain.push(&location, Some(stop.raw.clone()), created))
    }

    async fn create_for_stop(&self, stop: &StopDescriptor) -> Result<CanonicalLocation, ServiceError> {
        let location = NewLocation {
            canonical_name: stop.name.clone(),
            coordinates: None,
            elevation: stop.elevation,
            location_type: stop.location_type,
            description: None,
        };
        let location =
            self.storage.create_location(&location, std::slice::from_ref(&stop.name)).await?;
        tracing::debug!(id = %location.id, name = %stop.name, "created location for route stop");
        Ok(location)
    }
}
