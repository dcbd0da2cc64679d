use async_trait::async_trait;
use carpatlas_core::{RouteId, RouteStop};

use crate::error::StorageError;

/// Routes and their ordered stops.
#[async_trait]
pub trait RouteStore: Send + Sync {
    /// Create an empty route.
    async fn create_route(&self) -> Result<RouteId, StorageError>;

    /// Append a stop. Fails with `Duplicate` if the route already has a stop at
    /// that index and with `NotFound` if the route does not exist.
    async fn append_route_stop(&self, stop: &RouteStop) -> Result<(), StorageError>;

    /// Stops of a route ordered by index.
    async fn get_route_stops(&self, route_id: RouteId) -> Result<Vec<RouteStop>, StorageError>;
}
