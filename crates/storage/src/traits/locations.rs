use async_trait::async_trait;
use carpatlas_core::{CanonicalLocation, LocationId, NewLocation};

use crate::error::StorageError;

/// Canonical location records.
#[async_trait]
pub trait LocationStore: Send + Sync {
    /// Insert a location filed under `aliases` and return it with its assigned id.
    ///
    /// The location and every alias are stored together or not at all.
    async fn create_location(
        &self,
        location: &NewLocation,
        aliases: &[String],
    ) -> Result<CanonicalLocation, StorageError>;

    async fn get_location(&self, id: LocationId) -> Result<Option<CanonicalLocation>, StorageError>;

    /// Set the description of an existing location.
    async fn update_location_description(
        &self,
        id: LocationId,
        description: &str,
    ) -> Result<(), StorageError>;
}
