use async_trait::async_trait;
use carpatlas_core::{CanonicalLocation, LocationId};

use crate::error::StorageError;

/// Exact-match lookup from free-form names to canonical locations.
///
/// One name may map to many locations and one location may be filed under
/// many names. Entries are append-only.
#[async_trait]
pub trait NameIndex: Send + Sync {
    /// All locations filed under `name`, in the order their aliases were registered.
    async fn locations_by_name(&self, name: &str) -> Result<Vec<CanonicalLocation>, StorageError>;

    /// File `location_id` under `name`. Returns `true` if inserted, `false` if the
    /// pair already existed.
    async fn register_alias(&self, name: &str, location_id: LocationId) -> Result<bool, StorageError>;

    /// Every name `location_id` is filed under, in registration order.
    async fn aliases_for(&self, location_id: LocationId) -> Result<Vec<String>, StorageError>;
}
