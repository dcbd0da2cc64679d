//! Unified storage backend with enum dispatch.

use async_trait::async_trait;
use carpatlas_core::{
    CanonicalLocation, LocationDifficulty, LocationDifficultyRecord, LocationId, NewLocation,
    Report, ReportKey, ReportRecord, RouteId, RouteStop,
};

use crate::error::StorageError;
use crate::memory::MemoryStorage;
use crate::pg_storage::PgStorage;
use crate::traits::{
    AtlasStats, LocationStore, NameIndex, ReportStore, RouteStore, StatsStore,
};

macro_rules! dispatch {
    ($self:expr, $trait:path, $method:ident ( $($arg:expr),* $(,)? )) => {
        match $self {
            StorageBackend::Postgres(s) => <PgStorage as $trait>::$method(s, $($arg),*).await,
            StorageBackend::Memory(s) => <MemoryStorage as $trait>::$method(s, $($arg),*).await,
        }
    };
}

#[derive(Clone, Debug)]
pub enum StorageBackend {
    Postgres(PgStorage),
    Memory(MemoryStorage),
}

impl StorageBackend {
    pub async fn new_postgres(database_url: &str) -> Result<Self, StorageError> {
        Ok(Self::Postgres(PgStorage::new(database_url).await?))
    }

    #[must_use]
    pub fn new_memory() -> Self {
        Self::Memory(MemoryStorage::new())
    }

    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Postgres(_) => "postgres",
            Self::Memory(_) => "memory",
        }
    }
}

// ── NameIndex ────────────────────────────────────────────────────

#[async_trait]
impl NameIndex for StorageBackend {
    async fn locations_by_name(&self, name: &str) -> Result<Vec<CanonicalLocation>, StorageError> {
        dispatch!(self, NameIndex, locations_by_name(name))
    }

    async fn register_alias(&self, name: &str, location_id: LocationId) -> Result<bool, StorageError> {
        dispatch!(self, NameIndex, register_alias(name, location_id))
    }

    async fn aliases_for(&self, location_id: LocationId) -> Result<Vec<String>, StorageError> {
        dispatch!(self, NameIndex, aliases_for(location_id))
    }
}

// ── LocationStore ────────────────────────────────────────────────

#[async_trait]
impl LocationStore for StorageBackend {
    async fn create_location(
        &self,
        location: &NewLocation,
        aliases: &[String],
    ) -> Result<CanonicalLocation, StorageError> {
        dispatch!(self, LocationStore, create_location(location, aliases))
    }

    async fn get_location(&self, id: LocationId) -> Result<Option<CanonicalLocation>, StorageError> {
        dispatch!(self, LocationStore, get_location(id))
    }

    async fn update_location_description(
        &self,
        id: LocationId,
        description: &str,
    ) -> Result<(), StorageError> {
        dispatch!(self, LocationStore, update_location_description(id, description))
    }
}

// ── RouteStore ───────────────────────────────────────────────────

#[async_trait]
impl RouteStore for StorageBackend {
    async fn create_route(&self) -> Result<RouteId, StorageError> {
        dispatch!(self, RouteStore, create_route())
    }

    async fn append_route_stop(&self, stop: &RouteStop) -> Result<(), StorageError> {
        dispatch!(self, RouteStore, append_route_stop(stop))
    }

    async fn get_route_stops(&self, route_id: RouteId) -> Result<Vec<RouteStop>, StorageError> {
        dispatch!(self, RouteStore, get_route_stops(route_id))
    }
}

// ── ReportStore ──────────────────────────────────────────────────

#[async_trait]
impl ReportStore for StorageBackend {
    async fn report_exists(&self, key: &ReportKey) -> Result<bool, StorageError> {
        dispatch!(self, ReportStore, report_exists(key))
    }

    async fn create_report(
        &self,
        record: &ReportRecord,
        route_id: RouteId,
        grades: &[(LocationId, LocationDifficulty)],
    ) -> Result<Report, StorageError> {
        dispatch!(self, ReportStore, create_report(record, route_id, grades))
    }

    async fn difficulties_for_location(
        &self,
        location_id: LocationId,
    ) -> Result<Vec<LocationDifficultyRecord>, StorageError> {
        dispatch!(self, ReportStore, difficulties_for_location(location_id))
    }
}

// ── StatsStore ───────────────────────────────────────────────────

#[async_trait]
impl StatsStore for StorageBackend {
    async fn get_stats(&self) -> Result<AtlasStats, StorageError> {
        dispatch!(self, StatsStore, get_stats())
    }
}
