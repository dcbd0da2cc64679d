use std::sync::Arc;

use carpatlas_core::{CanonicalLocation, LocationDifficultyRecord, LocationRecord, MatchPolicy};
use carpatlas_storage::traits::{LocationStore, NameIndex, ReportStore};
use carpatlas_storage::StorageBackend;
use serde::Serialize;

use crate::{NameLocks, ServiceError};

/// Result of resolving one [`LocationRecord`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", content = "location", rename_all = "snake_case")]
pub enum Resolution {
    /// The record described a known place.
    Matched(CanonicalLocation),
    /// A new canonical location was created.
    Created(CanonicalLocation),
}

impl Resolution {
    #[must_use]
    pub fn location(&self) -> &CanonicalLocation {
        match self {
            Self::Matched(l) | Self::Created(l) => l,
        }
    }

    #[must_use]
    pub fn is_created(&self) -> bool {
        matches!(self, Self::Created(_))
    }
}

/// A location with everything filed against it, for lookups.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationDetails {
    #[serde(flatten)]
    pub location: CanonicalLocation,
    pub aliases: Vec<String>,
    pub difficulties: Vec<LocationDifficultyRecord>,
}

pub struct LocationService {
    storage: Arc<StorageBackend>,
    locks: Arc<NameLocks>,
    policy: MatchPolicy,
}

impl LocationService {
    #[must_use]
    pub fn new(storage: Arc<StorageBackend>, locks: Arc<NameLocks>, policy: MatchPolicy) -> Self {
        Self { storage, locks, policy }
    }

    /// Match `record` against locations filed under its name, or create one.
    ///
    /// At most one location is created per call. A matched location only gains
    /// a description when it had none.
    pub async fn resolve(&self, record: &LocationRecord) -> Result<Resolution, ServiceError> {
        let name = record.name.trim();
        if name.is_empty() {
            return Err(ServiceError::InvalidInput("location record has an empty name".to_owned()));
        }
        let aliases = record.alias_names();
        let _guards = self.locks.lock_all(aliases.iter().map(String::as_str)).await;

        let candidates = self.storage.locations_by_name(name).await?;
        if let Some(existing) = candidates.into_iter().find(|c| self.policy.is_same_place(c, record)) {
            return self.merge(existing, record).await.map(Resolution::Matched);
        }

        let created = self.storage.create_location(&record.to_new_location(), &aliases).await?;
        tracing::debug!(
            id = %created.id,
            name = %created.canonical_name,
            aliases = aliases.len(),
            "created location"
        );
        Ok(Resolution::Created(created))
    }

    async fn merge(
        &self,
        mut existing: CanonicalLocation,
        record: &LocationRecord,
    ) -> Result<CanonicalLocation, ServiceError> {
        let description = record.description.as_deref().map(str::trim).filter(|d| !d.is_empty());
        if let Some(description) = description {
            if !existing.has_description() {
                self.storage.update_location_description(existing.id, description).await?;
                tracing::debug!(id = %existing.id, "filled missing description");
                existing.description = Some(description.to_owned());
            }
        }
        Ok(existing)
    }

    /// Every location filed under `name` with its aliases and recorded grades.
    pub async fn lookup(&self, name: &str) -> Result<Vec<LocationDetails>, ServiceError> {
        let mut details = Vec::new();
        for location in self.storage.locations_by_name(name).await? {
            let aliases = self.storage.aliases_for(location.id).await?;
            let difficulties = self.storage.difficulties_for_location(location.id).await?;
            details.push(LocationDetails { location, aliases, difficulties });
        }
        Ok(details)
    }
}
