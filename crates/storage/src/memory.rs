//! In-memory storage backend for single-process runs and tests.
//!
//! Same observable semantics as [`crate::PgStorage`]; state is lost when the
//! process exits.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use carpatlas_core::{
    CanonicalLocation, LocationDifficulty, LocationDifficultyRecord, LocationId, NewLocation,
    Report, ReportId, ReportKey, ReportRecord, RouteId, RouteStop,
};
use chrono::Utc;
use tokio::sync::RwLock;

use crate::error::StorageError;
use crate::traits::{
    AtlasStats, LocationStore, NameIndex, ReportStore, RouteStore, StatsStore,
};

#[derive(Debug, Default)]
struct State {
    locations: Vec<CanonicalLocation>,
    /// Alias entries in registration order.
    aliases: Vec<(String, LocationId)>,
    by_name: HashMap<String, Vec<LocationId>>,
    routes: Vec<Vec<RouteStop>>,
    reports: Vec<Report>,
    report_keys: HashMap<ReportKey, ReportId>,
    difficulties: Vec<LocationDifficultyRecord>,
}

/// 1-based ids so they never collide with a default-initialized value.
fn next_id(len: usize) -> i64 {
    i64::try_from(len).unwrap_or(i64::MAX).saturating_add(1)
}

/// Vec slot for a 1-based id.
fn slot(id: i64) -> Option<usize> {
    usize::try_from(id).ok()?.checked_sub(1)
}

impl State {
    fn location(&self, id: LocationId) -> Option<&CanonicalLocation> {
        slot(id.0).and_then(|i| self.locations.get(i))
    }

    /// Returns false when the alias already points at `location_id`.
    fn add_alias(&mut self, name: &str, location_id: LocationId) -> bool {
        let ids = self.by_name.entry(name.to_owned()).or_default();
        if ids.contains(&location_id) {
            return false;
        }
        ids.push(location_id);
        self.aliases.push((name.to_owned(), location_id));
        true
    }
}

fn check_alias(name: &str) -> Result<(), StorageError> {
    if name.trim().is_empty() {
        return Err(StorageError::Constraint(format!("blank alias {name:?}")));
    }
    Ok(())
}

#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    state: Arc<RwLock<State>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NameIndex for MemoryStorage {
    async fn locations_by_name(&self, name: &str) -> Result<Vec<CanonicalLocation>, StorageError> {
        let state = self.state.read().await;
        let Some(ids) = state.by_name.get(name) else {
            return Ok(Vec::new());
        };
        ids.iter()
            .map(|id| state.location(*id).cloned().ok_or_else(|| StorageError::not_found("location", id)))
            .collect()
    }

    async fn register_alias(&self, name: &str, location_id: LocationId) -> Result<bool, StorageError> {
        check_alias(name)?;
        let mut state = self.state.write().await;
        if state.location(location_id).is_none() {
            return Err(StorageError::not_found("location", location_id));
        }
        Ok(state.add_alias(name, location_id))
    }

    async fn aliases_for(&self, location_id: LocationId) -> Result<Vec<String>, StorageError> {
        let state = self.state.read().await;
        Ok(state
            .aliases
            .iter()
            .filter(|(_, id)| *id == location_id)
            .map(|(name, _)| name.clone())
            .collect())
    }
}

#[async_trait]
impl LocationStore for MemoryStorage {
    async fn create_location(
        &self,
        location: &NewLocation,
        aliases: &[String],
    ) -> Result<CanonicalLocation, StorageError> {
        aliases.iter().try_for_each(|a| check_alias(a))?;
        let mut state = self.state.write().await;
        let created = location.clone().into_canonical(LocationId(next_id(state.locations.len())));
        state.locations.push(created.clone());
        for alias in aliases {
            state.add_alias(alias, created.id);
        }
        Ok(created)
    }

    async fn get_location(&self, id: LocationId) -> Result<Option<CanonicalLocation>, StorageError> {
        Ok(self.state.read().await.location(id).cloned())
    }

    async fn update_location_description(
        &self,
        id: LocationId,
        description: &str,
    ) -> Result<(), StorageError> {
        let mut state = self.state.write().await;
        let location = slot(id.0)
            .and_then(|i| state.locations.get_mut(i))
            .ok_or_else(|| StorageError::not_found("location", id))?;
        location.description = Some(description.to_owned());
        Ok(())
    }
}

#[async_trait]
impl RouteStore for MemoryStorage {
    async fn create_route(&self) -> Result<RouteId, StorageError> {
        let mut state = self.state.write().await;
        let id = RouteId(next_id(state.routes.len()));
        state.routes.push(Vec::new());
        Ok(id)
    }

    async fn append_route_stop(&self, stop: &RouteStop) -> Result<(), StorageError> {
        let mut state = self.state.write().await;
        if state.location(stop.location_id).is_none() {
            return Err(StorageError::not_found("location", stop.location_id));
        }
        let stops = slot(stop.route_id.0)
            .and_then(|i| state.routes.get_mut(i))
            .ok_or_else(|| StorageError::not_found("route", stop.route_id))?;
        if stops.iter().any(|s| s.stop_index == stop.stop_index) {
            return Err(StorageError::Duplicate(format!(
                "route {} already has stop {}",
                stop.route_id, stop.stop_index
            )));
        }
        stops.push(stop.clone());
        Ok(())
    }

    async fn get_route_stops(&self, route_id: RouteId) -> Result<Vec<RouteStop>, StorageError> {
        let state = self.state.read().await;
        let mut stops = slot(route_id.0)
            .and_then(|i| state.routes.get(i))
            .cloned()
            .unwrap_or_default();
        stops.sort_by_key(|s| s.stop_index);
        Ok(stops)
    }
}

#[async_trait]
impl ReportStore for MemoryStorage {
    async fn report_exists(&self, key: &ReportKey) -> Result<bool, StorageError> {
        Ok(self.state.read().await.report_keys.contains_key(key))
    }

    async fn create_report(
        &self,
        record: &ReportRecord,
        route_id: RouteId,
        grades: &[(LocationId, LocationDifficulty)],
    ) -> Result<Report, StorageError> {
        let mut state = self.state.write().await;
        let key = record.key();
        if state.report_keys.contains_key(&key) {
            return Err(StorageError::Duplicate(format!("report {:?} ({})", key.title, key.url)));
        }
        if slot(route_id.0).and_then(|i| state.routes.get(i)).is_none() {
            return Err(StorageError::not_found("route", route_id));
        }
        if let Some((missing, _)) = grades.iter().find(|(id, _)| state.location(*id).is_none()) {
            return Err(StorageError::not_found("location", missing));
        }

        let report = Report {
            id: ReportId(next_id(state.reports.len())),
            title: record.title.clone(),
            author: record.author.clone(),
            trip_type: record.trip_type,
            difficulty: record.difficulty,
            season: record.season,
            year: record.year,
            url: record.url.clone(),
            file_url: record.file_url.clone(),
            route_id,
            created_at: Utc::now(),
        };
        state.report_keys.insert(key, report.id);
        state.difficulties.extend(grades.iter().map(|(location_id, difficulty)| {
            LocationDifficultyRecord {
                location_id: *location_id,
                difficulty: *difficulty,
                season: report.season,
                report_id: report.id,
            }
        }));
        state.reports.push(report.clone());
        Ok(report)
    }

    async fn difficulties_for_location(
        &self,
        location_id: LocationId,
    ) -> Result<Vec<LocationDifficultyRecord>, StorageError> {
        let state = self.state.read().await;
        Ok(state.difficulties.iter().filter(|d| d.location_id == location_id).cloned().collect())
    }
}

#[async_trait]
impl StatsStore for MemoryStorage {
    async fn get_stats(&self) -> Result<AtlasStats, StorageError> {
        let state = self.state.read().await;
        let count = |n: usize| u64::try_from(n).unwrap_or(u64::MAX);
        Ok(AtlasStats {
            location_count: count(state.locations.len()),
            alias_count: count(state.aliases.len()),
            route_count: count(state.routes.len()),
            route_stop_count: count(state.routes.iter().map(Vec::len).sum()),
            report_count: count(state.reports.len()),
            difficulty_count: count(state.difficulties.len()),
        })
    }
}
