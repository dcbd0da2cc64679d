//! PostgreSQL storage backend using sqlx.
//!
//! Split into modular files by domain concern.

#![allow(clippy::absolute_paths, reason = "std paths in error handling are clear")]

mod locations;
mod names;
mod reports;
mod routes;
mod stats;

use std::str::FromStr;

use carpatlas_core::constants::{
    PG_POOL_ACQUIRE_TIMEOUT_SECS, PG_POOL_IDLE_TIMEOUT_SECS, PG_POOL_MAX_CONNECTIONS,
};
use carpatlas_core::{
    CanonicalLocation, Coordinates, LocationDifficulty, LocationDifficultyRecord, LocationId,
    LocationType, Report, ReportId, RouteId, RouteStop, Season, TripDifficulty, TripType,
};
use chrono::{DateTime, Utc};
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};

use crate::error::StorageError;

use super::pg_migrations::run_pg_migrations;

const LOCATION_COLUMNS: &str =
    "l.id, l.canonical_name, l.latitude, l.longitude, l.elevation, l.location_type, l.description";

#[derive(Clone, Debug)]
pub struct PgStorage {
    pool: PgPool,
}

impl PgStorage {
    pub async fn new(database_url: &str) -> Result<Self, StorageError> {
        let pool = PgPoolOptions::new()
            .max_connections(PG_POOL_MAX_CONNECTIONS)
            .acquire_timeout(std::time::Duration::from_secs(PG_POOL_ACQUIRE_TIMEOUT_SECS))
            .idle_timeout(std::time::Duration::from_secs(PG_POOL_IDLE_TIMEOUT_SECS))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;
        run_pg_migrations(&pool).await.map_err(|e| StorageError::Migration(e.to_string()))?;
        tracing::info!("PgStorage initialized");
        Ok(Self { pool })
    }
}

/// Parse an enum stored as text, reporting the owning row on failure.
fn parse_column<T>(raw: &str, context: impl FnOnce() -> String) -> Result<T, StorageError>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.parse::<T>().map_err(|e| StorageError::corrupt(context(), e))
}

pub(crate) fn stop_index_to_i32(index: u32) -> Result<i32, StorageError> {
    i32::try_from(index).map_err(|e| StorageError::corrupt(format!("stop index {index}"), e))
}

pub(crate) fn row_to_location(row: &PgRow) -> Result<CanonicalLocation, StorageError> {
    let id: i64 = row.try_get("id")?;
    let location_type = row
        .try_get::<Option<String>, _>("location_type")?
        .map(|t| parse_column::<LocationType>(&t, || format!("location {id} location_type")))
        .transpose()?;

    Ok(CanonicalLocation {
        id: LocationId(id),
        canonical_name: row.try_get("canonical_name")?,
        coordinates: Coordinates::from_parts(row.try_get("latitude")?, row.try_get("longitude")?),
        elevation: row.try_get("elevation")?,
        location_type,
        description: row.try_get("description")?,
    })
}

pub(crate) fn row_to_route_stop(row: &PgRow) -> Result<RouteStop, StorageError> {
    let route_id: i64 = row.try_get("route_id")?;
    let stop_index: i32 = row.try_get("stop_index")?;
    Ok(RouteStop {
        route_id: RouteId(route_id),
        stop_index: u32::try_from(stop_index).map_err(|e| {
            StorageError::corrupt(format!("route {route_id} stop index {stop_index}"), e)
        })?,
        location_id: LocationId(row.try_get("location_id")?),
        display_name: row.try_get("display_name")?,
    })
}

pub(crate) fn row_to_report(row: &PgRow) -> Result<Report, StorageError> {
    let id: i64 = row.try_get("id")?;
    let trip_type: String = row.try_get("trip_type")?;
    let season: String = row.try_get("season")?;
    let difficulty = row
        .try_get::<Option<String>, _>("difficulty")?
        .map(|d| parse_column::<TripDifficulty>(&d, || format!("report {id} difficulty")))
        .transpose()?;
    let created_at: DateTime<Utc> = row.try_get("created_at")?;

    Ok(Report {
        id: ReportId(id),
        title: row.try_get("title")?,
        author: row.try_get("author")?,
        trip_type: parse_column::<TripType>(&trip_type, || format!("report {id} trip_type"))?,
        difficulty,
        season: parse_column::<Season>(&season, || format!("report {id} season"))?,
        year: row.try_get("year")?,
        url: row.try_get("url")?,
        file_url: row.try_get("file_url")?,
        route_id: RouteId(row.try_get("route_id")?),
        created_at,
    })
}

pub(crate) fn row_to_difficulty(row: &PgRow) -> Result<LocationDifficultyRecord, StorageError> {
    let id: i64 = row.try_get("id")?;
    let difficulty: String = row.try_get("difficulty")?;
    let season: String = row.try_get("season")?;
    Ok(LocationDifficultyRecord {
        location_id: LocationId(row.try_get("location_id")?),
        difficulty: parse_column::<LocationDifficulty>(&difficulty, || {
            format!("location difficulty {id} grade")
        })?,
        season: parse_column::<Season>(&season, || format!("location difficulty {id} season"))?,
        report_id: ReportId(row.try_get("report_id")?),
    })
}
