//! ReportStore implementation for PgStorage.

use super::*;

use crate::traits::ReportStore;
use async_trait::async_trait;
use carpatlas_core::{LocationDifficulty, ReportKey, ReportRecord};

#[async_trait]
impl ReportStore for PgStorage {
    async fn report_exists(&self, key: &ReportKey) -> Result<bool, StorageError> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS (
                 SELECT 1 FROM reports
                  WHERE title = $1 AND author = $2 AND year = $3 AND url = $4
             )",
        )
        .bind(&key.title)
        .bind(&key.author)
        .bind(key.year)
        .bind(&key.url)
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }

    async fn create_report(
        &self,
        record: &ReportRecord,
        route_id: RouteId,
        grades: &[(LocationId, LocationDifficulty)],
    ) -> Result<Report, StorageError> {
        let mut tx = self.pool.begin().await?;
        let row = sqlx::query(
            "INSERT INTO reports
                 (title, author, trip_type, difficulty, season, year, url, file_url, route_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING id, title, author, trip_type, difficulty, season, year, url, file_url,
                       route_id, created_at",
        )
        .bind(&record.title)
        .bind(&record.author)
        .bind(record.trip_type.as_str())
        .bind(record.difficulty.map(|d| d.as_str()))
        .bind(record.season.as_str())
        .bind(record.year)
        .bind(&record.url)
        .bind(record.file_url.as_deref())
        .bind(route_id.0)
        .fetch_one(&mut *tx)
        .await?;
        let report = row_to_report(&row)?;

        for (location_id, difficulty) in grades {
            sqlx::query(
                "INSERT INTO location_difficulties (location_id, difficulty, season, report_id)
                 VALUES ($1, $2, $3, $4)",
            )
            .bind(location_id.0)
            .bind(difficulty.as_str())
            .bind(report.season.as_str())
            .bind(report.id.0)
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await?;
        Ok(report)
    }

    async fn difficulties_for_location(
        &self,
        location_id: LocationId,
    ) -> Result<Vec<LocationDifficultyRecord>, StorageError> {
        let rows = sqlx::query(
            "SELECT id, location_id, difficulty, season, report_id
               FROM location_difficulties WHERE location_id = $1 ORDER BY id",
        )
        .bind(location_id.0)
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_difficulty).collect()
    }
}
