//! LocationStore implementation for PgStorage.

use super::*;

use crate::traits::LocationStore;
use async_trait::async_trait;
use carpatlas_core::NewLocation;

#[async_trait]
impl LocationStore for PgStorage {
    async fn create_location(
        &self,
        location: &NewLocation,
        aliases: &[String],
    ) -> Result<CanonicalLocation, StorageError> {
        let mut tx = self.pool.begin().await?;
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO locations
                 (canonical_name, latitude, longitude, elevation, location_type, description)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING id",
        )
        .bind(&location.canonical_name)
        .bind(location.coordinates.map(|c| c.latitude))
        .bind(location.coordinates.map(|c| c.longitude))
        .bind(location.elevation)
        .bind(location.location_type.map(|t| t.as_str()))
        .bind(location.description.as_deref())
        .fetch_one(&mut *tx)
        .await?;

        for alias in aliases {
            sqlx::query(
                "INSERT INTO location_names (name, location_id) VALUES ($1, $2)
                 ON CONFLICT (name, location_id) DO NOTHING",
            )
            .bind(alias)
            .bind(id)
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await?;
        Ok(location.clone().into_canonical(LocationId(id)))
    }

    async fn get_location(&self, id: LocationId) -> Result<Option<CanonicalLocation>, StorageError> {
        let row = sqlx::query(&format!("SELECT {LOCATION_COLUMNS} FROM locations l WHERE l.id = $1"))
            .bind(id.0)
            .fetch_optional(&self.pool)
            .await?;
        row.as_ref().map(row_to_location).transpose()
    }

    async fn update_location_description(
        &self,
        id: LocationId,
        description: &str,
    ) -> Result<(), StorageError> {
        let result = sqlx::query("UPDATE locations SET description = $1 WHERE id = $2")
            .bind(description)
            .bind(id.0)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StorageError::not_found("location", id));
        }
        Ok(())
    }
}
