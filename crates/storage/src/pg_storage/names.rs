//! NameIndex implementation for PgStorage.

use super::*;

use crate::traits::NameIndex;
use async_trait::async_trait;

#[async_trait]
impl NameIndex for PgStorage {
    async fn locations_by_name(&self, name: &str) -> Result<Vec<CanonicalLocation>, StorageError> {
        let rows = sqlx::query(&format!(
            "SELECT {LOCATION_COLUMNS}
               FROM location_names n
               JOIN locations l ON l.id = n.location_id
              WHERE n.name = $1
              ORDER BY n.id"
        ))
        .bind(name)
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_location).collect()
    }

    async fn register_alias(&self, name: &str, location_id: LocationId) -> Result<bool, StorageError> {
        let result = sqlx::query(
            "INSERT INTO location_names (name, location_id) VALUES ($1, $2)
             ON CONFLICT (name, location_id) DO NOTHING",
        )
        .bind(name)
        .bind(location_id.0)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn aliases_for(&self, location_id: LocationId) -> Result<Vec<String>, StorageError> {
        let names: Vec<String> =
            sqlx::query_scalar("SELECT name FROM location_names WHERE location_id = $1 ORDER BY id")
                .bind(location_id.0)
                .fetch_all(&self.pool)
                .await?;
        Ok(names)
    }
}
