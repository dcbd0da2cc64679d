//! RouteStore implementation for PgStorage.

use super::*;

use crate::traits::RouteStore;
use async_trait::async_trait;

#[async_trait]
impl RouteStore for PgStorage {
    async fn create_route(&self) -> Result<RouteId, StorageError> {
        let id: i64 = sqlx::query_scalar("INSERT INTO routes DEFAULT VALUES RETURNING id")
            .fetch_one(&self.pool)
            .await?;
        Ok(RouteId(id))
    }

    async fn append_route_stop(&self, stop: &RouteStop) -> Result<(), StorageError> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM routes WHERE id = $1)")
            .bind(stop.route_id.0)
            .fetch_one(&self.pool)
            .await?;
        if !exists {
            return Err(StorageError::not_found("route", stop.route_id));
        }

        sqlx::query(
            "INSERT INTO route_stops (route_id, stop_index, location_id, display_name)
             VALUES ($1, $2, $3, $4)",
        )
        .bind(stop.route_id.0)
        .bind(stop_index_to_i32(stop.stop_index)?)
        .bind(stop.location_id.0)
        .bind(stop.display_name.as_deref())
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn get_route_stops(&self, route_id: RouteId) -> Result<Vec<RouteStop>, StorageError> {
        let rows = sqlx::query(
            "SELECT route_id, stop_index, location_id, display_name
               FROM route_stops WHERE route_id = $1 ORDER BY stop_index",
        )
        .bind(route_id.0)
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_route_stop).collect()
    }
}
