//! StatsStore implementation for PgStorage.

use super::*;

use crate::traits::{AtlasStats, StatsStore};
use async_trait::async_trait;

impl PgStorage {
    async fn count(&self, table: &str) -> Result<u64, StorageError> {
        let n: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&self.pool)
            .await?;
        Ok(u64::try_from(n).unwrap_or(0))
    }
}

#[async_trait]
impl StatsStore for PgStorage {
    async fn get_stats(&self) -> Result<AtlasStats, StorageError> {
        Ok(AtlasStats {
            location_count: self.count("locations").await?,
            alias_count: self.count("location_names").await?,
            route_count: self.count("routes").await?,
            route_stop_count: self.count("route_stops").await?,
            report_count: self.count("reports").await?,
            difficulty_count: self.count("location_difficulties").await?,
        })
    }
}
