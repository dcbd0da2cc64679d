use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::StorageError;

/// Row counts across the atlas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtlasStats {
    pub location_count: u64,
    pub alias_count: u64,
    pub route_count: u64,
    pub route_stop_count: u64,
    pub report_count: u64,
    pub difficulty_count: u64,
}

/// Aggregate statistics.
#[async_trait]
pub trait StatsStore: Send + Sync {
    async fn get_stats(&self) -> Result<AtlasStats, StorageError>;
}
