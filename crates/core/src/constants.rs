//! Shared constants for carpatlas.

/// Distance in km below which two coordinate-bearing records of the same type
/// are the same place.
pub const DEFAULT_MERGE_THRESHOLD_KM: f64 = 10.0;

/// Maximum anchor-to-candidate distance in km accepted when resolving a route stop.
pub const DEFAULT_STOP_THRESHOLD_KM: f64 = 100.0;

/// Mean Earth radius used by the haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Records between two progress log lines during a scrape run.
pub const PROGRESS_LOG_INTERVAL: u64 = 100;

/// PostgreSQL connection pool: maximum connections.
pub const PG_POOL_MAX_CONNECTIONS: u32 = 10;

/// PostgreSQL connection pool: acquire timeout in seconds.
pub const PG_POOL_ACQUIRE_TIMEOUT_SECS: u64 = 10;

/// PostgreSQL connection pool: idle timeout in seconds.
pub const PG_POOL_IDLE_TIMEOUT_SECS: u64 = 300;

/// Records resolved at once by a scrape run when nothing else is configured.
pub const DEFAULT_CONCURRENCY: usize = 1;
