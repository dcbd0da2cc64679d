//! Storage backend trait abstraction
//!
//! Async domain traits implemented by the PostgreSQL and in-memory backends
//! and by the dispatching [`crate::StorageBackend`].

pub mod locations;
pub mod names;
pub mod reports;
pub mod routes;
pub mod stats;

pub use locations::LocationStore;
pub use names::NameIndex;
pub use reports::ReportStore;
pub use routes::RouteStore;
pub use stats::{AtlasStats, StatsStore};
