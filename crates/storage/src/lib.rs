//! Storage layer for carpatlas
//!
//! Repository traits for the name index, canonical locations, routes and
//! reports, with a PostgreSQL backend, an in-memory backend and an enum that
//! dispatches between them.

mod backend;
pub mod error;
mod memory;
mod pg_migrations;
pub mod pg_storage;
#[cfg(test)]
mod tests;
pub mod traits;

pub use backend::StorageBackend;
pub use error::StorageError;
pub use memory::MemoryStorage;
pub use pg_storage::PgStorage;
pub use traits::AtlasStats;
