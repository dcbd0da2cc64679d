use std::sync::Arc;

use anyhow::Result;
use carpatlas_core::constants::DEFAULT_CONCURRENCY;
use carpatlas_core::{env_non_empty, env_parse_with_default};
use carpatlas_storage::StorageBackend;

pub(crate) mod query;
pub(crate) mod scrape;

/// PostgreSQL when `DATABASE_URL` is set, otherwise a throwaway in-memory store.
pub(crate) async fn open_storage() -> Result<Arc<StorageBackend>> {
    let storage = match env_non_empty("DATABASE_URL") {
        Some(url) => StorageBackend::new_postgres(&url).await?,
        None => {
            tracing::warn!("DATABASE_URL is not set, using an in-memory store; results are not persisted");
            StorageBackend::new_memory()
        },
    };
    tracing::debug!(backend = storage.kind(), "storage ready");
    Ok(Arc::new(storage))
}

pub(crate) fn resolve_concurrency(flag: Option<usize>) -> usize {
    flag.unwrap_or_else(|| env_parse_with_default("CARPATLAS_CONCURRENCY", DEFAULT_CONCURRENCY))
        .max(1)
}
