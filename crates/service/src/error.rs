//! Typed error enum for the service layer.
//!
//! Unifies storage and parsing failures so callers can tell a bad record
//! from a broken database without downcasting.

use carpatlas_core::CoreError;
use carpatlas_storage::StorageError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Storage operation failed (DB, not found, duplicate, etc.).
    #[error("storage: {0}")]
    Storage(#[from] StorageError),

    /// Route text or a label could not be parsed.
    #[error("parse: {0}")]
    Parse(#[from] CoreError),

    /// Report carries no route description.
    #[error("report {title:?} ({url}) has no route description")]
    MissingRoute { title: String, url: String },

    /// Record is unusable as given (empty name).
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl ServiceError {
    /// Whether the failure is tied to the record rather than the store.
    pub fn is_record_error(&self) -> bool {
        !matches!(self, Self::Storage(_))
    }
}
