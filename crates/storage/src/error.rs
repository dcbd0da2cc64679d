//! Typed error enum for the storage layer.
//!
//! Callers match on specific failure modes (missing row, unique violation,
//! transient DB errors) instead of downcasting opaque boxes.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    /// Row not found for expected-present entity.
    #[error("not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    /// Unique constraint violation.
    #[error("duplicate: {0}")]
    Duplicate(String),

    /// Value rejected by a check constraint (e.g. a blank alias).
    #[error("constraint violation: {0}")]
    Constraint(String),

    /// SQL / connection / timeout failure.
    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),

    /// Row data could not be turned into a domain type.
    #[error("data corruption: {context}")]
    DataCorruption {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("migration error: {0}")]
    Migration(String),
}

impl StorageError {
    pub(crate) fn not_found(entity: &'static str, id: impl ToString) -> Self {
        Self::NotFound { entity, id: id.to_string() }
    }

    pub(crate) fn corrupt(
        context: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::DataCorruption { context: context.into(), source: Box::new(source) }
    }
}

/// Custom `From<sqlx::Error>` instead of a blanket `#[from]`.
///
/// - `RowNotFound` → `NotFound` (generic; callers remap with entity context)
/// - SQLSTATE 23505 → `Duplicate`
/// - SQLSTATE 23503 → `NotFound` (the referenced row does not exist)
/// - SQLSTATE 23514 → `Constraint`
/// - Everything else → `Database`
impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        let mapped = match &err {
            sqlx::Error::RowNotFound => Some(Self::NotFound { entity: "row", id: "unknown".into() }),
            sqlx::Error::Database(db_err) => match db_err.code().as_deref() {
                Some("23505") => Some(Self::Duplicate(db_err.message().to_owned())),
                Some("23503") => Some(Self::NotFound {
                    entity: "referenced row",
                    id: db_err.constraint().unwrap_or("unknown").to_owned(),
                }),
                Some("23514") => Some(Self::Constraint(db_err.message().to_owned())),
                _ => None,
            },
            _ => None,
        };
        mapped.unwrap_or_else(|| Self::Database(err))
    }
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;
    use std::fmt;

    use sqlx::error::{DatabaseError, ErrorKind};

    use super::*;

    #[derive(Debug)]
    struct PgFailure {
        code: &'static str,
        constraint: Option<&'static str>,
    }

    impl fmt::Display for PgFailure {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "pg failure {}", self.code)
        }
    }

    impl std::error::Error for PgFailure {}

    impl DatabaseError for PgFailure {
        fn message(&self) -> &str {
            "pg failure"
        }

        fn code(&self) -> Option<Cow<'_, str>> {
            Some(Cow::Borrowed(self.code))
        }

        fn as_error(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
            self
        }

        fn as_error_mut(&mut self) -> &mut (dyn std::error::Error + Send + Sync + 'static) {
            self
        }

        fn into_error(self: Box<Self>) -> Box<dyn std::error::Error + Send + Sync + 'static> {
            self
        }

        fn constraint(&self) -> Option<&str> {
            self.constraint
        }

        fn kind(&self) -> ErrorKind {
            match self.code {
                "23505" => ErrorKind::UniqueViolation,
                "23503" => ErrorKind::ForeignKeyViolation,
                "23514" => ErrorKind::CheckViolation,
                _ => ErrorKind::Other,
            }
        }
    }

    fn pg_error(code: &'static str, constraint: Option<&'static str>) -> sqlx::Error {
        sqlx::Error::Database(Box::new(PgFailure { code, constraint }))
    }

    #[test]
    fn test_unique_violation_maps_to_duplicate() {
        assert!(matches!(StorageError::from(pg_error("23505", None)), StorageError::Duplicate(_)));
    }

    #[test]
    fn test_foreign_key_violation_maps_to_not_found() {
        let err = StorageError::from(pg_error("23503", Some("location_names_location_id_fkey")));
        assert!(matches!(
            err,
            StorageError::NotFound { entity: "referenced row", ref id } if id == "location_names_location_id_fkey"
        ));
    }

    #[test]
    fn test_check_violation_maps_to_constraint() {
        assert!(matches!(StorageError::from(pg_error("23514", None)), StorageError::Constraint(_)));
    }

    #[test]
    fn test_other_sqlstate_stays_a_database_error() {
        assert!(matches!(StorageError::from(pg_error("40001", None)), StorageError::Database(_)));
    }

    #[test]
    fn test_row_not_found_maps_to_not_found() {
        let err = StorageError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, StorageError::NotFound { entity: "row", .. }));
    }

    #[test]
    fn test_pool_timeout_stays_a_database_error() {
        let err = StorageError::from(sqlx::Error::PoolTimedOut);
        assert!(matches!(err, StorageError::Database(sqlx::Error::PoolTimedOut)));
    }

    #[test]
    fn test_not_found_message_names_entity() {
        let err = StorageError::not_found("location", 42);
        assert_eq!(err.to_string(), "not found: location with id 42");
    }
}
