use std::result::Result as StdResult;

use thiserror::Error;

/// Errors raised by pure domain logic (parsing labels and route text).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("route description is empty or has no stops")]
    EmptyRoute,

    #[error("invalid location type: {0}")]
    InvalidLocationType(String),

    #[error("invalid difficulty grade: {0}")]
    InvalidDifficulty(String),

    #[error("invalid trip difficulty: {0}")]
    InvalidTripDifficulty(String),

    #[error("invalid season: {0}")]
    InvalidSeason(String),

    #[error("invalid trip type: {0}")]
    InvalidTripType(String),
}

pub type Result<T> = StdResult<T, CoreError>;
