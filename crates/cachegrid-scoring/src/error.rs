//! Validation error types.

use thiserror::Error;

/// Result type alias for validation and scoring operations.
pub type ValidateResult<T> = Result<T, ValidateError>;

/// Fatal feasibility violations in a candidate assignment.
///
/// Any of these aborts the scoring run; an invalid solution must be
/// distinguishable from a valid zero-score one.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidateError {
    #[error("solution describes {declared} caches but only {available} are available")]
    CacheCount { declared: i64, available: usize },

    #[error("cache {cache} does not exist, cache ids run 0..{available}")]
    CacheUnknown { cache: usize, available: usize },

    #[error("cache {cache} is described more than once")]
    DuplicateCache { cache: usize },

    #[error("cache {cache} stores {stored} MB but the capacity is {capacity} MB")]
    OverCapacity { cache: usize, stored: u64, capacity: u64 },
}
