//! Core error type.
//!
//! Store and results crates wrap `CoreError` as one variant of their own
//! enums via `#[from]`, so a failure raised while building a series keeps its
//! original message all the way up to the caller.

use thiserror::Error;

/// Errors raised by value construction and series arithmetic.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Metadata is missing, duplicated, or out of range.
    #[error("data integrity error: {0}")]
    DataIntegrity(String),

    /// A row addressed a time step outside the declared simulation duration.
    #[error("{what}: time index {index} outside [0, {duration})")]
    IndexOutOfRange {
        what:     String,
        index:    i64,
        duration: usize,
    },

    #[error("column {column:?} holds {found}, expected a number")]
    NonNumeric {
        column: String,
        found:  &'static str,
    },

    #[error("column {0:?} not present in row")]
    MissingColumn(String),
}

/// Shorthand result type for `watts-core`.
pub type CoreResult<T> = Result<T, CoreError>;
