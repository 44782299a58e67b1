//! Error types for watts-store.

use std::path::PathBuf;

use thiserror::Error;
use watts_core::CoreError;

/// Errors that can occur when opening or querying a store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store {0} does not exist")]
    NotFound(PathBuf),

    #[error("store {path} must have extension .{expected}")]
    Format {
        path:     PathBuf,
        expected: String,
    },

    #[error("query failed: {source} (sql: {sql})")]
    Query {
        sql:    String,
        #[source]
        source: rusqlite::Error,
    },

    #[error(transparent)]
    Core(#[from] CoreError),
}

impl StoreError {
    pub(crate) fn query(sql: &str) -> impl FnOnce(rusqlite::Error) -> StoreError + '_ {
        move |source| StoreError::Query { sql: sql.to_owned(), source }
    }
}

/// Alias for `Result<T, StoreError>`.
pub type StoreResult<T> = Result<T, StoreError>;
