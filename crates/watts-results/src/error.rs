use std::path::PathBuf;

use thiserror::Error;
use watts_core::CoreError;
use watts_store::StoreError;

#[derive(Debug, Error)]
pub enum ResultsError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Core(#[from] CoreError),

    /// `Transactions` rows reference `ResourceId`s with no `Resources` row.
    #[error("{orphans} {commodity:?} transaction(s) reference missing Resources rows")]
    Schema {
        commodity: String,
        orphans:   u64,
    },

    #[error("no .{extension} store among run outputs")]
    MissingOutput { extension: String },

    #[error("expected one .{extension} store among run outputs, found {}", .found.len())]
    AmbiguousOutput {
        extension: String,
        found:     Vec<PathBuf>,
    },
}

pub type ResultsResult<T> = Result<T, ResultsError>;
