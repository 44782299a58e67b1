use std::path::PathBuf;

use thiserror::Error;
use watts_results::ResultsError;

#[derive(Debug, Error)]
pub enum PluginError {
    #[error("executable {0} not found")]
    ExecutableNotFound(PathBuf),

    #[error("failed to start {program}: {source}")]
    Spawn {
        program: PathBuf,
        #[source]
        source:  std::io::Error,
    },

    #[error("{program} exited with status {status:?}\n{stderr}")]
    ExecutionFailed {
        program: PathBuf,
        /// `None` when the process was killed by a signal.
        status:  Option<i32>,
        stderr:  String,
    },

    #[error("run finished but store {0} was not written")]
    MissingStore(PathBuf),

    #[error(transparent)]
    Results(#[from] ResultsError),
}

pub type PluginResult<T> = Result<T, PluginError>;
