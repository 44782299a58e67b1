//! `ResultsCyclus`: the record of one Cyclus run.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use watts_core::{ResultsConfig, TimeIndex};

use crate::{CyclusOutput, ResultsError, ResultsResult};

/// Who ran what, and when.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExecInfo {
    /// Monotonic per-process run counter.
    pub job_id:          u64,
    pub plugin:          String,
    /// Caller-chosen run name (usually the rendered input file name).
    pub name:            String,
    pub start_unix_secs: i64,
}

/// Inputs, outputs, and execution info of a finished Cyclus run.
///
/// Holds paths only.  [`ResultsCyclus::open`] connects to the run's store on
/// demand, so a `ResultsCyclus` can be cloned, stored, or sent between
/// threads freely.
#[derive(Clone, Debug)]
pub struct ResultsCyclus {
    pub exec_info: ExecInfo,
    pub inputs:    Vec<PathBuf>,
    pub outputs:   Vec<PathBuf>,
    config:        ResultsConfig,
}

impl ResultsCyclus {
    pub fn new(
        exec_info: ExecInfo,
        inputs:    Vec<PathBuf>,
        outputs:   Vec<PathBuf>,
        config:    ResultsConfig,
    ) -> Self {
        Self { exec_info, inputs, outputs, config }
    }

    pub fn config(&self) -> &ResultsConfig {
        &self.config
    }

    /// The single output carrying the store extension.
    pub fn sqlite_file(&self) -> ResultsResult<&Path> {
        let ext = self.config.store_extension.as_str();
        let found: Vec<&Path> = self
            .outputs
            .iter()
            .map(PathBuf::as_path)
            .filter(|p| p.extension().and_then(|e| e.to_str()) == Some(ext))
            .collect();
        match found.as_slice() {
            [one] => Ok(*one),
            [] => Err(ResultsError::MissingOutput { extension: ext.to_owned() }),
            many => Err(ResultsError::AmbiguousOutput {
                extension: ext.to_owned(),
                found:     many.iter().map(|p| p.to_path_buf()).collect(),
            }),
        }
    }

    /// Open the run's store.
    pub fn open(&self) -> ResultsResult<CyclusOutput> {
        CyclusOutput::open(self.sqlite_file()?, self.config.clone())
    }

    pub fn commodities(&self) -> ResultsResult<Vec<String>> {
        self.open()?.commodities()
    }

    pub fn time_index(&self) -> ResultsResult<TimeIndex> {
        Ok(self.open()?.time_index().clone())
    }

    /// Commodity → yearly transacted quantity.
    pub fn mass_flow(&self) -> ResultsResult<BTreeMap<String, Vec<f64>>> {
        self.open()?.mass_flow_by_commodity()
    }
}
