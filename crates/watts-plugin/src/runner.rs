//! The `SimulatorRunner` trait and its subprocess implementation.

use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::process::Command;

use tracing::{debug, warn};

use crate::{PluginError, PluginResult};

/// One fully specified simulator call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    pub program: PathBuf,
    pub args:    Vec<OsString>,
    pub workdir: PathBuf,
}

/// Captured transcript of a successful run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunOutcome {
    pub stdout: String,
    pub stderr: String,
}

/// Executes a simulator.
///
/// Implementations run the invocation once.  A non-zero exit must be
/// reported as [`PluginError::ExecutionFailed`] with the stderr text.
pub trait SimulatorRunner {
    fn run(&self, invocation: &Invocation) -> PluginResult<RunOutcome>;
}

/// Runs the simulator as a child process and waits for it.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProcessRunner;

impl SimulatorRunner for ProcessRunner {
    fn run(&self, invocation: &Invocation) -> PluginResult<RunOutcome> {
        debug!(program = %invocation.program.display(), args = ?invocation.args, "spawning simulator");
        let output = Command::new(&invocation.program)
            .args(&invocation.args)
            .current_dir(&invocation.workdir)
            .output()
            .map_err(|source| match source.kind() {
                ErrorKind::NotFound => PluginError::ExecutableNotFound(invocation.program.clone()),
                _ => PluginError::Spawn { program: invocation.program.clone(), source },
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        if !output.status.success() {
            warn!(program = %invocation.program.display(), status = ?output.status.code(), "simulator failed");
            return Err(PluginError::ExecutionFailed {
                program: invocation.program.clone(),
                status:  output.status.code(),
                stderr,
            });
        }
        Ok(RunOutcome { stdout, stderr })
    }
}
