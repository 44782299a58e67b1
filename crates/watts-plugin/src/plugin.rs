//! The Cyclus plugin.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use tracing::info;
use watts_core::ResultsConfig;
use watts_results::{ExecInfo, ResultsCyclus};

use crate::{Invocation, OutputNaming, PluginError, PluginResult, SimulatorRunner};

/// Plugin name recorded in every [`ExecInfo`].
pub const PLUGIN_NAME: &str = "Cyclus";

/// Runs Cyclus on rendered inputs derived from one template.
///
/// # Example
///
/// ```rust,ignore
/// let mut plugin = CyclusPlugin::new("scenario.xml", "cyclus");
/// let results = plugin.run(Path::new("scenario.xml"), workdir, &ProcessRunner)?;
/// println!("{:?}", results.mass_flow()?);
/// ```
#[derive(Clone, Debug)]
pub struct CyclusPlugin {
    template_file: PathBuf,
    executable:    PathBuf,
    naming:        OutputNaming,
    config:        ResultsConfig,
    show_stdout:   bool,
    show_stderr:   bool,
    next_job:      u64,
}

impl CyclusPlugin {
    pub fn new(template_file: impl Into<PathBuf>, executable: impl Into<PathBuf>) -> Self {
        Self {
            template_file: template_file.into(),
            executable:    executable.into(),
            naming:        OutputNaming::default(),
            config:        ResultsConfig::default(),
            show_stdout:   false,
            show_stderr:   false,
            next_job:      1,
        }
    }

    pub fn naming(mut self, naming: OutputNaming) -> Self {
        self.naming = naming;
        self
    }

    pub fn results_config(mut self, config: ResultsConfig) -> Self {
        self.config = config;
        self
    }

    /// Log the simulator's stdout / stderr at `info` level after each run.
    pub fn show_output(mut self, stdout: bool, stderr: bool) -> Self {
        self.show_stdout = stdout;
        self.show_stderr = stderr;
        self
    }

    pub fn template_file(&self) -> &Path {
        &self.template_file
    }

    /// Where a run in `workdir` writes its store.
    pub fn store_path(&self, workdir: &Path) -> PathBuf {
        self.naming.store_path(&self.template_file, workdir)
    }

    /// `[input, "-o", store]`: the arguments passed after the executable.
    pub fn arguments(&self, input: &Path, workdir: &Path) -> Vec<OsString> {
        vec![
            input.as_os_str().to_owned(),
            OsString::from("-o"),
            self.store_path(workdir).into_os_string(),
        ]
    }

    pub fn invocation(&self, input: &Path, workdir: &Path) -> Invocation {
        Invocation {
            program: self.executable.clone(),
            args:    self.arguments(input, workdir),
            workdir: workdir.to_path_buf(),
        }
    }

    /// Run the simulator once on the rendered `input`.
    ///
    /// Fails with the runner's error (including the stderr transcript on a
    /// non-zero exit) or with [`PluginError::MissingStore`] when the run
    /// succeeded without writing the store.
    pub fn run<R: SimulatorRunner>(
        &mut self,
        input:   &Path,
        workdir: &Path,
        runner:  &R,
    ) -> PluginResult<ResultsCyclus> {
        let job_id = self.next_job;
        self.next_job += 1;
        let start_unix_secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| d.as_secs() as i64);

        let invocation = self.invocation(input, workdir);
        info!(job_id, input = %input.display(), "running cyclus");
        let outcome = runner.run(&invocation)?;
        if self.show_stdout && !outcome.stdout.is_empty() {
            info!(job_id, stdout = %outcome.stdout, "cyclus stdout");
        }
        if self.show_stderr && !outcome.stderr.is_empty() {
            info!(job_id, stderr = %outcome.stderr, "cyclus stderr");
        }

        let store = self.store_path(workdir);
        if !store.exists() {
            return Err(PluginError::MissingStore(store));
        }

        let exec_info = ExecInfo {
            job_id,
            plugin: PLUGIN_NAME.to_owned(),
            name: input
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
            start_unix_secs,
        };
        Ok(ResultsCyclus::new(
            exec_info,
            vec![input.to_path_buf()],
            vec![store],
            self.config.clone(),
        ))
    }
}
