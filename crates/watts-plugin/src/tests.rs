//! Unit tests for watts-plugin.

use std::path::Path;

use tempfile::TempDir;

use crate::{Invocation, PluginError, PluginResult, RunOutcome, SimulatorRunner};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn tmp() -> TempDir {
    tempfile::tempdir().expect("create temp dir")
}

/// Stands in for Cyclus: writes a one-commodity store at the `-o` argument.
struct FakeCyclus {
    duration: i64,
}

impl SimulatorRunner for FakeCyclus {
    fn run(&self, invocation: &Invocation) -> PluginResult<RunOutcome> {
        let out = invocation
            .args
            .iter()
            .position(|a| a == "-o")
            .map(|i| Path::new(&invocation.args[i + 1]).to_path_buf())
            .expect("-o argument");
        // Cyclus replaces any store left by an earlier run in the same workdir.
        if out.exists() {
            std::fs::remove_file(&out).unwrap();
        }
        let conn = rusqlite::Connection::open(&out).unwrap();
        conn.execute_batch(
            "CREATE TABLE Info (InitialYear INTEGER, InitialMonth INTEGER, Duration INTEGER);
             CREATE TABLE Transactions (Time INTEGER, Commodity TEXT, ResourceId INTEGER);
             CREATE TABLE Resources (ResourceId INTEGER, Quantity REAL);
             INSERT INTO Transactions VALUES (0, 'enriched_u', 1);
             INSERT INTO Resources VALUES (1, 2.5);",
        )
        .unwrap();
        conn.execute("INSERT INTO Info VALUES (2000, 1, ?1)", [self.duration]).unwrap();
        Ok(RunOutcome { stdout: "Status: Cyclus run successful!".into(), stderr: String::new() })
    }
}

/// Succeeds without writing anything.
struct SilentRunner;

impl SimulatorRunner for SilentRunner {
    fn run(&self, _: &Invocation) -> PluginResult<RunOutcome> {
        Ok(RunOutcome::default())
    }
}

// ── Naming ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod naming {
    use std::path::PathBuf;

    use super::*;
    use crate::OutputNaming;

    #[test]
    fn xml_becomes_sqlite() {
        let n = OutputNaming::default();
        assert_eq!(n.store_file_name(Path::new("inputs/scenario.xml")), PathBuf::from("scenario.sqlite"));
    }

    #[test]
    fn extension_is_configurable() {
        let n = OutputNaming { store_extension: "h5".into() };
        assert_eq!(n.store_path(Path::new("a.xml"), Path::new("/work")), PathBuf::from("/work/a.h5"));
    }

    #[test]
    fn extensionless_template() {
        let n = OutputNaming::default();
        assert_eq!(n.store_file_name(Path::new("cyclus_input")), PathBuf::from("cyclus_input.sqlite"));
    }
}

// ── CyclusPlugin ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod plugin {
    use std::ffi::OsString;

    use super::*;
    use crate::{CyclusPlugin, PLUGIN_NAME};

    #[test]
    fn command_line_shape() {
        let p = CyclusPlugin::new("cyclus_template.xml", "cyclus");
        let inv = p.invocation(Path::new("test.xml"), Path::new("/work"));
        assert_eq!(inv.program, Path::new("cyclus"));
        assert_eq!(
            inv.args,
            vec![
                OsString::from("test.xml"),
                OsString::from("-o"),
                OsString::from("/work/cyclus_template.sqlite"),
            ]
        );
        assert_eq!(inv.workdir, Path::new("/work"));
    }

    #[test]
    fn run_returns_results_over_new_store() {
        let dir = tmp();
        let mut p = CyclusPlugin::new("cyclus_template.xml", "cyclus");
        let results = p.run(Path::new("test.xml"), dir.path(), &FakeCyclus { duration: 24 }).unwrap();

        assert_eq!(results.exec_info.plugin, PLUGIN_NAME);
        assert_eq!(results.exec_info.name, "test.xml");
        assert_eq!(results.sqlite_file().unwrap(), dir.path().join("cyclus_template.sqlite"));
        assert_eq!(results.commodities().unwrap(), vec!["enriched_u".to_owned()]);
        assert_eq!(results.mass_flow().unwrap()["enriched_u"], vec![2.5, 0.0]);
    }

    #[test]
    fn job_ids_increase() {
        let mut p = CyclusPlugin::new("t.xml", "cyclus");
        let (first, second) = (tmp(), tmp());
        let a = p.run(Path::new("t.xml"), first.path(), &FakeCyclus { duration: 12 }).unwrap();
        let b = p.run(Path::new("t.xml"), second.path(), &FakeCyclus { duration: 12 }).unwrap();
        assert!(b.exec_info.job_id > a.exec_info.job_id);
    }

    #[test]
    fn rerun_in_same_workdir_reads_new_store() {
        let dir = tmp();
        let mut p = CyclusPlugin::new("t.xml", "cyclus");
        let a = p.run(Path::new("t.xml"), dir.path(), &FakeCyclus { duration: 12 }).unwrap();
        let b = p.run(Path::new("t.xml"), dir.path(), &FakeCyclus { duration: 24 }).unwrap();
        assert_eq!(a.exec_info.job_id, 1);
        assert_eq!(b.exec_info.job_id, 2);
        assert_eq!(b.time_index().unwrap().duration(), 24);
    }

    #[test]
    fn missing_store_after_success() {
        let dir = tmp();
        let mut p = CyclusPlugin::new("t.xml", "cyclus");
        assert!(matches!(
            p.run(Path::new("t.xml"), dir.path(), &SilentRunner),
            Err(PluginError::MissingStore(_))
        ));
    }
}

// ── ProcessRunner ─────────────────────────────────────────────────────────────

#[cfg(all(test, unix))]
mod process {
    use std::ffi::OsString;
    use std::path::PathBuf;

    use super::*;
    use crate::ProcessRunner;

    fn sh(script: &str, workdir: &Path) -> Invocation {
        Invocation {
            program: PathBuf::from("sh"),
            args:    vec![OsString::from("-c"), OsString::from(script)],
            workdir: workdir.to_path_buf(),
        }
    }

    #[test]
    fn captures_stdout() {
        let dir = tmp();
        let out = ProcessRunner.run(&sh("echo hello", dir.path())).unwrap();
        assert_eq!(out.stdout.trim(), "hello");
    }

    #[test]
    fn failure_carries_stderr() {
        let dir = tmp();
        match ProcessRunner.run(&sh("echo boom >&2; exit 3", dir.path())) {
            Err(PluginError::ExecutionFailed { status, stderr, .. }) => {
                assert_eq!(status, Some(3));
                assert_eq!(stderr.trim(), "boom");
            }
            other => panic!("expected ExecutionFailed, got {other:?}"),
        }
    }

    #[test]
    fn unknown_executable() {
        let dir = tmp();
        let inv = Invocation {
            program: PathBuf::from("definitely-not-a-cyclus-binary"),
            args:    vec![],
            workdir: dir.path().to_path_buf(),
        };
        assert!(matches!(ProcessRunner.run(&inv), Err(PluginError::ExecutableNotFound(_))));
    }
}
