//! `watts-plugin` — run Cyclus on a rendered input and hand back its results.
//!
//! The results crates only read stores.  This crate is the collaborator that
//! produces one: given a rendered input file it runs the simulator once and
//! either returns a [`watts_results::ResultsCyclus`] pointing at the new store
//! or fails with the captured stderr transcript.  There is no retry, restart,
//! or timeout handling.
//!
//! | Type              | Role                                                  |
//! |-------------------|-------------------------------------------------------|
//! | [`OutputNaming`]  | template file name → store file name                  |
//! | [`CyclusPlugin`]  | command line, job numbering, outputs → results        |
//! | [`SimulatorRunner`] | executes an [`Invocation`]                          |
//! | [`ProcessRunner`] | `std::process::Command` implementation                |

pub mod error;
pub mod naming;
pub mod plugin;
pub mod runner;

#[cfg(test)]
mod tests;

pub use error::{PluginError, PluginResult};
pub use naming::OutputNaming;
pub use plugin::{CyclusPlugin, PLUGIN_NAME};
pub use runner::{Invocation, ProcessRunner, RunOutcome, SimulatorRunner};
