//! `watts-series` — scatter store rows into arrays aligned to a `TimeIndex`.
//!
//! | Function / type          | Produces                                          |
//! |--------------------------|---------------------------------------------------|
//! | [`accumulate`]           | one per-step series from time-stamped rows        |
//! | [`accumulate_lifetimes`] | per-group deployment series + nameplate capacities |
//! | [`GroupClassifier`]      | maps a prototype name to its group key            |
//! | [`PrototypeGroups`]      | the default classifier (class-name matching)      |
//!
//! Every series has length `duration` and starts zero-filled, so steps with no
//! rows read as zero.  Rows that address a step outside `[0, duration)` are an
//! error, never silently dropped.

pub mod builder;
pub mod deployment;

#[cfg(test)]
mod tests;

pub use builder::accumulate;
pub use deployment::{Deployment, GroupClassifier, MatchRule, PrototypeGroups, accumulate_lifetimes};
