//! `watts-core` — foundational types for reading Cyclus simulation output.
//!
//! This crate is a dependency of every other `watts-*` crate.  It has no
//! `watts-*` dependencies and no database dependency: everything here is a
//! plain value type or a pure function over slices.
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`, `ResourceId`                               |
//! | [`time`]        | `TimeIndex`, `MONTHS_PER_YEAR`                        |
//! | [`aggregate`]   | `yearly_sum`, `year_count`                            |
//! | [`row`]         | `Cell`, `Row`, `InfoRow`, `AgentPowerRow`             |
//! | [`config`]      | `ResultsConfig`                                       |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to config and value types.  |

pub mod aggregate;
pub mod config;
pub mod error;
pub mod ids;
pub mod row;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use aggregate::{year_count, yearly_sum};
pub use config::ResultsConfig;
pub use error::{CoreError, CoreResult};
pub use ids::{AgentId, ResourceId};
pub use row::{AgentPowerRow, Cell, InfoRow, Row};
pub use time::{MONTHS_PER_YEAR, TimeIndex};
