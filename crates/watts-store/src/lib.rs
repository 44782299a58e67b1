//! `watts-store` — read-only access to a Cyclus output store.
//!
//! A store is the SQLite file Cyclus writes at the end of a run.  It is never
//! modified after the simulation completes, so [`ResultTable`] opens it with
//! read-only flags and holds the connection for its own lifetime.
//!
//! # Tables read
//!
//! | Table             | Columns used                                       |
//! |-------------------|----------------------------------------------------|
//! | `Info`            | `InitialYear`, `InitialMonth`, `Duration`          |
//! | `AgentEntry`      | `AgentId`, `Prototype`, `EnterTime`, `Lifetime`, `Spec` |
//! | `TimeSeriesPower` | `AgentId`, `Time`, `Value`                         |
//! | `Transactions`    | `Time`, `Commodity`, `ResourceId`                  |
//! | `Resources`       | `ResourceId`, `Quantity`                           |
//!
//! # Usage
//!
//! ```rust,ignore
//! use watts_core::ResultsConfig;
//! use watts_store::ResultTable;
//!
//! let table = ResultTable::open(Path::new("run.sqlite"), &ResultsConfig::default())?;
//! let time  = table.time_index()?;
//! for c in table.commodities()? {
//!     println!("{c}");
//! }
//! ```

pub mod error;
pub mod queries;
pub mod table;


pub use error::{StoreError, StoreResult};
pub use table::ResultTable;
