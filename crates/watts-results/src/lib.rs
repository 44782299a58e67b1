//! `watts-results` — named derived quantities from a Cyclus run.
//!
//! # Layers
//!
//! ```text
//! ResultsCyclus     one run: exec info, inputs, outputs → locates the store
//!   └─ CyclusOutput one open store + its TimeIndex → named queries
//!        ├─ commodities()                    distinct Transactions.Commodity
//!        ├─ mass_flow_by_commodity()         commodity → yearly quantity
//!        ├─ fuel_demands(&[..])              commodity × year array
//!        └─ deployment_by_prototype_group()  group → per-step power, nameplates
//! ```
//!
//! Every query reads the store again; nothing is cached between calls.  The
//! store is immutable once Cyclus exits, so repeated calls return identical
//! results.  Callers that repeat the same query in a loop should keep the
//! returned value.
//!
//! # Usage
//!
//! ```rust,ignore
//! use watts_core::ResultsConfig;
//! use watts_results::CyclusOutput;
//!
//! let out  = CyclusOutput::open(Path::new("run.sqlite"), ResultsConfig::default())?;
//! let flow = out.mass_flow_by_commodity()?;
//! let dep  = out.deployment_by_prototype_group(&["lwr", "sfr"], "legacy")?;
//! ```

pub mod error;
pub mod flow;
pub mod output;
pub mod results;


pub use error::{ResultsError, ResultsResult};
pub use flow::FuelFlow;
pub use output::CyclusOutput;
pub use results::{ExecInfo, ResultsCyclus};
pub use watts_series::Deployment;
