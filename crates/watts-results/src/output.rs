//! `CyclusOutput`: one open store and the queries callers ask of it.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::{debug, info};
use watts_core::{ResultsConfig, TimeIndex, yearly_sum};
use watts_series::{Deployment, GroupClassifier, PrototypeGroups, accumulate, accumulate_lifetimes};
use watts_store::ResultTable;

use crate::{FuelFlow, ResultsError, ResultsResult};

/// An open Cyclus output store.
///
/// Owns the read-only connection for its lifetime.  The [`TimeIndex`] is
/// computed once at open; every other query runs against the store on each
/// call.  Not shared across threads: concurrent readers open their own
/// `CyclusOutput` on the same file.
pub struct CyclusOutput {
    table:  ResultTable,
    time:   TimeIndex,
    config: ResultsConfig,
}

impl CyclusOutput {
    /// Open the store at `path` and read its time index.
    pub fn open(path: &Path, config: ResultsConfig) -> ResultsResult<Self> {
        let table = ResultTable::open(path, &config)?;
        let time = table.time_index()?;
        info!(path = %path.display(), %time, "cyclus output opened");
        Ok(Self { table, time, config })
    }

    pub fn time_index(&self) -> &TimeIndex {
        &self.time
    }

    pub fn config(&self) -> &ResultsConfig {
        &self.config
    }

    /// Underlying table, for ad-hoc queries.
    pub fn table(&self) -> &ResultTable {
        &self.table
    }

    /// Distinct commodity names appearing in `Transactions`.
    ///
    /// Order is whatever SQLite enumerates; do not rely on it.
    pub fn commodities(&self) -> ResultsResult<Vec<String>> {
        Ok(self.table.commodities()?)
    }

    /// Per-step transacted quantity of `commodity`, length `duration`.
    ///
    /// Fails with [`ResultsError::Schema`] when any of the commodity's
    /// transactions point at a missing resource row; an inner join would
    /// otherwise drop that quantity without notice.
    pub fn monthly_quantity(&self, commodity: &str) -> ResultsResult<Vec<f64>> {
        let orphans = self.table.orphaned_transactions(commodity)?;
        if orphans > 0 {
            return Err(ResultsError::Schema { commodity: commodity.to_owned(), orphans });
        }
        let rows = self.table.quantity_by_time(commodity)?;
        Ok(accumulate(&rows, "time", Some("quantity"), self.time.duration())?)
    }

    /// Yearly transacted quantity for each of `commodities`, in the given order.
    pub fn fuel_demands<S: AsRef<str>>(&self, commodities: &[S]) -> ResultsResult<FuelFlow> {
        let names: Vec<String> = commodities.iter().map(|c| c.as_ref().to_owned()).collect();
        let mut flow = FuelFlow::zeros(names, self.time.years());
        for (i, commodity) in commodities.iter().enumerate() {
            let yearly = yearly_sum(&self.monthly_quantity(commodity.as_ref())?);
            flow.row_mut(i).copy_from_slice(&yearly);
        }
        debug!(commodities = commodities.len(), years = self.time.years(), "fuel demands built");
        Ok(flow)
    }

    /// Yearly transacted quantity of every commodity in the store.
    pub fn mass_flow_by_commodity(&self) -> ResultsResult<BTreeMap<String, Vec<f64>>> {
        let commodities = self.commodities()?;
        Ok(self.fuel_demands(commodities.as_slice())?.into_map())
    }

    /// Deployed power per prototype group, plus nameplate capacities.
    ///
    /// A prototype belongs to the last of `group_names` it contains; anything
    /// else lands under `legacy_key`.
    pub fn deployment_by_prototype_group<S: AsRef<str>>(
        &self,
        group_names: &[S],
        legacy_key:  &str,
    ) -> ResultsResult<Deployment> {
        let groups = PrototypeGroups::new(group_names.iter().map(|g| g.as_ref()), legacy_key);
        self.deployment_with(&groups)
    }

    /// Like [`Self::deployment_by_prototype_group`] with a caller-supplied classifier.
    pub fn deployment_with<C: GroupClassifier>(&self, classifier: &C) -> ResultsResult<Deployment> {
        let rows = self.table.reactor_power_rows(&self.config.reactor_spec_pattern)?;
        Ok(accumulate_lifetimes(
            &rows,
            classifier,
            self.time.duration(),
            self.config.power_scale,
        )?)
    }
}
