//! SQL text for the fixed queries the results layer runs.
//!
//! Column aliases are lower case so the typed readers in [`crate::table`] and
//! ad-hoc [`watts_core::Row`] consumers see the same names.

pub const INFO: &str =
    "SELECT InitialYear AS initialyear, InitialMonth AS initialmonth, Duration AS duration \
     FROM Info";

/// One row per reactor agent that ever reported non-zero power.
///
/// `MIN(p.Time)` makes SQLite take the bare `Value` column from the agent's
/// earliest non-zero report, so the chosen value does not depend on scan order.
pub const REACTOR_POWER: &str =
    "SELECT a.AgentId AS agentid, a.Prototype AS prototype, a.EnterTime AS entertime, \
            a.Lifetime AS lifetime, a.Spec AS spec, p.Value AS value, MIN(p.Time) AS firsttime \
     FROM AgentEntry a \
     INNER JOIN TimeSeriesPower p ON a.AgentId = p.AgentId \
     WHERE a.Spec LIKE ?1 AND p.Value != 0 \
     GROUP BY a.AgentId \
     ORDER BY a.AgentId";

pub const COMMODITIES: &str = "SELECT DISTINCT Commodity AS commodity FROM Transactions";

/// Transacted quantity of one commodity, summed per time step.
pub const QUANTITY_BY_TIME: &str =
    "SELECT t.Time AS time, SUM(r.Quantity) AS quantity \
     FROM Transactions t \
     INNER JOIN Resources r ON t.ResourceId = r.ResourceId \
     WHERE t.Commodity = ?1 \
     GROUP BY t.Time \
     ORDER BY t.Time";

/// Transactions of one commodity whose resource row is missing.
pub const ORPHANED_TRANSACTIONS: &str =
    "SELECT COUNT(*) \
     FROM Transactions t \
     LEFT JOIN Resources r ON t.ResourceId = r.ResourceId \
     WHERE t.Commodity = ?1 AND r.ResourceId IS NULL";
