//! The `ResultTable` read-only store handle.

use std::path::{Path, PathBuf};

use rusqlite::types::ValueRef;
use rusqlite::{Connection, OpenFlags, Params};
use tracing::{debug, trace};
use watts_core::{AgentId, AgentPowerRow, Cell, InfoRow, ResultsConfig, Row, TimeIndex};

use crate::queries;
use crate::{StoreError, StoreResult};

/// A read-only view over one simulation store.
///
/// Every method runs a fresh query; nothing read from the store is cached.
pub struct ResultTable {
    conn: Connection,
    path: PathBuf,
}

impl ResultTable {
    /// Open `path` read-only.
    ///
    /// Fails with [`StoreError::NotFound`] when the file is missing and with
    /// [`StoreError::Format`] when its extension is not
    /// `config.store_extension`.  Both checks run before SQLite is touched.
    pub fn open(path: &Path, config: &ResultsConfig) -> StoreResult<Self> {
        if !path.exists() {
            return Err(StoreError::NotFound(path.to_path_buf()));
        }
        let ext_ok = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e == config.store_extension);
        if !ext_ok {
            return Err(StoreError::Format {
                path:     path.to_path_buf(),
                expected: config.store_extension.clone(),
            });
        }

        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(|source| StoreError::Query { sql: "<open>".to_owned(), source })?;

        debug!(path = %path.display(), "store opened");
        Ok(Self { conn, path: path.to_path_buf() })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    // ── Untyped queries ───────────────────────────────────────────────────

    /// Run `sql` and return every row as a column-name → cell map.
    pub fn query<P: Params>(&self, sql: &str, params: P) -> StoreResult<Vec<Row>> {
        let mut stmt = self.conn.prepare(sql).map_err(StoreError::query(sql))?;
        let names: Vec<String> = stmt.column_names().into_iter().map(str::to_owned).collect();

        let mut rows = stmt.query(params).map_err(StoreError::query(sql))?;
        let mut out = Vec::new();
        while let Some(r) = rows.next().map_err(StoreError::query(sql))? {
            let mut row = Row::new();
            for (i, name) in names.iter().enumerate() {
                let value = r.get_ref(i).map_err(StoreError::query(sql))?;
                row.insert(name, to_cell(value));
            }
            out.push(row);
        }
        trace!(rows = out.len(), sql, "query complete");
        Ok(out)
    }

    // ── Typed queries ─────────────────────────────────────────────────────

    /// All rows of the `Info` table.
    pub fn info_rows(&self) -> StoreResult<Vec<InfoRow>> {
        let sql = queries::INFO;
        let mut stmt = self.conn.prepare(sql).map_err(StoreError::query(sql))?;
        let rows = stmt
            .query_map([], |r| {
                Ok(InfoRow {
                    initial_year:  r.get(0)?,
                    initial_month: r.get(1)?,
                    duration:      r.get(2)?,
                })
            })
            .map_err(StoreError::query(sql))?;
        rows.collect::<Result<_, _>>().map_err(StoreError::query(sql))
    }

    /// Compute the store's [`TimeIndex`] from its single `Info` row.
    pub fn time_index(&self) -> StoreResult<TimeIndex> {
        let time = TimeIndex::from_info_rows(&self.info_rows()?)?;
        debug!(%time, "time index computed");
        Ok(time)
    }

    /// Reactor agents (by `Spec LIKE spec_pattern`) with their first non-zero
    /// power report, ordered by `AgentId`.
    pub fn reactor_power_rows(&self, spec_pattern: &str) -> StoreResult<Vec<AgentPowerRow>> {
        let sql = queries::REACTOR_POWER;
        let mut stmt = self.conn.prepare(sql).map_err(StoreError::query(sql))?;
        let rows = stmt
            .query_map([spec_pattern], |r| {
                Ok(AgentPowerRow {
                    agent_id:   AgentId(r.get(0)?),
                    prototype:  r.get(1)?,
                    enter_time: r.get(2)?,
                    lifetime:   r.get(3)?,
                    spec:       r.get(4)?,
                    value:      r.get(5)?,
                })
            })
            .map_err(StoreError::query(sql))?;
        rows.collect::<Result<_, _>>().map_err(StoreError::query(sql))
    }

    /// Distinct commodity names in database enumeration order.
    pub fn commodities(&self) -> StoreResult<Vec<String>> {
        let sql = queries::COMMODITIES;
        let mut stmt = self.conn.prepare(sql).map_err(StoreError::query(sql))?;
        let rows = stmt
            .query_map([], |r| r.get::<_, String>(0))
            .map_err(StoreError::query(sql))?;
        rows.collect::<Result<_, _>>().map_err(StoreError::query(sql))
    }

    /// Per-step summed quantity of `commodity`; columns `time` and `quantity`.
    pub fn quantity_by_time(&self, commodity: &str) -> StoreResult<Vec<Row>> {
        self.query(queries::QUANTITY_BY_TIME, [commodity])
    }

    /// Number of `commodity` transactions that reference a missing resource.
    pub fn orphaned_transactions(&self, commodity: &str) -> StoreResult<u64> {
        let sql = queries::ORPHANED_TRANSACTIONS;
        let n: i64 = self
            .conn
            .query_row(sql, [commodity], |r| r.get(0))
            .map_err(StoreError::query(sql))?;
        Ok(n.max(0) as u64)
    }
}

fn to_cell(value: ValueRef<'_>) -> Cell {
    match value {
        ValueRef::Null       => Cell::Null,
        ValueRef::Integer(i) => Cell::Integer(i),
        ValueRef::Real(r)    => Cell::Real(r),
        ValueRef::Text(t)    => Cell::Text(String::from_utf8_lossy(t).into_owned()),
        ValueRef::Blob(b)    => Cell::Blob(b.to_vec()),
    }
}
