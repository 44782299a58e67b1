//! Row types produced by store queries.
//!
//! [`Row`] is the untyped form: a column-name → [`Cell`] map returned by ad-hoc
//! queries.  Column lookup is case-insensitive, matching SQLite's own
//! treatment of identifiers (`Time`, `time`, and `TIME` name the same column).
//!
//! [`InfoRow`] and [`AgentPowerRow`] are the typed forms of the two fixed
//! queries the results layer depends on.

use std::collections::BTreeMap;

use crate::{AgentId, CoreError, CoreResult};

// ── Cell ──────────────────────────────────────────────────────────────────────

/// One SQLite value, mirroring the five storage classes.
#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Blob(Vec<u8>),
}

impl Cell {
    /// Storage-class name, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Cell::Null       => "NULL",
            Cell::Integer(_) => "INTEGER",
            Cell::Real(_)    => "REAL",
            Cell::Text(_)    => "TEXT",
            Cell::Blob(_)    => "BLOB",
        }
    }

    /// Numeric value of an `INTEGER` or `REAL` cell.
    #[inline]
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Cell::Integer(i) => Some(i as f64),
            Cell::Real(r)    => Some(r),
            _ => None,
        }
    }

    /// Integer value; `REAL` cells are accepted only when they hold a whole number.
    #[inline]
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Cell::Integer(i) => Some(i),
            Cell::Real(r) if r.fract() == 0.0 => Some(r as i64),
            _ => None,
        }
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            _ => None,
        }
    }
}

// ── Row ───────────────────────────────────────────────────────────────────────

/// One result row keyed by lower-cased column name.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Row {
    cells: BTreeMap<String, Cell>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, handy for tests and in-memory fixtures.
    pub fn with(mut self, column: &str, cell: Cell) -> Self {
        self.insert(column, cell);
        self
    }

    pub fn insert(&mut self, column: &str, cell: Cell) {
        self.cells.insert(column.to_ascii_lowercase(), cell);
    }

    pub fn get(&self, column: &str) -> Option<&Cell> {
        self.cells.get(&column.to_ascii_lowercase())
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Column names in lower case, sorted.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.cells.keys().map(String::as_str)
    }

    fn cell(&self, column: &str) -> CoreResult<&Cell> {
        self.get(column)
            .ok_or_else(|| CoreError::MissingColumn(column.to_owned()))
    }

    /// Numeric value of `column`.
    pub fn f64(&self, column: &str) -> CoreResult<f64> {
        let cell = self.cell(column)?;
        cell.as_f64().ok_or_else(|| CoreError::NonNumeric {
            column: column.to_owned(),
            found:  cell.kind(),
        })
    }

    /// Integer value of `column`.
    pub fn i64(&self, column: &str) -> CoreResult<i64> {
        let cell = self.cell(column)?;
        cell.as_i64().ok_or_else(|| CoreError::NonNumeric {
            column: column.to_owned(),
            found:  cell.kind(),
        })
    }

    /// Text value of `column`, or `None` when the cell is not `TEXT`.
    pub fn text(&self, column: &str) -> CoreResult<Option<&str>> {
        Ok(self.cell(column)?.as_str())
    }
}

impl FromIterator<(String, Cell)> for Row {
    fn from_iter<I: IntoIterator<Item = (String, Cell)>>(iter: I) -> Self {
        let mut row = Row::new();
        for (column, cell) in iter {
            row.insert(&column, cell);
        }
        row
    }
}

// ── Typed rows ────────────────────────────────────────────────────────────────

/// One row of the `Info` table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InfoRow {
    pub initial_year:  i64,
    pub initial_month: i64,
    /// Number of monthly time steps.
    pub duration:      i64,
}

/// A reactor agent joined with one of its non-zero power reports.
#[derive(Clone, Debug, PartialEq)]
pub struct AgentPowerRow {
    pub agent_id:   AgentId,
    pub prototype:  String,
    /// `AgentEntry.EnterTime`.  The deployment window opens at `enter_time - 1`.
    pub enter_time: i64,
    /// Steps the agent stays deployed; negative means "until the end".
    pub lifetime:   i64,
    pub spec:       String,
    /// Raw `TimeSeriesPower.Value`, before scaling.
    pub value:      f64,
}
