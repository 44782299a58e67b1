//! Simulation time index.
//!
//! # Design
//!
//! Cyclus advances in whole monthly time steps.  The `Info` table records the
//! calendar start (`InitialYear`, `InitialMonth`) and the number of steps
//! (`Duration`).  Step `i` maps to the fractional calendar year
//!
//!   year(i) = init_year + (i + init_month - 1) / 12
//!
//! so step 0 of a simulation starting in January 2000 is `2000.0` and step 0
//! of one starting in July 2000 is `2000.5`.
//!
//! `TimeIndex` is computed once per opened store and handed by value to
//! whatever needs array lengths or calendar coordinates.

use std::fmt;

use crate::{CoreError, CoreResult, InfoRow, year_count};

/// Number of monthly steps folded into one yearly bucket.
pub const MONTHS_PER_YEAR: usize = 12;

/// The temporal coordinate system of one simulation store.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawTimeIndex"))]
pub struct TimeIndex {
    init_year:  i32,
    init_month: u32,
    duration:   usize,
}

/// Unvalidated wire form; deserialization goes through [`TimeIndex::new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawTimeIndex {
    init_year:  i32,
    init_month: u32,
    duration:   i64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawTimeIndex> for TimeIndex {
    type Error = CoreError;

    fn try_from(raw: RawTimeIndex) -> CoreResult<Self> {
        Self::new(raw.init_year, raw.init_month, raw.duration)
    }
}

impl TimeIndex {
    /// Validate and build a time index.
    ///
    /// Fails with [`CoreError::DataIntegrity`] when `duration <= 0` or
    /// `init_month` is not a calendar month.
    pub fn new(init_year: i32, init_month: u32, duration: i64) -> CoreResult<Self> {
        if duration <= 0 {
            return Err(CoreError::DataIntegrity(format!(
                "Info.Duration must be positive, got {duration}"
            )));
        }
        if !(1..=12).contains(&init_month) {
            return Err(CoreError::DataIntegrity(format!(
                "Info.InitialMonth must be in 1..=12, got {init_month}"
            )));
        }
        let duration = usize::try_from(duration).map_err(|_| {
            CoreError::DataIntegrity(format!("Info.Duration {duration} does not fit in memory"))
        })?;
        Ok(Self { init_year, init_month, duration })
    }

    /// Build from the rows of the `Info` table, which must hold exactly one row.
    pub fn from_info_rows(rows: &[InfoRow]) -> CoreResult<Self> {
        match rows {
            [info] => {
                let month = u32::try_from(info.initial_month).map_err(|_| {
                    CoreError::DataIntegrity(format!(
                        "Info.InitialMonth must be in 1..=12, got {}",
                        info.initial_month
                    ))
                })?;
                let year = i32::try_from(info.initial_year).map_err(|_| {
                    CoreError::DataIntegrity(format!(
                        "Info.InitialYear {} out of range",
                        info.initial_year
                    ))
                })?;
                Self::new(year, month, info.duration)
            }
            _ => Err(CoreError::DataIntegrity(format!(
                "expected exactly one Info row, found {}",
                rows.len()
            ))),
        }
    }

    #[inline]
    pub fn init_year(&self) -> i32 {
        self.init_year
    }

    #[inline]
    pub fn init_month(&self) -> u32 {
        self.init_month
    }

    /// Number of monthly steps.  Always positive.
    #[inline]
    pub fn duration(&self) -> usize {
        self.duration
    }

    /// Number of yearly buckets, `ceil(duration / 12)`.
    #[inline]
    pub fn years(&self) -> usize {
        year_count(self.duration)
    }

    /// Fractional calendar year of step `step`.
    #[inline]
    pub fn year_of(&self, step: usize) -> f64 {
        self.init_year as f64 + (step as f64 + self.init_month as f64 - 1.0) / MONTHS_PER_YEAR as f64
    }

    /// Calendar coordinate of every step; length == `duration`.
    pub fn year_coordinates(&self) -> Vec<f64> {
        (0..self.duration).map(|i| self.year_of(i)).collect()
    }

    /// A zero-filled series of length `duration`.
    #[inline]
    pub fn zeros(&self) -> Vec<f64> {
        vec![0.0; self.duration]
    }
}

impl fmt::Display for TimeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{:02} + {} months",
            self.init_year, self.init_month, self.duration
        )
    }
}
