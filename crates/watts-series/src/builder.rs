//! Per-step scatter of time-stamped rows.

use watts_core::{CoreError, CoreResult, Row};

/// Scatter `rows` into a zero-filled series of length `duration`.
///
/// Each row adds `row[value_field]` at index `row[time_field]`, or `1` when
/// `value_field` is `None` (a per-step count).  Several rows on the same step
/// sum.
///
/// # Errors
/// - [`CoreError::IndexOutOfRange`] when a time falls outside `[0, duration)`;
///   this means the rows and the store's `Info.Duration` disagree.
/// - [`CoreError::MissingColumn`] / [`CoreError::NonNumeric`] for absent or
///   non-numeric columns.
pub fn accumulate(
    rows:        &[Row],
    time_field:  &str,
    value_field: Option<&str>,
    duration:    usize,
) -> CoreResult<Vec<f64>> {
    let mut series = vec![0.0; duration];
    for row in rows {
        let t = row.i64(time_field)?;
        let idx = usize::try_from(t)
            .ok()
            .filter(|&i| i < duration)
            .ok_or_else(|| CoreError::IndexOutOfRange {
                what:  format!("column {time_field:?}"),
                index: t,
                duration,
            })?;
        series[idx] += match value_field {
            Some(field) => row.f64(field)?,
            None => 1.0,
        };
    }
    Ok(series)
}
