//! Monthly → yearly roll-ups.

use crate::MONTHS_PER_YEAR;

/// Number of yearly buckets needed to cover `months` steps.
#[inline]
pub fn year_count(months: usize) -> usize {
    months.div_ceil(MONTHS_PER_YEAR)
}

/// Sum consecutive 12-step chunks of a monthly series.
///
/// Chunk boundaries sit at absolute indices where `i % 12 == 0`.  A trailing
/// partial chunk is kept as an undersized sum, so the output length is always
/// `ceil(monthly.len() / 12)`.  The roll-up is lossy: the monthly shape inside
/// each year cannot be recovered from the result.
pub fn yearly_sum(monthly: &[f64]) -> Vec<f64> {
    monthly
        .chunks(MONTHS_PER_YEAR)
        .map(|chunk| chunk.iter().sum())
        .collect()
}
