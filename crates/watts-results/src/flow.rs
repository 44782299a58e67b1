//! Two-dimensional fuel-flow array.

use std::collections::BTreeMap;

/// Yearly transacted quantity, one row per commodity, one column per year.
///
/// Stored row-major in a single `Vec`.  Row `i` belongs to `commodities[i]`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FuelFlow {
    commodities: Vec<String>,
    years:       usize,
    data:        Vec<f64>,
}

impl FuelFlow {
    /// A zero-filled `commodities.len() × years` array.
    pub fn zeros(commodities: Vec<String>, years: usize) -> Self {
        let data = vec![0.0; commodities.len() * years];
        Self { commodities, years, data }
    }

    /// `(rows, columns)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.commodities.len(), self.years)
    }

    pub fn commodities(&self) -> &[String] {
        &self.commodities
    }

    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.years..(i + 1) * self.years]
    }

    pub(crate) fn row_mut(&mut self, i: usize) -> &mut [f64] {
        &mut self.data[i * self.years..(i + 1) * self.years]
    }

    /// Yearly series for `commodity`, if it is one of the rows.
    pub fn get(&self, commodity: &str) -> Option<&[f64]> {
        self.commodities
            .iter()
            .position(|c| c == commodity)
            .map(|i| self.row(i))
    }

    /// Rows keyed by commodity name.
    pub fn into_map(self) -> BTreeMap<String, Vec<f64>> {
        let years = self.years;
        self.commodities
            .into_iter()
            .zip(self.data.chunks(years.max(1)).map(<[f64]>::to_vec))
            .collect()
    }
}
