//! Replicate series and their assembly under the observed date columns.

use dhmc_calendar::Date;

use crate::error::SimError;

/// One simulated run: daily depths in record order.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplicateSeries {
    depths: Vec<f64>,
}

impl ReplicateSeries {
    /// Wraps a sequence of daily depths.
    pub fn new(depths: Vec<f64>) -> Self {
        Self { depths }
    }

    /// Daily depths.
    pub fn depths(&self) -> &[f64] {
        &self.depths
    }

    /// Number of days.
    pub fn len(&self) -> usize {
        self.depths.len()
    }

    /// `true` if the series has no days.
    pub fn is_empty(&self) -> bool {
        self.depths.is_empty()
    }
}

/// Date columns plus one row per replicate.
///
/// Viewed as a matrix it has `3 + n_replicates` rows (year, month, day,
/// then the replicates) and one column per day.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulatedTable {
    dates: Vec<Date>,
    replicates: Vec<ReplicateSeries>,
}

impl SimulatedTable {
    /// Dates of the columns.
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// Replicates in generation order.
    pub fn replicates(&self) -> &[ReplicateSeries] {
        &self.replicates
    }

    /// Number of replicates.
    pub fn n_replicates(&self) -> usize {
        self.replicates.len()
    }

    /// Number of matrix rows (`3 + n_replicates`).
    pub fn n_rows(&self) -> usize {
        3 + self.replicates.len()
    }

    /// Number of matrix columns (days).
    pub fn n_days(&self) -> usize {
        self.dates.len()
    }

    /// Row `i` of the matrix view: 0 = year, 1 = month, 2 = day, then the
    /// replicates. `None` past the last row.
    pub fn row(&self, i: usize) -> Option<Vec<f64>> {
        match i {
            0 => Some(self.dates.iter().map(|d| f64::from(d.year())).collect()),
            1 => Some(self.dates.iter().map(|d| f64::from(d.month())).collect()),
            2 => Some(self.dates.iter().map(|d| f64::from(d.day())).collect()),
            _ => self.replicates.get(i - 3).map(|r| r.depths().to_vec()),
        }
    }

    /// Depths of every replicate on day `j`, in replicate order.
    pub fn day_values(&self, j: usize) -> impl Iterator<Item = f64> + '_ {
        self.replicates.iter().map(move |r| r.depths()[j])
    }
}

/// Stacks replicates under the observed date columns.
///
/// No value is transformed.
///
/// # Errors
///
/// Returns [`SimError::LengthMismatch`] if any replicate's length differs
/// from the number of dates.
pub fn assemble(
    dates: &[Date],
    replicates: Vec<ReplicateSeries>,
) -> Result<SimulatedTable, SimError> {
    for (i, r) in replicates.iter().enumerate() {
        if r.len() != dates.len() {
            return Err(SimError::LengthMismatch {
                replicate: i,
                expected: dates.len(),
                got: r.len(),
            });
        }
    }
    Ok(SimulatedTable {
        dates: dates.to_vec(),
        replicates,
    })
}
