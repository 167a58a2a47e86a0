//! Observed daily rainfall record.

use dhmc_calendar::Date;

use crate::error::IoError;
use crate::validate;

/// Chronological daily rainfall at one station.
///
/// Dates are consecutive calendar days and depths are finite and
/// non-negative.
#[derive(Debug, Clone, PartialEq)]
pub struct ObservedRecord {
    dates: Vec<Date>,
    depths: Vec<f64>,
}

impl ObservedRecord {
    /// Creates a new `ObservedRecord` after validating inputs.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Validation`] listing every failed check:
    /// - the columns differ in length or are empty
    /// - a date is not the day after its predecessor
    /// - a depth is negative or not finite
    pub fn new(dates: Vec<Date>, depths: Vec<f64>) -> Result<Self, IoError> {
        let mut c = validate::ValidationCollector::new();
        if dates.len() != depths.len() {
            c.push(format!(
                "dates length {} != depths length {}",
                dates.len(),
                depths.len()
            ));
        }
        if dates.is_empty() {
            c.push("record has no rows");
        }
        c.extend(validate::validate_consecutive(&dates));
        c.extend(validate::validate_depths(&depths));
        c.finish()?;

        Ok(Self { dates, depths })
    }

    /// Returns the date of each row.
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// Returns the daily depths.
    pub fn depths(&self) -> &[f64] {
        &self.depths
    }

    /// Returns the year of each row.
    pub fn years(&self) -> Vec<i32> {
        self.dates.iter().map(|d| d.year()).collect()
    }

    /// Returns the month of each row.
    pub fn months(&self) -> Vec<u8> {
        self.dates.iter().map(|d| d.month()).collect()
    }

    /// Returns the first date.
    pub fn first_date(&self) -> Option<Date> {
        self.dates.first().copied()
    }

    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        self.depths.len()
    }

    /// Returns `true` if the record contains no rows.
    pub fn is_empty(&self) -> bool {
        self.depths.is_empty()
    }

    /// Consumes self and returns the date and depth columns.
    pub fn into_parts(self) -> (Vec<Date>, Vec<f64>) {
        (self.dates, self.depths)
    }
}
