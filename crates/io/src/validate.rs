//! Accumulated validation utilities.
//!
//! Provides [`ValidationCollector`] for gathering multiple validation errors
//! into a single [`IoError::Validation`], plus the checks applied to every
//! loaded daily record.

use dhmc_calendar::Date;

use crate::error::IoError;

// ---------------------------------------------------------------------------
// ValidationCollector
// ---------------------------------------------------------------------------

/// Accumulates validation errors and converts them into a single
/// [`IoError::Validation`].
///
/// Create a collector, push zero or more error messages, then call
/// [`finish`](Self::finish) to obtain `Ok(())` when everything is valid or a
/// single `Err` that summarises every violation.
pub(crate) struct ValidationCollector {
    errors: Vec<String>,
}

impl ValidationCollector {
    /// Create an empty collector.
    pub(crate) fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Record one validation error.
    pub(crate) fn push(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    /// Moves every error of `other` into this collector.
    pub(crate) fn extend(&mut self, other: ValidationCollector) {
        self.errors.extend(other.errors);
    }

    /// Returns `true` when no errors have been recorded.
    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the number of recorded errors.
    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.errors.len()
    }

    /// Consume the collector and return `Ok(())` if no errors were recorded,
    /// or `Err(IoError::Validation { count, details })` otherwise.
    ///
    /// The `details` string joins all messages with `"; "`.
    pub(crate) fn finish(self) -> Result<(), IoError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(IoError::Validation {
                count: self.errors.len(),
                details: self.errors.join("; "),
            })
        }
    }
}

// ---------------------------------------------------------------------------
// Record checks
// ---------------------------------------------------------------------------

/// Check that every date is the calendar day after its predecessor.
///
/// Gaps, duplicates and reversals each record one message.
pub(crate) fn validate_consecutive(dates: &[Date]) -> ValidationCollector {
    let mut c = ValidationCollector::new();

    for (i, pair) in dates.windows(2).enumerate() {
        let (prev, cur) = (pair[0], pair[1]);
        if cur != prev.next() {
            c.push(format!(
                "non-consecutive date at row {}: {cur} follows {prev}",
                i + 1
            ));
        }
    }

    c
}

/// Check that every depth is finite and non-negative.
///
/// Records one message per offending index.
pub(crate) fn validate_depths(depths: &[f64]) -> ValidationCollector {
    let mut c = ValidationCollector::new();

    for (i, &val) in depths.iter().enumerate() {
        if !val.is_finite() {
            c.push(format!("non-finite depth at row {i}: {val}"));
        } else if val < 0.0 {
            c.push(format!("negative depth at row {i}: {val}"));
        }
    }

    c
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
