//! Error types for the dhmc-sim crate.

use dhmc_amount::AmountError;
use dhmc_calendar::CalendarError;
use dhmc_markov::MarkovError;

/// Error type for all fallible operations in the dhmc-sim crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SimError {
    /// Returned when a configuration parameter is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when the record does not cover the study period exactly.
    #[error("record does not match the study period: {reason}")]
    PeriodMismatch {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when a replicate and the date columns differ in length.
    #[error("replicate {replicate}: expected {expected} days, got {got}")]
    LengthMismatch {
        /// Zero-based replicate index.
        replicate: usize,
        /// Number of dates.
        expected: usize,
        /// Replicate length.
        got: usize,
    },

    /// Transition estimation failed.
    #[error("markov estimation failed: {0}")]
    Markov(#[from] MarkovError),

    /// Amount estimation failed.
    #[error("amount estimation failed: {0}")]
    Amount(#[from] AmountError),

    /// Calendar indexing failed.
    #[error(transparent)]
    Calendar(#[from] CalendarError),
}
