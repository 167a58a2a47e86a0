//! Error types for the dhmc-amount crate.

/// Error type for all fallible operations in the dhmc-amount crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum AmountError {
    /// Returned when input data is empty.
    #[error("input data is empty")]
    EmptyData,

    /// Returned when input contains NaN or infinity.
    #[error("input data contains non-finite values")]
    NonFiniteData,

    /// Returned when the indexed period has no years.
    #[error("index covers no years")]
    EmptyPeriod,

    /// Returned when a configuration parameter is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when per-month yearly series differ in length.
    #[error("month {month}: yearly series length mismatch ({expected} years expected, got {got})")]
    YearCountMismatch {
        /// 1-indexed month.
        month: u8,
        /// Expected number of years.
        expected: usize,
        /// Actual length.
        got: usize,
    },
}
