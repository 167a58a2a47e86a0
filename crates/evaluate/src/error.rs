//! Evaluation error types.

use dhmc_calendar::CalendarError;

/// Errors that can occur during evaluation.
#[derive(Debug, thiserror::Error)]
pub enum EvaluateError {
    /// The configuration is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    /// Observed dates and depths have different lengths.
    #[error("length mismatch: {dates_len} dates but {depths_len} depths")]
    LengthMismatch { dates_len: usize, depths_len: usize },

    /// The simulated table holds no replicates.
    #[error("simulated table has no replicates")]
    NoReplicates,

    /// A record could not be indexed by (year, month).
    #[error(transparent)]
    Calendar(#[from] CalendarError),

    /// JSON serialization failed.
    #[error("serialization error: {reason}")]
    Serialization { reason: String },
}
