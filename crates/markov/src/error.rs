//! Error types for the dhmc-markov crate.

use crate::state::WetState;

/// Error type for all fallible operations in the dhmc-markov crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum MarkovError {
    /// Returned when input data is empty.
    #[error("input data is empty")]
    EmptyData,

    /// Returned when there are too few observations.
    #[error("insufficient data: got {n} observations, need at least {min}")]
    InsufficientData {
        /// Number of observations provided.
        n: usize,
        /// Minimum required.
        min: usize,
    },

    /// Returned when input contains NaN or infinity.
    #[error("input data contains non-finite values")]
    NonFiniteData,

    /// Returned when a month value is outside 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month value.
        month: u8,
    },

    /// Returned when the wet/dry threshold is invalid.
    #[error("invalid threshold: {reason}")]
    InvalidThreshold {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when a probability supplied directly is outside [0, 1].
    #[error("invalid probability for month {month}: {value} (must be in [0, 1])")]
    InvalidProbability {
        /// 1-indexed month.
        month: u8,
        /// The invalid value.
        value: f64,
    },

    /// Returned when the number of decades is zero.
    #[error("number of decades must be at least 1")]
    NoDecades,

    /// Returned when precip and month slices differ in length.
    #[error("length mismatch: precip has {precip_len} elements, months has {months_len}")]
    LengthMismatch {
        /// Length of the precipitation slice.
        precip_len: usize,
        /// Length of the months slice.
        months_len: usize,
    },

    /// Returned under [`DegeneratePolicy::Fail`](crate::DegeneratePolicy::Fail)
    /// when a month has no transitions out of a state.
    #[error("degenerate {from}-state persistence in decade {decade}, month {month}: no transitions observed")]
    DegenerateProbability {
        /// Zero-based decade index.
        decade: usize,
        /// 1-indexed month.
        month: u8,
        /// State with no observed outgoing transitions.
        from: WetState,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_empty_data() {
        assert_eq!(MarkovError::EmptyData.to_string(), "input data is empty");
    }

    #[test]
    fn error_insufficient_data() {
        let e = MarkovError::InsufficientData { n: 2, min: 3 };
        assert_eq!(
            e.to_string(),
            "insufficient data: got 2 observations, need at least 3"
        );
    }

    #[test]
    fn error_invalid_month() {
        let e = MarkovError::InvalidMonth { month: 13 };
        assert_eq!(e.to_string(), "invalid month: 13 (must be 1..=12)");
    }

    #[test]
    fn error_invalid_probability() {
        let e = MarkovError::InvalidProbability {
            month: 4,
            value: 1.5,
        };
        assert_eq!(
            e.to_string(),
            "invalid probability for month 4: 1.5 (must be in [0, 1])"
        );
    }

    #[test]
    fn error_length_mismatch() {
        let e = MarkovError::LengthMismatch {
            precip_len: 100,
            months_len: 99,
        };
        assert_eq!(
            e.to_string(),
            "length mismatch: precip has 100 elements, months has 99"
        );
    }

    #[test]
    fn error_degenerate() {
        let e = MarkovError::DegenerateProbability {
            decade: 1,
            month: 7,
            from: WetState::Dry,
        };
        assert_eq!(
            e.to_string(),
            "degenerate dry-state persistence in decade 1, month 7: no transitions observed"
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<MarkovError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<MarkovError>();
    }
}
