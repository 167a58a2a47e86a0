//! Error types for the dhmc-calendar crate.

/// Error type for all fallible operations in the dhmc-calendar crate.
///
/// This enum covers validation failures for month numbers, day-within-month
/// values in the Gregorian calendar, and study-period definitions.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a day number exceeds the number of days in the given month.
    #[error("invalid day: {day} for {year}-{month:02} (max {max_day})")]
    InvalidDay {
        /// The year the day was checked against.
        year: i32,
        /// The month for which the day is invalid.
        month: u8,
        /// The invalid day number that was provided.
        day: u8,
        /// The maximum valid day for the given month and year.
        max_day: u8,
    },

    /// Returned when a study period cannot be split into whole decades.
    #[error("invalid study period: {reason}")]
    InvalidPeriod {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when the rows of one (year, month) are not contiguous.
    #[error("rows for {year}-{month:02} are not contiguous (record is not chronological)")]
    NonContiguous {
        /// Year of the split month.
        year: i32,
        /// Month that appears in more than one run of rows.
        month: u8,
    },

    /// Returned when parallel year/month slices differ in length.
    #[error("length mismatch: years has {years_len} elements, months has {months_len}")]
    LengthMismatch {
        /// Length of the years slice.
        years_len: usize,
        /// Length of the months slice.
        months_len: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_month() {
        let err = CalendarError::InvalidMonth { month: 13 };
        assert_eq!(err.to_string(), "invalid month: 13 (must be 1..=12)");
    }

    #[test]
    fn error_invalid_day() {
        let err = CalendarError::InvalidDay {
            year: 1981,
            month: 2,
            day: 29,
            max_day: 28,
        };
        assert_eq!(err.to_string(), "invalid day: 29 for 1981-02 (max 28)");
    }

    #[test]
    fn error_invalid_period() {
        let err = CalendarError::InvalidPeriod {
            reason: "n_years is 0".to_string(),
        };
        assert_eq!(err.to_string(), "invalid study period: n_years is 0");
    }

    #[test]
    fn error_length_mismatch() {
        let err = CalendarError::LengthMismatch {
            years_len: 10,
            months_len: 9,
        };
        assert_eq!(
            err.to_string(),
            "length mismatch: years has 10 elements, months has 9"
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<CalendarError>();
    }
}
