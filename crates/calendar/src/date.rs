//! Gregorian calendar date.

use crate::error::CalendarError;
use crate::gregorian::days_in_month;

/// A validated date in the proleptic Gregorian calendar.
///
/// Ordering is chronological (year, then month, then day).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date {
    year: i32,
    month: u8,
    day: u8,
}

impl Date {
    /// Creates a new `Date` from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError`] if the month is outside 1..=12 or the day
    /// does not exist in that month of that year.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        let max_day = days_in_month(year, month)?;
        if day == 0 || day > max_day {
            return Err(CalendarError::InvalidDay {
                year,
                month,
                day,
                max_day,
            });
        }
        Ok(Self { year, month, day })
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns the next calendar day.
    ///
    /// Month and year boundaries roll over, and February 29 is produced in
    /// leap years only.
    pub fn next(self) -> Self {
        // Month is always valid here, so the lookup cannot fail.
        let last = days_in_month(self.year, self.month).unwrap_or(31);
        if self.day < last {
            Self {
                day: self.day + 1,
                ..self
            }
        } else if self.month < 12 {
            Self {
                year: self.year,
                month: self.month + 1,
                day: 1,
            }
        } else {
            Self {
                year: self.year + 1,
                month: 1,
                day: 1,
            }
        }
    }
}

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_valid() {
        let date = Date::new(1979, 1, 1).unwrap();
        assert_eq!(date.year(), 1979);
        assert_eq!(date.month(), 1);
        assert_eq!(date.day(), 1);
    }

    #[test]
    fn new_invalid_month() {
        assert_eq!(
            Date::new(2000, 0, 1).unwrap_err(),
            CalendarError::InvalidMonth { month: 0 }
        );
    }

    #[test]
    fn new_feb_29_common_year() {
        assert_eq!(
            Date::new(1981, 2, 29).unwrap_err(),
            CalendarError::InvalidDay {
                year: 1981,
                month: 2,
                day: 29,
                max_day: 28,
            }
        );
    }

    #[test]
    fn new_feb_29_leap_year() {
        assert!(Date::new(1980, 2, 29).is_ok());
    }

    #[test]
    fn new_day_zero() {
        assert!(Date::new(1980, 3, 0).is_err());
    }

    #[test]
    fn next_within_month() {
        let next = Date::new(2000, 1, 15).unwrap().next();
        assert_eq!(next, Date::new(2000, 1, 16).unwrap());
    }

    #[test]
    fn next_leap_february() {
        let d = Date::new(1980, 2, 28).unwrap();
        assert_eq!(d.next(), Date::new(1980, 2, 29).unwrap());
        assert_eq!(d.next().next(), Date::new(1980, 3, 1).unwrap());
    }

    #[test]
    fn next_common_february() {
        let d = Date::new(1981, 2, 28).unwrap();
        assert_eq!(d.next(), Date::new(1981, 3, 1).unwrap());
    }

    #[test]
    fn next_year_wrap() {
        let d = Date::new(1979, 12, 31).unwrap();
        assert_eq!(d.next(), Date::new(1980, 1, 1).unwrap());
    }

    #[test]
    fn ordering() {
        let a = Date::new(1979, 12, 31).unwrap();
        let b = Date::new(1980, 1, 1).unwrap();
        let c = Date::new(1980, 2, 1).unwrap();
        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn display() {
        let d = Date::new(1979, 3, 5).unwrap();
        assert_eq!(d.to_string(), "1979-03-05");
    }
}
