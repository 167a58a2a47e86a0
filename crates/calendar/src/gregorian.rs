//! Gregorian month lengths and the leap-year rule.

use crate::error::CalendarError;

/// Number of days in each month of a common year (index 0 = January).
pub const MONTH_DAYS: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Returns `true` for Gregorian leap years.
///
/// A year is a leap year when it is divisible by 4 and not by 100, or when
/// it is divisible by 400.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` (1..=12) of `year`.
///
/// February has 29 days in leap years and 28 otherwise.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is outside 1..=12.
pub fn days_in_month(year: i32, month: u8) -> Result<u8, CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth { month });
    }
    if month == 2 && is_leap_year(year) {
        Ok(29)
    } else {
        Ok(MONTH_DAYS[(month - 1) as usize])
    }
}

/// Number of days in `year`.
pub fn days_in_year(year: i32) -> u16 {
    if is_leap_year(year) { 366 } else { 365 }
}
