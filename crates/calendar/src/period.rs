//! Study period and the shared decade/year/month calendar walk.

use rand::Rng;

use crate::date::Date;
use crate::error::CalendarError;
use crate::gregorian::days_in_month;
use crate::sequence::date_sequence;

/// Number of years in one decade of the study period.
pub const DEFAULT_YEARS_PER_DECADE: usize = 10;

/// A run of whole calendar years starting on January 1 of `start_year`,
/// split into consecutive decades.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StudyPeriod {
    start_year: i32,
    n_years: usize,
    years_per_decade: usize,
}

impl StudyPeriod {
    /// Creates a study period made of 10-year decades.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidPeriod`] if `n_years` is zero or not a
    /// whole number of decades.
    pub fn new(start_year: i32, n_years: usize) -> Result<Self, CalendarError> {
        Self::with_years_per_decade(start_year, n_years, DEFAULT_YEARS_PER_DECADE)
    }

    /// Creates a study period with a custom decade length.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidPeriod`] if `n_years` or
    /// `years_per_decade` is zero, or `n_years` is not a multiple of
    /// `years_per_decade`.
    pub fn with_years_per_decade(
        start_year: i32,
        n_years: usize,
        years_per_decade: usize,
    ) -> Result<Self, CalendarError> {
        if n_years == 0 {
            return Err(CalendarError::InvalidPeriod {
                reason: "n_years must be greater than 0".to_string(),
            });
        }
        if years_per_decade == 0 {
            return Err(CalendarError::InvalidPeriod {
                reason: "years_per_decade must be greater than 0".to_string(),
            });
        }
        if n_years % years_per_decade != 0 {
            return Err(CalendarError::InvalidPeriod {
                reason: format!(
                    "n_years ({n_years}) is not a whole number of {years_per_decade}-year decades"
                ),
            });
        }
        Ok(Self {
            start_year,
            n_years,
            years_per_decade,
        })
    }

    /// First calendar year of the period.
    pub fn start_year(&self) -> i32 {
        self.start_year
    }

    /// Last calendar year of the period (inclusive).
    pub fn end_year(&self) -> i32 {
        self.start_year + self.n_years as i32 - 1
    }

    /// Number of years in the period.
    pub fn n_years(&self) -> usize {
        self.n_years
    }

    /// Number of years per decade.
    pub fn years_per_decade(&self) -> usize {
        self.years_per_decade
    }

    /// Number of decades, `floor(n_years / years_per_decade)`.
    pub fn n_decades(&self) -> usize {
        self.n_years / self.years_per_decade
    }

    /// Calendar year of the `year_in_decade`-th year of `decade`.
    pub fn year(&self, decade: usize, year_in_decade: usize) -> i32 {
        self.start_year + (decade * self.years_per_decade + year_in_decade) as i32
    }

    /// Walks the period month by month in decade, year, month order.
    pub fn walk(&self) -> CalendarWalk {
        CalendarWalk {
            period: *self,
            decade: 0,
            year_in_decade: 0,
            month: 1,
        }
    }

    /// Total number of days covered by the walk.
    pub fn n_days(&self) -> usize {
        self.walk().map(|b| b.n_days as usize).sum()
    }

    /// Every date of the period, in walk order.
    pub fn dates(&self) -> Vec<Date> {
        match Date::new(self.start_year, 1, 1) {
            Ok(start) => date_sequence(start, self.n_days()),
            Err(_) => Vec::new(),
        }
    }
}

/// One calendar month visited by the [`CalendarWalk`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthBlock {
    /// Zero-based decade index.
    pub decade: usize,
    /// Zero-based year within the decade.
    pub year_in_decade: usize,
    /// Calendar year.
    pub year: i32,
    /// Month (1..=12).
    pub month: u8,
    /// Number of days to generate for this month.
    pub n_days: u8,
}

impl MonthBlock {
    /// Lazily draws one independent `U[0, 1)` value per day of this month.
    ///
    /// Calling it again starts a fresh sequence from the generator's current
    /// position.
    pub fn uniforms<R: Rng>(self, rng: &mut R) -> impl Iterator<Item = f64> + '_ {
        (0..self.n_days).map(move |_| rng.random::<f64>())
    }
}

/// Iterator over the months of a [`StudyPeriod`].
///
/// Shared by the simulator and the observed-record checks so that day
/// counting lives in one place.
#[derive(Debug, Clone)]
pub struct CalendarWalk {
    period: StudyPeriod,
    decade: usize,
    year_in_decade: usize,
    month: u8,
}

impl Iterator for CalendarWalk {
    type Item = MonthBlock;

    fn next(&mut self) -> Option<MonthBlock> {
        if self.decade >= self.period.n_decades() {
            return None;
        }
        let year = self.period.year(self.decade, self.year_in_decade);
        let block = MonthBlock {
            decade: self.decade,
            year_in_decade: self.year_in_decade,
            year,
            month: self.month,
            n_days: days_in_month(year, self.month).unwrap_or(0),
        };

        self.month += 1;
        if self.month > 12 {
            self.month = 1;
            self.year_in_decade += 1;
            if self.year_in_decade >= self.period.years_per_decade {
                self.year_in_decade = 0;
                self.decade += 1;
            }
        }
        Some(block)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let done = (self.decade * self.period.years_per_decade + self.year_in_decade) * 12
            + (self.month as usize - 1);
        let total = self.period.n_decades() * self.period.years_per_decade * 12;
        let left = total.saturating_sub(done);
        (left, Some(left))
    }
}

impl ExactSizeIterator for CalendarWalk {}
