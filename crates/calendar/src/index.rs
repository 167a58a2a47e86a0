//! (year, month) row index over a chronological daily record.

use std::ops::Range;

use crate::error::CalendarError;

/// Maps each `(year, month)` of a period to the contiguous rows holding it.
///
/// Rows whose year falls outside `start_year .. start_year + n_years` are
/// ignored. A `(year, month)` with no rows maps to an empty range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthYearIndex {
    start_year: i32,
    n_years: usize,
    ranges: Vec<Range<usize>>,
}

impl MonthYearIndex {
    /// Builds the index from parallel year and month columns.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::LengthMismatch`] if the slices differ in
    /// length, [`CalendarError::InvalidMonth`] for a month outside 1..=12,
    /// and [`CalendarError::NonContiguous`] if a month's rows are split.
    pub fn new(
        years: &[i32],
        months: &[u8],
        start_year: i32,
        n_years: usize,
    ) -> Result<Self, CalendarError> {
        if years.len() != months.len() {
            return Err(CalendarError::LengthMismatch {
                years_len: years.len(),
                months_len: months.len(),
            });
        }

        let mut ranges = vec![0..0; n_years * 12];
        for (i, (&y, &m)) in years.iter().zip(months).enumerate() {
            if !(1..=12).contains(&m) {
                return Err(CalendarError::InvalidMonth { month: m });
            }
            let Some(cell) = Self::cell(start_year, n_years, y, m) else {
                continue;
            };
            let r = &mut ranges[cell];
            if r.start == r.end {
                *r = i..i + 1;
            } else if r.end == i {
                r.end += 1;
            } else {
                return Err(CalendarError::NonContiguous { year: y, month: m });
            }
        }

        Ok(Self {
            start_year,
            n_years,
            ranges,
        })
    }

    fn cell(start_year: i32, n_years: usize, year: i32, month: u8) -> Option<usize> {
        let offset = year.checked_sub(start_year)?;
        if offset < 0 || offset as usize >= n_years || !(1..=12).contains(&month) {
            return None;
        }
        Some(offset as usize * 12 + (month - 1) as usize)
    }

    /// First indexed year.
    pub fn start_year(&self) -> i32 {
        self.start_year
    }

    /// Number of indexed years.
    pub fn n_years(&self) -> usize {
        self.n_years
    }

    /// Rows of `(year, month)`; empty when the month is absent or outside
    /// the indexed period.
    pub fn rows(&self, year: i32, month: u8) -> Range<usize> {
        Self::cell(self.start_year, self.n_years, year, month)
            .map(|c| self.ranges[c].clone())
            .unwrap_or(0..0)
    }

    /// Values of `data` belonging to `(year, month)`.
    ///
    /// `data` must be the column the index was built from (same length).
    pub fn select<'a>(&self, data: &'a [f64], year: i32, month: u8) -> &'a [f64] {
        let r = self.rows(year, month);
        data.get(r).unwrap_or(&[])
    }

    /// Iterates over the indexed calendar years.
    pub fn years(&self) -> impl Iterator<Item = i32> + use<> {
        let start = self.start_year;
        (0..self.n_years).map(move |k| start + k as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns() -> (Vec<i32>, Vec<u8>, Vec<f64>) {
        // 3 days Dec 1999, 2 days Jan 2000, 1 day Feb 2000, 1 day Jan 2001
        let years = vec![1999, 1999, 1999, 2000, 2000, 2000, 2001];
        let months = vec![12, 12, 12, 1, 1, 2, 1];
        let data = vec![0.1, 0.2, 0.3, 1.0, 2.0, 3.0, 4.0];
        (years, months, data)
    }

    #[test]
    fn rows_and_select() {
        let (years, months, data) = columns();
        let idx = MonthYearIndex::new(&years, &months, 2000, 2).unwrap();
        assert_eq!(idx.rows(2000, 1), 3..5);
        assert_eq!(idx.select(&data, 2000, 1), &[1.0, 2.0]);
        assert_eq!(idx.select(&data, 2000, 2), &[3.0]);
        assert_eq!(idx.select(&data, 2001, 1), &[4.0]);
    }

    #[test]
    fn first_row_opens_a_cell() {
        let years = vec![2000, 2000, 2000, 2000];
        let months = vec![1, 1, 2, 2];
        let idx = MonthYearIndex::new(&years, &months, 2000, 1).unwrap();
        assert_eq!(idx.rows(2000, 1), 0..2);
        assert_eq!(idx.rows(2000, 2), 2..4);
        assert_eq!(idx.rows(2000, 3), 0..0);
    }

    #[test]
    fn outside_period_is_empty() {
        let (years, months, data) = columns();
        let idx = MonthYearIndex::new(&years, &months, 2000, 2).unwrap();
        assert!(idx.select(&data, 1999, 12).is_empty());
        assert!(idx.select(&data, 2000, 7).is_empty());
        assert!(idx.select(&data, 2005, 1).is_empty());
    }

    #[test]
    fn years_iterator() {
        let (years, months, _) = columns();
        let idx = MonthYearIndex::new(&years, &months, 2000, 2).unwrap();
        assert_eq!(idx.years().collect::<Vec<_>>(), vec![2000, 2001]);
    }

    #[test]
    fn non_contiguous_is_error() {
        let years = vec![2000, 2000, 2000];
        let months = vec![1, 2, 1];
        assert_eq!(
            MonthYearIndex::new(&years, &months, 2000, 1).unwrap_err(),
            CalendarError::NonContiguous {
                year: 2000,
                month: 1
            }
        );
    }

    #[test]
    fn invalid_month_is_error() {
        assert!(matches!(
            MonthYearIndex::new(&[2000], &[13], 2000, 1),
            Err(CalendarError::InvalidMonth { month: 13 })
        ));
    }

    #[test]
    fn length_mismatch_is_error() {
        assert!(matches!(
            MonthYearIndex::new(&[2000, 2000], &[1], 2000, 1),
            Err(CalendarError::LengthMismatch { .. })
        ));
    }
}
