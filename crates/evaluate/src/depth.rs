//! Depth statistics of a single daily series at daily, monthly and
//! multi-year resolution.

use dhmc_calendar::MonthYearIndex;
use dhmc_stats::{mean, pop_sd};

use crate::config::MULTIYEAR_WINDOWS;

/// Wet-day depth statistics of one series.
///
/// Empty samples (a month that is never wet) give NaN.
#[derive(Debug, Clone, PartialEq)]
pub struct DepthStatistics {
    /// Mean wet-day depth per calendar month, over the whole period.
    pub daily_mean: [f64; 12],
    /// Population std of wet-day depths per calendar month.
    pub daily_std: [f64; 12],
    /// Mean across years of the monthly wet-day totals.
    pub monthly_mean: [f64; 12],
    /// Population std across years of the monthly wet-day totals.
    pub monthly_std: [f64; 12],
    /// Mean of the `v`-year accumulated totals, `v = 1..=10`.
    pub multiyear_mean: [f64; MULTIYEAR_WINDOWS],
    /// Population std of the `v`-year accumulated totals.
    pub multiyear_std: [f64; MULTIYEAR_WINDOWS],
}

/// `window`-year trailing sums of `annual`, one per year.
///
/// Sum `k` covers years `k - window + 1 ..= k`; indices before the first
/// year wrap around to the end of the series.
pub fn accumulated_totals(annual: &[f64], window: usize) -> Vec<f64> {
    let n = annual.len();
    (0..n)
        .map(|k| {
            (0..window)
                .map(|j| annual[(k + n * window - j) % n])
                .sum()
        })
        .collect()
}

/// Computes [`DepthStatistics`] for `depths` over the years of `index`.
///
/// Days with depth at or above `threshold` are wet; only wet days
/// contribute to any total.
pub fn depth_statistics(depths: &[f64], index: &MonthYearIndex, threshold: f64) -> DepthStatistics {
    let n_years = index.n_years();
    let mut wet_depths: [Vec<f64>; 12] = Default::default();
    let mut monthly_totals: [Vec<f64>; 12] = std::array::from_fn(|_| vec![0.0; n_years]);
    let mut annual = vec![0.0; n_years];

    for (y, year) in index.years().enumerate() {
        for month in 1..=12u8 {
            let m = (month - 1) as usize;
            for &x in index.select(depths, year, month) {
                if x >= threshold {
                    wet_depths[m].push(x);
                    monthly_totals[m][y] += x;
                    annual[y] += x;
                }
            }
        }
    }

    let mut multiyear_mean = [0.0; MULTIYEAR_WINDOWS];
    let mut multiyear_std = [0.0; MULTIYEAR_WINDOWS];
    for w in 0..MULTIYEAR_WINDOWS {
        let totals = accumulated_totals(&annual, w + 1);
        multiyear_mean[w] = mean(&totals);
        multiyear_std[w] = pop_sd(&totals);
    }

    DepthStatistics {
        daily_mean: std::array::from_fn(|m| mean(&wet_depths[m])),
        daily_std: std::array::from_fn(|m| pop_sd(&wet_depths[m])),
        monthly_mean: std::array::from_fn(|m| mean(&monthly_totals[m])),
        monthly_std: std::array::from_fn(|m| pop_sd(&monthly_totals[m])),
        multiyear_mean,
        multiyear_std,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use dhmc_calendar::StudyPeriod;

    #[test]
    fn accumulated_totals_wrap() {
        let a = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(accumulated_totals(&a, 1), vec![1.0, 2.0, 3.0, 4.0]);
        // k = 0 wraps to the last year.
        assert_eq!(accumulated_totals(&a, 2), vec![5.0, 3.0, 5.0, 7.0]);
        assert_eq!(accumulated_totals(&a, 4), vec![10.0; 4]);
    }

    #[test]
    fn accumulated_totals_longer_than_record() {
        let a = [1.0, 2.0];
        assert_eq!(accumulated_totals(&a, 3), vec![4.0, 5.0]);
        assert!(accumulated_totals(&[], 3).is_empty());
    }

    #[test]
    fn statistics_of_constant_series() {
        let period = StudyPeriod::new(2001, 10).unwrap();
        let dates = period.dates();
        let years: Vec<i32> = dates.iter().map(|d| d.year()).collect();
        let months: Vec<u8> = dates.iter().map(|d| d.month()).collect();
        let index = MonthYearIndex::new(&years, &months, 2001, 10).unwrap();
        // 2.0 mm every January day, dry otherwise; 0.1 is below threshold.
        let depths: Vec<f64> = dates
            .iter()
            .map(|d| if d.month() == 1 { 2.0 } else { 0.1 })
            .collect();

        let s = depth_statistics(&depths, &index, 0.3);
        assert_abs_diff_eq!(s.daily_mean[0], 2.0);
        assert_abs_diff_eq!(s.daily_std[0], 0.0);
        assert_abs_diff_eq!(s.monthly_mean[0], 62.0);
        assert_abs_diff_eq!(s.monthly_std[0], 0.0);
        assert!(s.daily_mean[5].is_nan());
        assert_abs_diff_eq!(s.monthly_mean[5], 0.0);
        assert_abs_diff_eq!(s.multiyear_mean[0], 62.0);
        assert_abs_diff_eq!(s.multiyear_mean[9], 620.0, epsilon = 1e-9);
        assert_abs_diff_eq!(s.multiyear_std[4], 0.0, epsilon = 1e-9);
    }
}
