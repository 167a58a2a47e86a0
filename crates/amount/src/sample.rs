//! Per-(month, year) wet-day sample statistics.

use dhmc_calendar::MonthYearIndex;
use dhmc_stats::{mean, pop_sd};
use tracing::debug;

use crate::config::AmountConfig;
use crate::error::AmountError;

/// Wet-day sample size, mean and standard deviation for every month of
/// every year of the period.
///
/// Grids are month-major: `mean(m)[k]` is month `m` of the `k`-th year.
/// A cell whose sample size does not exceed the configured minimum holds
/// zero mean and zero standard deviation.
#[derive(Debug, Clone, PartialEq)]
pub struct YearlySampleStats {
    start_year: i32,
    counts: [Vec<usize>; 12],
    means: [Vec<f64>; 12],
    stds: [Vec<f64>; 12],
}

impl YearlySampleStats {
    /// Assembles statistics from month-major grids.
    ///
    /// # Errors
    ///
    /// Returns [`AmountError::YearCountMismatch`] if the grids do not all
    /// have the same number of years, or [`AmountError::EmptyPeriod`] if
    /// they have none.
    pub fn from_grids(
        start_year: i32,
        counts: [Vec<usize>; 12],
        means: [Vec<f64>; 12],
        stds: [Vec<f64>; 12],
    ) -> Result<Self, AmountError> {
        let n_years = means[0].len();
        if n_years == 0 {
            return Err(AmountError::EmptyPeriod);
        }
        for m in 0..12 {
            for got in [counts[m].len(), means[m].len(), stds[m].len()] {
                if got != n_years {
                    return Err(AmountError::YearCountMismatch {
                        month: m as u8 + 1,
                        expected: n_years,
                        got,
                    });
                }
            }
        }
        Ok(Self {
            start_year,
            counts,
            means,
            stds,
        })
    }

    /// First year of the grids.
    pub fn start_year(&self) -> i32 {
        self.start_year
    }

    /// Number of years.
    pub fn n_years(&self) -> usize {
        self.means[0].len()
    }

    /// Wet-day counts of a 1-indexed month, one per year.
    pub fn counts(&self, month: u8) -> &[usize] {
        &self.counts[(month - 1) as usize]
    }

    /// Wet-day means of a 1-indexed month, one per year.
    pub fn means(&self, month: u8) -> &[f64] {
        &self.means[(month - 1) as usize]
    }

    /// Wet-day standard deviations of a 1-indexed month, one per year.
    pub fn stds(&self, month: u8) -> &[f64] {
        &self.stds[(month - 1) as usize]
    }

    /// Number of (month, year) cells left at zero for lack of wet days.
    pub fn n_insufficient(&self) -> usize {
        self.means.iter().flatten().filter(|&&m| m == 0.0).count()
    }
}

/// Collects wet-day statistics per (month, year).
///
/// For each year of `index` and each month, takes the depths at or above
/// the threshold. When there are more than `min_sample` of them the cell
/// gets their mean and population standard deviation, otherwise zero.
///
/// # Errors
///
/// Returns [`AmountError`] if `precip` is empty or non-finite, the index
/// covers no years, or the configuration is invalid.
pub fn yearly_sample_stats(
    precip: &[f64],
    index: &MonthYearIndex,
    config: &AmountConfig,
) -> Result<YearlySampleStats, AmountError> {
    config.validate()?;
    if precip.is_empty() {
        return Err(AmountError::EmptyData);
    }
    if precip.iter().any(|p| !p.is_finite()) {
        return Err(AmountError::NonFiniteData);
    }
    if index.n_years() == 0 {
        return Err(AmountError::EmptyPeriod);
    }

    let threshold = config.threshold();
    let n_years = index.n_years();
    let mut counts: [Vec<usize>; 12] = std::array::from_fn(|_| Vec::with_capacity(n_years));
    let mut means: [Vec<f64>; 12] = std::array::from_fn(|_| Vec::with_capacity(n_years));
    let mut stds: [Vec<f64>; 12] = std::array::from_fn(|_| Vec::with_capacity(n_years));

    for m in 1..=12u8 {
        let mi = (m - 1) as usize;
        for year in index.years() {
            let wet: Vec<f64> = index
                .select(precip, year, m)
                .iter()
                .copied()
                .filter(|&p| p >= threshold)
                .collect();
            counts[mi].push(wet.len());
            if wet.len() > config.min_sample() {
                means[mi].push(mean(&wet));
                stds[mi].push(pop_sd(&wet));
            } else {
                debug!(year, month = m, wet_days = wet.len(), "insufficient wet-day sample");
                means[mi].push(0.0);
                stds[mi].push(0.0);
            }
        }
    }

    YearlySampleStats::from_grids(index.start_year(), counts, means, stds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// Two years, every month 3 days long.
    fn record(depths: impl Fn(usize, u8, usize) -> f64) -> (Vec<f64>, MonthYearIndex) {
        let mut years = Vec::new();
        let mut months = Vec::new();
        let mut precip = Vec::new();
        for k in 0..2usize {
            for m in 1..=12u8 {
                for d in 0..3 {
                    years.push(2000 + k as i32);
                    months.push(m);
                    precip.push(depths(k, m, d));
                }
            }
        }
        let index = MonthYearIndex::new(&years, &months, 2000, 2).unwrap();
        (precip, index)
    }

    #[test]
    fn mean_and_population_std() {
        let (precip, index) = record(|_, _, d| [1.0, 2.0, 6.0][d]);
        let stats = yearly_sample_stats(&precip, &index, &AmountConfig::new()).unwrap();
        assert_eq!(stats.n_years(), 2);
        assert_eq!(stats.start_year(), 2000);
        for m in 1..=12u8 {
            assert_eq!(stats.counts(m), &[3, 3]);
            assert_relative_eq!(stats.means(m)[0], 3.0);
            // Population std of [1, 2, 6] = sqrt(14 / 3).
            assert_relative_eq!(stats.stds(m)[1], (14.0f64 / 3.0).sqrt(), epsilon = 1e-12);
        }
        assert_eq!(stats.n_insufficient(), 0);
    }

    #[test]
    fn dry_days_are_excluded() {
        // Third day below threshold leaves only two wet days: not enough.
        let (precip, index) = record(|_, _, d| [1.0, 2.0, 0.1][d]);
        let stats = yearly_sample_stats(&precip, &index, &AmountConfig::new()).unwrap();
        assert_eq!(stats.counts(4), &[2, 2]);
        assert_eq!(stats.means(4), &[0.0, 0.0]);
        assert_eq!(stats.stds(4), &[0.0, 0.0]);
        assert_eq!(stats.n_insufficient(), 24);
    }

    #[test]
    fn min_sample_is_exclusive() {
        let (precip, index) = record(|_, _, _| 5.0);
        let cfg = AmountConfig::new().with_min_sample(3);
        let stats = yearly_sample_stats(&precip, &index, &cfg).unwrap();
        assert_eq!(stats.means(1), &[0.0, 0.0]);

        let cfg = AmountConfig::new().with_min_sample(2);
        let stats = yearly_sample_stats(&precip, &index, &cfg).unwrap();
        assert_eq!(stats.means(1), &[5.0, 5.0]);
        assert_eq!(stats.stds(1), &[0.0, 0.0]);
    }

    #[test]
    fn threshold_depth_counts_as_wet() {
        let (precip, index) = record(|_, _, _| 0.3);
        let stats = yearly_sample_stats(&precip, &index, &AmountConfig::new()).unwrap();
        assert_eq!(stats.counts(12), &[3, 3]);
    }

    #[test]
    fn errors() {
        let (precip, index) = record(|_, _, _| 1.0);
        let cfg = AmountConfig::new();
        assert!(matches!(
            yearly_sample_stats(&[], &index, &cfg),
            Err(AmountError::EmptyData)
        ));
        let mut bad = precip.clone();
        bad[5] = f64::NAN;
        assert!(matches!(
            yearly_sample_stats(&bad, &index, &cfg),
            Err(AmountError::NonFiniteData)
        ));
        assert!(matches!(
            yearly_sample_stats(&precip, &index, &cfg.with_threshold(-1.0)),
            Err(AmountError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn from_grids_checks_lengths() {
        let ok: [Vec<f64>; 12] = std::array::from_fn(|_| vec![0.0; 3]);
        let counts: [Vec<usize>; 12] = std::array::from_fn(|_| vec![0; 3]);
        let mut short = ok.clone();
        short[5].pop();
        let err = YearlySampleStats::from_grids(2000, counts.clone(), ok.clone(), short).unwrap_err();
        assert!(matches!(
            err,
            AmountError::YearCountMismatch {
                month: 6,
                expected: 3,
                got: 2
            }
        ));

        let empty: [Vec<f64>; 12] = std::array::from_fn(|_| Vec::new());
        let no_counts: [Vec<usize>; 12] = std::array::from_fn(|_| Vec::new());
        assert!(matches!(
            YearlySampleStats::from_grids(2000, no_counts, empty.clone(), empty),
            Err(AmountError::EmptyPeriod)
        ));
    }
}
