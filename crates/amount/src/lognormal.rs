//! Log-normal fit of the inter-annual variability of wet-day statistics.

use dhmc_calendar::MonthYearIndex;
use dhmc_stats::{ln_or_zero, mean, pearson_correlation, pop_sd};
use tracing::{debug, warn};

use crate::config::AmountConfig;
use crate::error::AmountError;
use crate::sample::{YearlySampleStats, yearly_sample_stats};

/// Log-normal parameters of one month.
///
/// `mu_mean`/`sigma_mean` are the mean and population standard deviation
/// across years of the log of the yearly wet-day mean; `mu_std`/`sigma_std`
/// the same for the yearly wet-day standard deviation. `corr` is the
/// Pearson correlation between the two log series, `None` when undefined.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthlyLogNormal {
    /// Mean of the log wet-day means.
    pub mu_mean: f64,
    /// Standard deviation of the log wet-day means.
    pub sigma_mean: f64,
    /// Mean of the log wet-day standard deviations.
    pub mu_std: f64,
    /// Standard deviation of the log wet-day standard deviations.
    pub sigma_std: f64,
    /// Correlation between log means and log standard deviations.
    pub corr: Option<f64>,
}

impl MonthlyLogNormal {
    /// Fits one month from its yearly wet-day means and standard deviations.
    ///
    /// Zero statistics stay zero in log space, so years without enough wet
    /// days pull the fit towards zero.
    pub fn fit(yearly_means: &[f64], yearly_stds: &[f64]) -> Self {
        let log_means: Vec<f64> = yearly_means.iter().map(|&x| ln_or_zero(x)).collect();
        let log_stds: Vec<f64> = yearly_stds.iter().map(|&x| ln_or_zero(x)).collect();
        Self {
            mu_mean: mean(&log_means),
            sigma_mean: pop_sd(&log_means),
            mu_std: mean(&log_stds),
            sigma_std: pop_sd(&log_stds),
            corr: pearson_correlation(&log_means, &log_stds),
        }
    }
}

/// Amount model parameters for the twelve months.
#[derive(Debug, Clone, PartialEq)]
pub struct AmountParameters {
    months: [MonthlyLogNormal; 12],
}

impl AmountParameters {
    /// Wraps twelve monthly fits, January first.
    pub fn new(months: [MonthlyLogNormal; 12]) -> Self {
        Self { months }
    }

    /// Parameters of a 1-indexed month.
    ///
    /// # Panics
    ///
    /// Panics if `month` is 0 or greater than 12.
    pub fn month(&self, month: u8) -> &MonthlyLogNormal {
        assert!(
            (1..=12).contains(&month),
            "month must be 1..=12, got {month}"
        );
        &self.months[(month - 1) as usize]
    }

    /// All twelve monthly fits.
    pub fn months(&self) -> &[MonthlyLogNormal; 12] {
        &self.months
    }

    /// Per-month correlations, January first.
    pub fn correlations(&self) -> [Option<f64>; 12] {
        self.months.map(|m| m.corr)
    }
}

/// Fits the per-month log-normal parameters from yearly sample statistics.
pub fn estimate_amount_parameters(stats: &YearlySampleStats) -> AmountParameters {
    let months = std::array::from_fn(|mi| {
        let m = mi as u8 + 1;
        let fit = MonthlyLogNormal::fit(stats.means(m), stats.stds(m));
        if fit.corr.is_none() {
            warn!(
                month = m,
                "mean/std correlation undefined; wet days of this month will take the threshold depth"
            );
        }
        debug!(
            month = m,
            mu_mean = fit.mu_mean,
            sigma_mean = fit.sigma_mean,
            mu_std = fit.mu_std,
            sigma_std = fit.sigma_std,
            corr = ?fit.corr,
            "fitted amount parameters"
        );
        fit
    });
    AmountParameters::new(months)
}

/// Collects yearly statistics and fits the log-normal parameters in one go.
///
/// # Errors
///
/// See [`yearly_sample_stats`].
pub fn fit_amount_parameters(
    precip: &[f64],
    index: &MonthYearIndex,
    config: &AmountConfig,
) -> Result<(YearlySampleStats, AmountParameters), AmountError> {
    let stats = yearly_sample_stats(precip, index, config)?;
    let params = estimate_amount_parameters(&stats);
    Ok((stats, params))
}
