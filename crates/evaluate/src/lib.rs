//! DHMC evaluation: Z-scores of observed rainfall depth statistics against
//! the simulated replicate ensemble.

mod config;
mod depth;
mod error;
mod output;

use dhmc_calendar::{Date, MonthYearIndex};
use dhmc_sim::SimulatedTable;
use dhmc_stats::{mean, pop_sd};
use tracing::info;

pub use config::{EvaluateConfig, MULTIYEAR_WINDOWS};
pub use depth::{DepthStatistics, accumulated_totals, depth_statistics};
pub use error::EvaluateError;
pub use output::{ZScoreReport, to_json};

/// `(observed - mean(simulated)) / std(simulated)`, population std.
pub fn zscore(observed: f64, simulated: &[f64]) -> f64 {
    (observed - mean(simulated)) / pop_sd(simulated)
}

fn index_of(
    dates: &[Date],
    start_year: i32,
    n_years: usize,
) -> Result<MonthYearIndex, EvaluateError> {
    let years: Vec<i32> = dates.iter().map(|d| d.year()).collect();
    let months: Vec<u8> = dates.iter().map(|d| d.month()).collect();
    Ok(MonthYearIndex::new(&years, &months, start_year, n_years)?)
}

/// Compares the observed record with every replicate of `simulated`.
///
/// Statistics are taken over the `n_years` years from `start_year`; rows
/// outside that span are ignored in both records.
///
/// # Errors
///
/// Returns [`EvaluateError`] if the configuration is invalid, the observed
/// columns differ in length, the table holds no replicates, or either
/// record is not chronological.
#[tracing::instrument(skip_all, fields(start_year = start_year, n_years = n_years, n_replicates = simulated.n_replicates()))]
pub fn evaluate(
    dates: &[Date],
    observed: &[f64],
    simulated: &SimulatedTable,
    start_year: i32,
    n_years: usize,
    config: &EvaluateConfig,
) -> Result<ZScoreReport, EvaluateError> {
    config.validate()?;
    if dates.len() != observed.len() {
        return Err(EvaluateError::LengthMismatch {
            dates_len: dates.len(),
            depths_len: observed.len(),
        });
    }
    if simulated.n_replicates() == 0 {
        return Err(EvaluateError::NoReplicates);
    }

    let threshold = config.threshold();
    let obs_stats = depth_statistics(observed, &index_of(dates, start_year, n_years)?, threshold);

    let sim_index = index_of(simulated.dates(), start_year, n_years)?;
    let sim_stats: Vec<DepthStatistics> = simulated
        .replicates()
        .iter()
        .map(|r| depth_statistics(r.depths(), &sim_index, threshold))
        .collect();
    info!(
        n_replicates = sim_stats.len(),
        "computed replicate depth statistics"
    );

    let monthly = |obs: &[f64; 12], pick: fn(&DepthStatistics) -> &[f64; 12]| -> [f64; 12] {
        std::array::from_fn(|m| {
            let ensemble: Vec<f64> = sim_stats.iter().map(|s| pick(s)[m]).collect();
            zscore(obs[m], &ensemble)
        })
    };
    let multiyear = |obs: &[f64; MULTIYEAR_WINDOWS],
                     pick: fn(&DepthStatistics) -> &[f64; MULTIYEAR_WINDOWS]|
     -> [f64; MULTIYEAR_WINDOWS] {
        std::array::from_fn(|w| {
            let ensemble: Vec<f64> = sim_stats.iter().map(|s| pick(s)[w]).collect();
            zscore(obs[w], &ensemble)
        })
    };

    Ok(ZScoreReport {
        daily_mean: monthly(&obs_stats.daily_mean, |s| &s.daily_mean),
        daily_std: monthly(&obs_stats.daily_std, |s| &s.daily_std),
        monthly_mean: monthly(&obs_stats.monthly_mean, |s| &s.monthly_mean),
        monthly_std: monthly(&obs_stats.monthly_std, |s| &s.monthly_std),
        multiyear_mean: multiyear(&obs_stats.multiyear_mean, |s| &s.multiyear_mean),
        multiyear_std: multiyear(&obs_stats.multiyear_std, |s| &s.multiyear_std),
    })
}
