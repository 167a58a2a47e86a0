//! Calibrated model and the calibration step.

use dhmc_amount::{
    AmountConfig, AmountParameters, YearlySampleStats, estimate_amount_parameters,
    yearly_sample_stats,
};
use dhmc_calendar::{Date, MonthYearIndex, StudyPeriod};
use dhmc_markov::{DecadalTransitions, MarkovConfig, estimate_decadal_transitions};
use tracing::info;

use crate::error::SimError;

/// Immutable parameter set consumed by the simulator.
#[derive(Debug, Clone)]
pub struct DhmcModel {
    period: StudyPeriod,
    transitions: DecadalTransitions,
    amounts: AmountParameters,
    amount_config: AmountConfig,
}

impl DhmcModel {
    /// Bundles calibrated parameters with their study period.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::PeriodMismatch`] if the number of transition
    /// tables differs from the number of decades, or
    /// [`SimError::Amount`] if the amount configuration is invalid.
    pub fn new(
        period: StudyPeriod,
        transitions: DecadalTransitions,
        amounts: AmountParameters,
        amount_config: AmountConfig,
    ) -> Result<Self, SimError> {
        amount_config.validate()?;
        if transitions.n_decades() != period.n_decades() {
            return Err(SimError::PeriodMismatch {
                reason: format!(
                    "{} transition tables for {} decades",
                    transitions.n_decades(),
                    period.n_decades()
                ),
            });
        }
        Ok(Self {
            period,
            transitions,
            amounts,
            amount_config,
        })
    }

    /// Study period the model was calibrated on.
    pub fn period(&self) -> &StudyPeriod {
        &self.period
    }

    /// Decadal transition tables.
    pub fn transitions(&self) -> &DecadalTransitions {
        &self.transitions
    }

    /// Monthly amount parameters.
    pub fn amounts(&self) -> &AmountParameters {
        &self.amounts
    }

    /// Threshold and standard-deviation scale used for amounts.
    pub fn amount_config(&self) -> &AmountConfig {
        &self.amount_config
    }
}

/// Result of [`calibrate`]: the model plus the yearly sample statistics it
/// was fitted from.
#[derive(Debug, Clone)]
pub struct Calibration {
    /// Parameters for simulation.
    pub model: DhmcModel,
    /// Per-(month, year) wet-day statistics.
    pub sample_stats: YearlySampleStats,
}

/// Checks that `dates` are exactly the days of `period`, in order.
///
/// # Errors
///
/// Returns [`SimError::PeriodMismatch`] describing the first difference.
pub fn check_period(dates: &[Date], period: &StudyPeriod) -> Result<(), SimError> {
    let expected = period.dates();
    if dates.len() != expected.len() {
        return Err(SimError::PeriodMismatch {
            reason: format!(
                "record has {} days, {}..={} has {}",
                dates.len(),
                period.start_year(),
                period.end_year(),
                expected.len()
            ),
        });
    }
    if let Some((got, want)) = dates.iter().zip(&expected).find(|(a, b)| a != b) {
        return Err(SimError::PeriodMismatch {
            reason: format!("found {got} where {want} was expected"),
        });
    }
    Ok(())
}

/// Fits transition and amount parameters to an observed record.
///
/// `dates` and `precip` are the parallel date and depth columns; they must
/// cover `period` day by day.
///
/// # Errors
///
/// Returns [`SimError`] if the record does not match the period or either
/// estimator fails.
#[tracing::instrument(skip_all, fields(start_year = period.start_year(), n_years = period.n_years()))]
pub fn calibrate(
    dates: &[Date],
    precip: &[f64],
    period: &StudyPeriod,
    markov_config: &MarkovConfig,
    amount_config: &AmountConfig,
) -> Result<Calibration, SimError> {
    if dates.len() != precip.len() {
        return Err(SimError::PeriodMismatch {
            reason: format!(
                "{} dates but {} depths",
                dates.len(),
                precip.len()
            ),
        });
    }
    check_period(dates, period)?;

    let years: Vec<i32> = dates.iter().map(|d| d.year()).collect();
    let months: Vec<u8> = dates.iter().map(|d| d.month()).collect();

    let transitions =
        estimate_decadal_transitions(precip, &months, period.n_decades(), markov_config)?;
    info!(
        n_decades = transitions.n_decades(),
        initial_dry = ?transitions.initial_dry(),
        "estimated decadal transition probabilities"
    );

    let index = MonthYearIndex::new(&years, &months, period.start_year(), period.n_years())?;
    let sample_stats = yearly_sample_stats(precip, &index, amount_config)?;
    let amounts = estimate_amount_parameters(&sample_stats);
    info!(
        insufficient_cells = sample_stats.n_insufficient(),
        "estimated amount parameters"
    );

    let model = DhmcModel::new(*period, transitions, amounts, amount_config.clone())?;
    Ok(Calibration {
        model,
        sample_stats,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wet_every_third_day(period: &StudyPeriod) -> (Vec<Date>, Vec<f64>) {
        let dates = period.dates();
        let precip = (0..dates.len())
            .map(|i| if i % 3 == 0 { 4.0 + (i % 7) as f64 } else { 0.0 })
            .collect();
        (dates, precip)
    }

    #[test]
    fn calibrate_one_decade() {
        let period = StudyPeriod::new(1990, 10).unwrap();
        let (dates, precip) = wet_every_third_day(&period);
        let cal = calibrate(
            &dates,
            &precip,
            &period,
            &MarkovConfig::new(),
            &AmountConfig::new(),
        )
        .unwrap();
        assert_eq!(cal.model.transitions().n_decades(), 1);
        assert_eq!(cal.sample_stats.n_years(), 10);
        // D D W D D W ...: dry stays dry half the time, wet never persists.
        let table = &cal.model.transitions().tables()[0];
        let dd = table.dry_to_dry(6).unwrap();
        assert!((dd - 0.5).abs() < 0.05, "dry_to_dry {dd}");
        assert_eq!(table.wet_to_wet(6), Some(0.0));
    }

    #[test]
    fn check_period_detects_gap() {
        let period = StudyPeriod::new(1990, 10).unwrap();
        let mut dates = period.dates();
        dates.remove(100);
        let err = check_period(&dates, &period).unwrap_err();
        assert!(matches!(err, SimError::PeriodMismatch { .. }));
    }

    #[test]
    fn check_period_detects_shift() {
        let period = StudyPeriod::new(1990, 10).unwrap();
        let shifted = StudyPeriod::new(1991, 10).unwrap();
        let mut dates = shifted.dates();
        dates.truncate(period.n_days());
        assert_eq!(dates.len(), period.n_days());
        let err = check_period(&dates, &period).unwrap_err();
        assert!(err.to_string().contains("1990-01-01"), "{err}");
    }

    #[test]
    fn calibrate_rejects_length_mismatch() {
        let period = StudyPeriod::new(1990, 10).unwrap();
        let (dates, mut precip) = wet_every_third_day(&period);
        precip.pop();
        let err = calibrate(
            &dates,
            &precip,
            &period,
            &MarkovConfig::new(),
            &AmountConfig::new(),
        )
        .unwrap_err();
        assert!(matches!(err, SimError::PeriodMismatch { .. }));
    }
}
