//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Context, Result, bail};

use crate::config::*;

use dhmc_amount::{AmountConfig, StdScale};
use dhmc_calendar::{Date, StudyPeriod};
use dhmc_evaluate::EvaluateConfig;
use dhmc_markov::{BoundaryMode, DegeneratePolicy, MarkovConfig};
use dhmc_sim::{ReseedPolicy, SimConfig};

/// Parses a decade-boundary mode name.
pub fn parse_boundary(s: &str) -> Result<BoundaryMode> {
    match s.to_lowercase().as_str() {
        "wrap" => Ok(BoundaryMode::Wrap),
        "contiguous" => Ok(BoundaryMode::Contiguous),
        other => bail!("unknown boundary mode: {other:?}"),
    }
}

/// Parses a degenerate-probability policy name.
pub fn parse_degenerate(s: &str) -> Result<DegeneratePolicy> {
    match s.to_lowercase().as_str() {
        "propagate" => Ok(DegeneratePolicy::Propagate),
        "fail" => Ok(DegeneratePolicy::Fail),
        other => bail!("unknown degenerate policy: {other:?}"),
    }
}

/// Parses the scale on which the monthly std is drawn.
pub fn parse_std_scale(s: &str) -> Result<StdScale> {
    match s.to_lowercase().as_str() {
        "linear" => Ok(StdScale::Linear),
        "log" => Ok(StdScale::Log),
        other => bail!("unknown std scale: {other:?}"),
    }
}

/// Parses a state reseeding policy name.
pub fn parse_reseed(s: &str) -> Result<ReseedPolicy> {
    match s.to_lowercase().as_str() {
        "first_run" => Ok(ReseedPolicy::FirstRun),
        "every_decade" => Ok(ReseedPolicy::EveryDecade),
        other => bail!("unknown reseed policy: {other:?}"),
    }
}

/// Builds a [`MarkovConfig`] from the TOML calibration section.
pub fn build_markov_config(cal: &CalibrationToml) -> Result<MarkovConfig> {
    let cfg = MarkovConfig::new()
        .with_threshold(cal.threshold)
        .with_boundary(parse_boundary(&cal.boundary)?)
        .with_degenerate_policy(parse_degenerate(&cal.degenerate)?);
    cfg.validate().context("invalid calibration settings")?;
    Ok(cfg)
}

/// Builds an [`AmountConfig`] from the calibration and simulation sections.
pub fn build_amount_config(cal: &CalibrationToml, sim: &SimulationToml) -> Result<AmountConfig> {
    let cfg = AmountConfig::new()
        .with_threshold(cal.threshold)
        .with_min_sample(cal.min_sample)
        .with_std_scale(parse_std_scale(&sim.std_scale)?);
    cfg.validate().context("invalid amount settings")?;
    Ok(cfg)
}

/// Builds a [`SimConfig`] from the TOML simulation section.
pub fn build_sim_config(sim: &SimulationToml) -> Result<SimConfig> {
    let cfg = SimConfig::new()
        .with_n_runs(sim.n_runs)
        .with_n_warmup(sim.n_warmup)
        .with_reseed(parse_reseed(&sim.reseed)?);
    cfg.validate().context("invalid simulation settings")?;
    Ok(cfg)
}

/// Builds an [`EvaluateConfig`]; evaluation shares the calibration threshold.
pub fn build_evaluate_config(cal: &CalibrationToml) -> EvaluateConfig {
    EvaluateConfig::default().with_threshold(cal.threshold)
}

/// Builds the study period, filling unset bounds from the record's first
/// and last dates.
pub fn build_period(cal: &CalibrationToml, first: Date, last: Date) -> Result<StudyPeriod> {
    let start_year = cal.start_year.unwrap_or(first.year());
    let n_years = match cal.n_years {
        Some(n) => n,
        None => usize::try_from(last.year() - start_year + 1)
            .with_context(|| format!("record ends in {} before start year {start_year}", last.year()))?,
    };
    StudyPeriod::with_years_per_decade(start_year, n_years, cal.years_per_decade)
        .context("invalid study period")
}
