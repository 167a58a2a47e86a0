use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use dhmc_calendar::StudyPeriod;
use dhmc_evaluate::evaluate;
use dhmc_io::{
    ObservedRecord, read_observed, write_correlations, write_simulated, write_transition_params,
    write_yearly_gamma_params, write_zscores,
};
use dhmc_sim::{SimulationRngs, calibrate, simulate_table};

use crate::cli::GenerateArgs;
use crate::config::DhmcConfig;
use crate::convert;

/// Reads the configured observed record and resolves its study period.
pub fn load_observed(config: &DhmcConfig) -> Result<(ObservedRecord, StudyPeriod)> {
    let input = config
        .io
        .input
        .as_ref()
        .ok_or_else(|| anyhow::anyhow!("no input path: set [io].input in config"))?;

    info!(path = %input.display(), "reading observed record");
    let record = read_observed(input)
        .with_context(|| format!("failed to read observed record: {}", input.display()))?;
    let (first, last) = match (record.dates().first(), record.dates().last()) {
        (Some(&f), Some(&l)) => (f, l),
        _ => anyhow::bail!("observed record is empty: {}", input.display()),
    };
    let period = convert::build_period(&config.calibration, first, last)?;
    info!(
        start_year = period.start_year(),
        n_years = period.n_years(),
        n_decades = period.n_decades(),
        "study period"
    );
    Ok((record, period))
}

/// Creates `dir` if needed.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory: {}", dir.display()))
}

/// Run the full calibration and simulation pipeline.
pub fn run(args: GenerateArgs) -> Result<()> {
    let _cmd = info_span!("generate").entered();
    let config = DhmcConfig::load(&args.config)?;

    let out_dir = args.output.unwrap_or_else(|| config.io.output_dir.clone());
    let seed = args.seed.or(config.seed);
    let station = config.station.as_str();

    // Step 1: Build configs from TOML
    let markov_cfg = convert::build_markov_config(&config.calibration)?;
    let amount_cfg = convert::build_amount_config(&config.calibration, &config.simulation)?;
    let sim_cfg = convert::build_sim_config(&config.simulation)?;
    let eval_cfg = convert::build_evaluate_config(&config.calibration);

    // Step 2: Load observed record
    let (record, period) = load_observed(&config)?;

    // Step 3: Calibrate
    let cal = calibrate(
        record.dates(),
        record.depths(),
        &period,
        &markov_cfg,
        &amount_cfg,
    )
    .context("calibration failed")?;
    info!("calibration complete");

    ensure_dir(&out_dir)?;
    if config.save.decadal_mc_params {
        write_transition_params(&out_dir, station, cal.model.transitions())
            .context("failed to write decadal transition parameters")?;
    }
    if config.save.yearly_gamma_params {
        write_yearly_gamma_params(&out_dir, station, &cal.sample_stats)
            .context("failed to write yearly amount statistics")?;
        write_correlations(&out_dir, station, cal.model.amounts())
            .context("failed to write amount correlations")?;
    }

    // Step 4: Simulate
    if seed.is_none() {
        warn!("no seed configured; output will not be reproducible");
    }
    let mut rngs = SimulationRngs::from_optional_seed(seed);
    let table = simulate_table(&cal.model, &sim_cfg, &mut rngs).context("simulation failed")?;
    info!(
        rows = table.n_rows(),
        columns = table.n_days(),
        "simulated table assembled"
    );

    if config.save.simulated_rain {
        write_simulated(&out_dir, station, &table).context("failed to write simulated rainfall")?;
    }

    // Step 5: Inline evaluation
    if config.save.zscores {
        let report = evaluate(
            record.dates(),
            record.depths(),
            &table,
            period.start_year(),
            period.n_years(),
            &eval_cfg,
        )
        .context("evaluation failed")?;
        write_zscores(&out_dir, station, &report).context("failed to write z-scores")?;
    }

    info!(output_dir = %out_dir.display(), "generation finished");
    Ok(())
}
