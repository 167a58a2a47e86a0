//! Evaluate command: Z-scores of the observed record against a simulated table.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use dhmc_evaluate::{evaluate, to_json};
use dhmc_io::{read_simulated, write_zscores};

use crate::cli::EvaluateArgs;
use crate::config::DhmcConfig;
use crate::convert;
use crate::generate::{ensure_dir, load_observed};

/// Run the standalone evaluation pipeline.
pub fn run(args: EvaluateArgs) -> Result<()> {
    let _cmd = info_span!("evaluate").entered();
    // 1. Load project TOML
    let config = DhmcConfig::load(&args.config)?;
    let out_dir = args.output.unwrap_or_else(|| config.io.output_dir.clone());

    // 2. Read observed and simulated records
    let (record, period) = load_observed(&config)?;

    info!(path = %args.simulated.display(), "reading simulated table");
    let table = read_simulated(&args.simulated)
        .with_context(|| format!("failed to read simulated table: {}", args.simulated.display()))?;
    info!(n_replicates = table.n_replicates(), "simulated table loaded");

    // 3. Run evaluation
    let eval_cfg = convert::build_evaluate_config(&config.calibration);
    let report = evaluate(
        record.dates(),
        record.depths(),
        &table,
        period.start_year(),
        period.n_years(),
        &eval_cfg,
    )
    .context("evaluation failed")?;

    // 4. Write Z-score tables and optional JSON
    ensure_dir(&out_dir)?;
    write_zscores(&out_dir, &config.station, &report).context("failed to write z-scores")?;

    if let Some(json_path) = args.json {
        let json = to_json(&report).context("failed to serialize z-scores")?;
        std::fs::write(&json_path, &json)
            .with_context(|| format!("failed to write JSON: {}", json_path.display()))?;
        info!(path = %json_path.display(), "z-score JSON written");
    }

    Ok(())
}
