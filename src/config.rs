use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level DHMC configuration (`dhmc.toml`).
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DhmcConfig {
    /// Station identifier used in every output file name.
    #[serde(default = "default_station")]
    pub station: String,

    /// Global RNG seed.
    #[serde(default)]
    pub seed: Option<u64>,

    /// I/O settings.
    #[serde(default)]
    pub io: IoToml,

    /// Calibration settings.
    #[serde(default)]
    pub calibration: CalibrationToml,

    /// Simulation settings.
    #[serde(default)]
    pub simulation: SimulationToml,

    /// Which outputs to write.
    #[serde(default)]
    pub save: SaveToml,
}

impl DhmcConfig {
    /// Reads and parses a TOML configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str).context("failed to parse TOML config")
    }
}

fn default_station() -> String {
    "site".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IoToml {
    pub input: Option<PathBuf>,
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

impl Default for IoToml {
    fn default() -> Self {
        Self {
            input: None,
            output_dir: default_output_dir(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalibrationToml {
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    /// First year of the study period; the record's first year if unset.
    #[serde(default)]
    pub start_year: Option<i32>,
    /// Length of the study period; the record's span if unset.
    #[serde(default)]
    pub n_years: Option<usize>,
    #[serde(default = "default_years_per_decade")]
    pub years_per_decade: usize,
    #[serde(default = "default_min_sample")]
    pub min_sample: usize,
    #[serde(default = "default_boundary")]
    pub boundary: String,
    #[serde(default = "default_degenerate")]
    pub degenerate: String,
}

impl Default for CalibrationToml {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            start_year: None,
            n_years: None,
            years_per_decade: default_years_per_decade(),
            min_sample: default_min_sample(),
            boundary: default_boundary(),
            degenerate: default_degenerate(),
        }
    }
}

fn default_threshold() -> f64 {
    0.3
}
fn default_years_per_decade() -> usize {
    dhmc_calendar::DEFAULT_YEARS_PER_DECADE
}
fn default_min_sample() -> usize {
    2
}
fn default_boundary() -> String {
    "wrap".to_string()
}
fn default_degenerate() -> String {
    "propagate".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SimulationToml {
    #[serde(default = "default_n_runs")]
    pub n_runs: usize,
    #[serde(default = "default_n_warmup")]
    pub n_warmup: usize,
    #[serde(default = "default_std_scale")]
    pub std_scale: String,
    #[serde(default = "default_reseed")]
    pub reseed: String,
}

impl Default for SimulationToml {
    fn default() -> Self {
        Self {
            n_runs: default_n_runs(),
            n_warmup: default_n_warmup(),
            std_scale: default_std_scale(),
            reseed: default_reseed(),
        }
    }
}

fn default_n_runs() -> usize {
    100
}
fn default_n_warmup() -> usize {
    10
}
fn default_std_scale() -> String {
    "linear".to_string()
}
fn default_reseed() -> String {
    "first_run".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SaveToml {
    #[serde(default = "default_true")]
    pub decadal_mc_params: bool,
    #[serde(default = "default_true")]
    pub yearly_gamma_params: bool,
    #[serde(default = "default_true")]
    pub simulated_rain: bool,
    #[serde(default = "default_true")]
    pub zscores: bool,
}

impl Default for SaveToml {
    fn default() -> Self {
        Self {
            decadal_mc_params: true,
            yearly_gamma_params: true,
            simulated_rain: true,
            zscores: true,
        }
    }
}

fn default_true() -> bool {
    true
}
