use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// DHMC decadal Markov chain daily rainfall generator.
#[derive(Parser)]
#[command(
    name = "dhmc",
    version,
    about = "Decadal Markov chain stochastic daily rainfall generator"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Calibrate on the observed record and simulate replicates.
    Generate(GenerateArgs),
    /// Compute Z-scores of the observed record against a simulated table.
    Evaluate(EvaluateArgs),
}

/// Arguments for the `generate` subcommand.
#[derive(clap::Args)]
pub struct GenerateArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "dhmc.toml")]
    pub config: PathBuf,

    /// Override output directory from config.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override global RNG seed from config.
    #[arg(short, long)]
    pub seed: Option<u64>,
}

/// Arguments for the `evaluate` subcommand.
#[derive(clap::Args)]
pub struct EvaluateArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "dhmc.toml")]
    pub config: PathBuf,

    /// Simulated table written by `dhmc generate`.
    #[arg(long)]
    pub simulated: PathBuf,

    /// Override output directory from config.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also write the Z-scores as JSON to this path.
    #[arg(long)]
    pub json: Option<PathBuf>,
}
