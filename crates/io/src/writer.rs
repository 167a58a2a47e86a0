//! Fixed-format text writers for calibrated parameters, simulated series
//! and Z-scores.
//!
//! Every file is space-delimited. Undefined or non-finite values are
//! written as `nan`, `inf` or `-inf`.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use dhmc_amount::{AmountParameters, YearlySampleStats};
use dhmc_evaluate::ZScoreReport;
use dhmc_markov::DecadalTransitions;
use dhmc_sim::SimulatedTable;
use tracing::info;

use crate::error::IoError;

/// Header line of the simulated series file.
pub const SIMULATED_HEADER: &str = "Year   Month     Day      SimRains";
/// Header line of the daily/monthly Z-score file.
pub const ZSCORE_DAILY_MONTHLY_HEADER: &str =
    "R1=Z(Daily Mean),R2=Z(Daily SD),R3=Z(Monthly Mean),R4=Z(Monthly SD)";
/// Header line of the multi-year Z-score file.
pub const ZSCORE_MULTIYEAR_HEADER: &str = "R1=Z(Multiyear Mean),R2=Z(Multiyear SD)";

/// Width of every left-aligned column in the simulated series file.
const SIMULATED_WIDTH: usize = 8;

/// Files written for one station.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFile {
    /// Decade x month dry-to-dry probabilities.
    DecadalDry,
    /// Decade x month wet-to-wet probabilities.
    DecadalWet,
    /// Month x year mean wet-day depth.
    GammaMeanYearly,
    /// Month x year wet-day depth std.
    GammaSdYearly,
    /// Mean/std correlation per month.
    GammaCorr,
    /// Dated replicate series.
    SimulatedRain,
    /// Daily and monthly Z-scores.
    ZScoresDailyMonthly,
    /// Multi-year Z-scores.
    ZScoresMultiyear,
}

impl OutputFile {
    /// File name for `station`.
    pub fn file_name(self, station: &str) -> String {
        let stem = match self {
            Self::DecadalDry => "Param_MC_Dec_Dry",
            Self::DecadalWet => "Param_MC_Dec_Wet",
            Self::GammaMeanYearly => "Param_Gamma_Mean_Yearly",
            Self::GammaSdYearly => "Param_Gamma_SD_Yearly",
            Self::GammaCorr => "Param_Gamma_Corr",
            Self::SimulatedRain => "DHMC_Simrain",
            Self::ZScoresDailyMonthly => "ZScores_Depth_DailyMonthly",
            Self::ZScoresMultiyear => "ZScores_Depth_Multiyear",
        };
        format!("{stem}_Site_{station}.txt")
    }

    /// Path of the file for `station` inside `dir`.
    pub fn path(self, dir: &Path, station: &str) -> PathBuf {
        dir.join(self.file_name(station))
    }
}

// ---------------------------------------------------------------------------
// Formatting
// ---------------------------------------------------------------------------

/// Fixed-point formatting with `nan`/`inf` for non-finite values.
pub fn format_fixed(x: f64, decimals: usize) -> String {
    if x.is_nan() {
        "nan".to_string()
    } else if x.is_infinite() {
        let s = if x > 0.0 { "inf" } else { "-inf" };
        s.to_string()
    } else {
        format!("{x:.decimals$}")
    }
}

fn format_row<'a>(values: impl IntoIterator<Item = &'a f64>, decimals: usize) -> String {
    values
        .into_iter()
        .map(|&x| format_fixed(x, decimals))
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_option_row(values: &[Option<f64>], decimals: usize) -> String {
    values
        .iter()
        .map(|x| format_fixed(x.unwrap_or(f64::NAN), decimals))
        .collect::<Vec<_>>()
        .join(" ")
}

fn write_lines(
    path: &Path,
    header: Option<&str>,
    lines: impl IntoIterator<Item = String>,
) -> Result<(), IoError> {
    let file = File::create(path).map_err(|e| IoError::file(path, e))?;
    let mut w = BufWriter::new(file);
    let mut put = |line: &str| writeln!(w, "{line}").map_err(|e| IoError::file(path, e));
    if let Some(h) = header {
        put(&format!("# {h}"))?;
    }
    for line in lines {
        put(&line)?;
    }
    w.flush().map_err(|e| IoError::file(path, e))
}

// ---------------------------------------------------------------------------
// Writers
// ---------------------------------------------------------------------------

/// Write the decadal dry-to-dry and wet-to-wet tables, one row per decade,
/// `%0.3f`.
///
/// Returns the dry and wet file paths.
///
/// # Errors
///
/// Returns [`IoError::File`] if a file cannot be written.
pub fn write_transition_params(
    dir: &Path,
    station: &str,
    transitions: &DecadalTransitions,
) -> Result<[PathBuf; 2], IoError> {
    let dry = OutputFile::DecadalDry.path(dir, station);
    let wet = OutputFile::DecadalWet.path(dir, station);
    write_lines(
        &dry,
        None,
        transitions
            .tables()
            .iter()
            .map(|t| format_option_row(t.dry_to_dry_row(), 3)),
    )?;
    write_lines(
        &wet,
        None,
        transitions
            .tables()
            .iter()
            .map(|t| format_option_row(t.wet_to_wet_row(), 3)),
    )?;
    info!(dry = %dry.display(), wet = %wet.display(), "wrote decadal transition parameters");
    Ok([dry, wet])
}

/// Write the yearly wet-day mean and std grids, one row per month and one
/// column per year, `%0.2f`.
///
/// Returns the mean and std file paths.
///
/// # Errors
///
/// Returns [`IoError::File`] if a file cannot be written.
pub fn write_yearly_gamma_params(
    dir: &Path,
    station: &str,
    stats: &YearlySampleStats,
) -> Result<[PathBuf; 2], IoError> {
    let mean = OutputFile::GammaMeanYearly.path(dir, station);
    let sd = OutputFile::GammaSdYearly.path(dir, station);
    write_lines(&mean, None, (1..=12).map(|m| format_row(stats.means(m), 2)))?;
    write_lines(&sd, None, (1..=12).map(|m| format_row(stats.stds(m), 2)))?;
    info!(mean = %mean.display(), sd = %sd.display(), "wrote yearly amount statistics");
    Ok([mean, sd])
}

/// Write the per-month mean/std correlation, one value per line, `%0.2f`.
///
/// # Errors
///
/// Returns [`IoError::File`] if the file cannot be written.
pub fn write_correlations(
    dir: &Path,
    station: &str,
    params: &AmountParameters,
) -> Result<PathBuf, IoError> {
    let path = OutputFile::GammaCorr.path(dir, station);
    write_lines(
        &path,
        None,
        params
            .correlations()
            .iter()
            .map(|r| format_fixed(r.unwrap_or(f64::NAN), 2)),
    )?;
    info!(path = %path.display(), "wrote amount correlations");
    Ok(path)
}

/// Write the simulated table, one line per day: year, month, day, then one
/// two-decimal depth per replicate, each left-aligned in 8 characters.
///
/// # Errors
///
/// Returns [`IoError::File`] if the file cannot be written.
pub fn write_simulated(
    dir: &Path,
    station: &str,
    table: &SimulatedTable,
) -> Result<PathBuf, IoError> {
    let path = OutputFile::SimulatedRain.path(dir, station);
    let cell = |s: String| format!("{s:<width$}", width = SIMULATED_WIDTH);
    let lines = table.dates().iter().enumerate().map(|(j, d)| {
        let mut cells = vec![
            cell(d.year().to_string()),
            cell(d.month().to_string()),
            cell(d.day().to_string()),
        ];
        cells.extend(table.day_values(j).map(|x| cell(format_fixed(x, 2))));
        cells.join(" ")
    });
    write_lines(&path, Some(SIMULATED_HEADER), lines)?;
    info!(
        path = %path.display(),
        n_days = table.n_days(),
        n_replicates = table.n_replicates(),
        "wrote simulated rainfall"
    );
    Ok(path)
}

/// Write the daily/monthly (4 x 12) and multi-year (2 x 10) Z-score files,
/// `%0.2f`, each under its header line.
///
/// Returns the daily/monthly and multi-year file paths.
///
/// # Errors
///
/// Returns [`IoError::File`] if a file cannot be written.
pub fn write_zscores(
    dir: &Path,
    station: &str,
    report: &ZScoreReport,
) -> Result<[PathBuf; 2], IoError> {
    let daily = OutputFile::ZScoresDailyMonthly.path(dir, station);
    let multi = OutputFile::ZScoresMultiyear.path(dir, station);
    write_lines(
        &daily,
        Some(ZSCORE_DAILY_MONTHLY_HEADER),
        report.daily_monthly_rows().iter().map(|r| format_row(*r, 2)),
    )?;
    write_lines(
        &multi,
        Some(ZSCORE_MULTIYEAR_HEADER),
        report.multiyear_rows().iter().map(|r| format_row(*r, 2)),
    )?;
    info!(daily_monthly = %daily.display(), multiyear = %multi.display(), "wrote z-scores");
    Ok([daily, multi])
}
