//! Whitespace-delimited table readers for observed and simulated records.
//!
//! Both formats are plain text: one row per day, columns separated by any
//! amount of whitespace, `#` starting a comment that runs to the end of the
//! line. The first three columns are year, month and day; integer columns
//! may be written as floats (`1979.0`).

use std::path::Path;

use dhmc_calendar::Date;
use dhmc_sim::{ReplicateSeries, SimulatedTable, assemble};
use tracing::{debug, info};

use crate::error::IoError;
use crate::observed::ObservedRecord;
use crate::validate::{self, ValidationCollector};

// ---------------------------------------------------------------------------
// Row parsing
// ---------------------------------------------------------------------------

/// One non-blank data row.
struct Row {
    /// One-based line number in the input.
    line: usize,
    values: Vec<f64>,
}

fn parse_rows(text: &str) -> Result<Vec<Row>, IoError> {
    let mut rows = Vec::new();
    for (i, raw) in text.lines().enumerate() {
        let data = raw.split('#').next().unwrap_or("");
        if data.trim().is_empty() {
            continue;
        }
        let values = data
            .split_whitespace()
            .map(|tok| {
                tok.parse::<f64>().map_err(|_| IoError::Parse {
                    line: i + 1,
                    reason: format!("'{tok}' is not a number"),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        rows.push(Row {
            line: i + 1,
            values,
        });
    }
    Ok(rows)
}

fn integral(x: f64) -> Option<i64> {
    (x.is_finite() && x.fract() == 0.0).then_some(x as i64)
}

/// Reads the date from the first three columns.
fn row_date(row: &Row) -> Result<Date, String> {
    let field = |k: usize, name: &str| {
        integral(row.values[k]).ok_or_else(|| {
            format!(
                "line {}: {name} {} is not an integer",
                row.line, row.values[k]
            )
        })
    };
    let year = field(0, "year")?;
    let month = field(1, "month")?;
    let day = field(2, "day")?;

    let year = i32::try_from(year).map_err(|_| format!("line {}: year {year} out of range", row.line))?;
    let month = u8::try_from(month).map_err(|_| format!("line {}: invalid month {month}", row.line))?;
    let day = u8::try_from(day).map_err(|_| format!("line {}: invalid day {day}", row.line))?;
    Date::new(year, month, day).map_err(|e| format!("line {}: {e}", row.line))
}

/// Dates of every row, with invalid dates collected rather than returned.
fn row_dates(rows: &[Row], c: &mut ValidationCollector) -> Vec<Date> {
    let mut dates = Vec::with_capacity(rows.len());
    for row in rows {
        match row_date(row) {
            Ok(d) => dates.push(d),
            Err(msg) => c.push(msg),
        }
    }
    dates
}

fn read_text(path: &Path) -> Result<String, IoError> {
    std::fs::read_to_string(path).map_err(|e| IoError::file(path, e))
}

// ---------------------------------------------------------------------------
// Observed record
// ---------------------------------------------------------------------------

/// Parse an observed record from table text.
///
/// Columns are `year month day depth`; further columns are ignored.
///
/// # Errors
///
/// Returns [`IoError::Parse`] for a non-numeric token or a row with fewer
/// than four columns, and [`IoError::Validation`] listing every invalid
/// date, date gap or bad depth.
pub fn parse_observed(text: &str) -> Result<ObservedRecord, IoError> {
    let rows = parse_rows(text)?;
    if let Some(short) = rows.iter().find(|r| r.values.len() < 4) {
        return Err(IoError::Parse {
            line: short.line,
            reason: format!(
                "expected at least 4 columns, found {}",
                short.values.len()
            ),
        });
    }

    let mut c = ValidationCollector::new();
    let dates = row_dates(&rows, &mut c);
    c.finish()?;

    let depths = rows.iter().map(|r| r.values[3]).collect();
    ObservedRecord::new(dates, depths)
}

/// Read an observed record from a text file.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] or [`IoError::File`] if the file cannot
/// be read, otherwise see [`parse_observed`].
pub fn read_observed(path: &Path) -> Result<ObservedRecord, IoError> {
    let record = parse_observed(&read_text(path)?)?;
    info!(
        path = %path.display(),
        n_days = record.len(),
        first = ?record.first_date(),
        "read observed record"
    );
    Ok(record)
}

// ---------------------------------------------------------------------------
// Simulated table
// ---------------------------------------------------------------------------

/// Parse a simulated table from table text.
///
/// Columns are `year month day` followed by one depth per replicate; every
/// row must have the same number of columns.
///
/// # Errors
///
/// Returns [`IoError::Parse`] for a non-numeric token or a ragged row,
/// [`IoError::Validation`] for invalid or non-consecutive dates and bad
/// depths.
pub fn parse_simulated(text: &str) -> Result<SimulatedTable, IoError> {
    let rows = parse_rows(text)?;
    let n_cols = rows.first().map_or(3, |r| r.values.len());
    if n_cols < 3 {
        return Err(IoError::Parse {
            line: rows.first().map_or(1, |r| r.line),
            reason: format!("expected at least 3 columns, found {n_cols}"),
        });
    }
    if let Some(ragged) = rows.iter().find(|r| r.values.len() != n_cols) {
        return Err(IoError::Parse {
            line: ragged.line,
            reason: format!(
                "expected {n_cols} columns, found {}",
                ragged.values.len()
            ),
        });
    }

    let mut c = ValidationCollector::new();
    let dates = row_dates(&rows, &mut c);
    c.finish()?;

    let mut c = validate::validate_consecutive(&dates);
    let replicates: Vec<ReplicateSeries> = (3..n_cols)
        .map(|k| ReplicateSeries::new(rows.iter().map(|r| r.values[k]).collect()))
        .collect();
    for r in &replicates {
        c.extend(validate::validate_depths(r.depths()));
    }
    c.finish()?;

    debug!(
        n_days = dates.len(),
        n_replicates = replicates.len(),
        "parsed simulated table"
    );
    Ok(assemble(&dates, replicates)?)
}

/// Read a simulated table from a text file.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] or [`IoError::File`] if the file cannot
/// be read, otherwise see [`parse_simulated`].
pub fn read_simulated(path: &Path) -> Result<SimulatedTable, IoError> {
    let table = parse_simulated(&read_text(path)?)?;
    info!(
        path = %path.display(),
        n_days = table.n_days(),
        n_replicates = table.n_replicates(),
        "read simulated table"
    );
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comments_blank_lines_and_float_dates() {
        let text = "\
# station 23034
1979.0 1.0 1.0 0.0

1979 1 2 2.5   # inline note
1979\t1\t3\t0.31 9.9
";
        let rec = parse_observed(text).unwrap();
        assert_eq!(rec.len(), 3);
        assert_eq!(rec.depths(), &[0.0, 2.5, 0.31]);
        assert_eq!(rec.dates()[2], Date::new(1979, 1, 3).unwrap());
    }

    #[test]
    fn non_numeric_token_is_parse_error() {
        let err = parse_observed("1979 1 1 x\n").unwrap_err();
        match err {
            IoError::Parse { line, reason } => {
                assert_eq!(line, 1);
                assert!(reason.contains("'x'"));
            }
            other => panic!("expected IoError::Parse, got {other:?}"),
        }
    }

    #[test]
    fn short_row_is_parse_error() {
        let err = parse_observed("1979 1 1 0.0\n1979 1 2\n").unwrap_err();
        assert!(matches!(err, IoError::Parse { line: 2, .. }));
    }

    #[test]
    fn invalid_dates_are_collected() {
        let err = parse_observed("1979 2 30 0.0\n1979 13 1 0.0\n1979.5 1 1 0.0\n").unwrap_err();
        match err {
            IoError::Validation { count, details } => {
                assert_eq!(count, 3);
                assert!(details.contains("line 1"));
                assert!(details.contains("invalid month: 13"));
                assert!(details.contains("year 1979.5 is not an integer"));
            }
            other => panic!("expected IoError::Validation, got {other:?}"),
        }
    }

    #[test]
    fn date_gap_rejected() {
        let err = parse_observed("1979 1 1 0.0\n1979 1 3 0.0\n").unwrap_err();
        assert!(err.to_string().contains("1979-01-03 follows 1979-01-01"));
    }

    #[test]
    fn simulated_columns_become_replicates() {
        let text = "\
# Year   Month     Day      SimRains
2000     2        28       0.00     1.25
2000     2        29       0.30     0.00
2000     3        1        4.10     0.00
";
        let table = parse_simulated(text).unwrap();
        assert_eq!(table.n_replicates(), 2);
        assert_eq!(table.n_days(), 3);
        assert_eq!(table.replicates()[0].depths(), &[0.0, 0.3, 4.1]);
        assert_eq!(table.replicates()[1].depths(), &[1.25, 0.0, 0.0]);
    }

    #[test]
    fn simulated_ragged_row_rejected() {
        let err = parse_simulated("2000 1 1 0.0 1.0\n2000 1 2 0.0\n").unwrap_err();
        assert!(matches!(err, IoError::Parse { line: 2, .. }));
    }
}
