//! Z-score report and its JSON form.

use serde::Serialize;

use crate::config::MULTIYEAR_WINDOWS;
use crate::error::EvaluateError;

/// Z-scores of the observed statistics against the replicate ensemble.
///
/// Each entry is `(observed - mean(simulated)) / std(simulated)`. A zero
/// ensemble spread gives an infinite or NaN score; JSON writes those as
/// `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZScoreReport {
    /// Mean wet-day depth, per month.
    pub daily_mean: [f64; 12],
    /// Std of wet-day depth, per month.
    pub daily_std: [f64; 12],
    /// Mean monthly total, per month.
    pub monthly_mean: [f64; 12],
    /// Std of monthly totals, per month.
    pub monthly_std: [f64; 12],
    /// Mean `v`-year total, `v = 1..=10`.
    pub multiyear_mean: [f64; MULTIYEAR_WINDOWS],
    /// Std of `v`-year totals.
    pub multiyear_std: [f64; MULTIYEAR_WINDOWS],
}

impl ZScoreReport {
    /// Daily and monthly rows in file order: daily mean, daily std,
    /// monthly mean, monthly std.
    pub fn daily_monthly_rows(&self) -> [&[f64; 12]; 4] {
        [
            &self.daily_mean,
            &self.daily_std,
            &self.monthly_mean,
            &self.monthly_std,
        ]
    }

    /// Multi-year rows in file order: mean, std.
    pub fn multiyear_rows(&self) -> [&[f64; MULTIYEAR_WINDOWS]; 2] {
        [&self.multiyear_mean, &self.multiyear_std]
    }
}

/// Serialize a report to a pretty-printed JSON string.
pub fn to_json(report: &ZScoreReport) -> Result<String, EvaluateError> {
    serde_json::to_string_pretty(report).map_err(|e| EvaluateError::Serialization {
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> ZScoreReport {
        ZScoreReport {
            daily_mean: [0.5; 12],
            daily_std: [-1.25; 12],
            monthly_mean: [0.0; 12],
            monthly_std: [f64::NAN; 12],
            multiyear_mean: [1.0; MULTIYEAR_WINDOWS],
            multiyear_std: [f64::INFINITY; MULTIYEAR_WINDOWS],
        }
    }

    #[test]
    fn test_to_json_fields() {
        let json = to_json(&report()).unwrap();
        assert!(json.contains("\"daily_mean\""));
        assert!(json.contains("\"multiyear_std\""));
        assert!(json.contains("-1.25"));
    }

    #[test]
    fn test_non_finite_written_as_null() {
        let value: serde_json::Value = serde_json::from_str(&to_json(&report()).unwrap()).unwrap();
        assert!(value["monthly_std"][0].is_null());
        assert!(value["multiyear_std"][9].is_null());
        assert_eq!(value["daily_mean"][11], 0.5);
    }

    #[test]
    fn test_row_order() {
        let r = report();
        let rows = r.daily_monthly_rows();
        assert_eq!(rows[0][0], 0.5);
        assert_eq!(rows[1][0], -1.25);
        assert_eq!(r.multiyear_rows()[0][0], 1.0);
    }
}
