//! Wet-day rainfall amount model.
//!
//! Wet-day depths follow a gamma distribution whose mean and standard
//! deviation change from year to year. Calibration collects, for every
//! (month, year), the mean and standard deviation of the wet-day depths and
//! fits a log-normal model across years. Simulation draws a fresh
//! (mean, std) pair for each month block and samples depths from the
//! moment-matched gamma.
//!
//! # Pipeline
//!
//! ```text
//!  ┌────────────────┐     ┌────────────────┐     ┌──────────────────┐
//!  │    sample      │────▶│   lognormal    │────▶│      draw        │
//!  │ (yearly stats) │     │ (fit per month)│     │ (gamma + depth)  │
//!  └────────────────┘     └────────────────┘     └──────────────────┘
//! ```
//!
//! A (month, year) with too few wet days contributes zero statistics, which
//! stay zero in log space. This biases the fit for dry months and is a
//! known approximation of the method.

pub mod config;
pub mod draw;
pub mod error;
pub mod gamma;
pub mod lognormal;
pub mod sample;

pub use config::{AmountConfig, StdScale};
pub use draw::{WetDayAmount, draw_month_gamma, min_wet_depth};
pub use error::AmountError;
pub use gamma::GammaParams;
pub use lognormal::{
    AmountParameters, MonthlyLogNormal, estimate_amount_parameters, fit_amount_parameters,
};
pub use sample::{YearlySampleStats, yearly_sample_stats};
