//! Calibration, simulation and assembly for the DHMC rainfall generator.
//!
//! [`calibrate`] fits the decadal wet/dry chain and the amount model to an
//! observed record. [`RainfallSimulator`] then walks the same calendar
//! once per run, drawing one uniform per day for occurrence and gamma
//! depths for wet days, and [`assemble`] stacks the retained replicates
//! under the record's date columns.
//!
//! # Pipeline
//!
//! ```text
//!  ┌───────────────┐     ┌────────────────┐     ┌──────────────────┐
//!  │   calibrate   │────▶│   simulator    │────▶│    assemble      │
//!  │  (fit model)  │     │  (replicates)  │     │ (3 + n_runs rows)│
//!  └───────────────┘     └────────────────┘     └──────────────────┘
//! ```
//!
//! # Quick start
//!
//! ```ignore
//! use dhmc_sim::{SimConfig, SimulationRngs, calibrate, simulate_table};
//!
//! let cal = calibrate(&dates, &precip, &period, &markov_config, &amount_config)?;
//! let config = SimConfig::new().with_n_runs(100);
//! let mut rngs = SimulationRngs::seed_from_u64(42);
//! let table = simulate_table(&cal.model, &config, &mut rngs)?;
//! assert_eq!(table.n_rows(), 103);
//! ```

mod assemble;
mod config;
mod error;
mod model;
mod rng;
mod simulator;

pub use assemble::{ReplicateSeries, SimulatedTable, assemble};
pub use config::{ReseedPolicy, SimConfig};
pub use error::SimError;
pub use model::{Calibration, DhmcModel, calibrate, check_period};
pub use rng::SimulationRngs;
pub use simulator::{RainfallSimulator, simulate_table};
