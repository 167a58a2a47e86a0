//! # dhmc-io
//!
//! Load observed daily rainfall from whitespace-delimited text and write
//! calibrated parameters, simulated series and Z-scores as fixed-format
//! text tables.

mod error;
mod observed;
mod reader;
mod validate;
mod writer;

pub use error::IoError;
pub use observed::ObservedRecord;
pub use reader::{parse_observed, parse_simulated, read_observed, read_simulated};
pub use writer::{
    OutputFile, SIMULATED_HEADER, ZSCORE_DAILY_MONTHLY_HEADER, ZSCORE_MULTIYEAR_HEADER,
    format_fixed, write_correlations, write_simulated, write_transition_params,
    write_yearly_gamma_params, write_zscores,
};
