//! # dhmc-calendar
//!
//! Gregorian date arithmetic and the decade/year/month calendar walk shared
//! by calibration checks and rainfall simulation.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["StudyPeriod"] -->|".walk()"| B["MonthBlock (decade, year, month, n_days)"]
//!     B -->|".uniforms(rng)"| C["daily U[0,1) draws"]
//!     A -->|".dates()"| D["Vec of Date"]
//!     E["year/month columns"] -->|"MonthYearIndex::new()"| F["(year, month) -> rows"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use dhmc_calendar::{StudyPeriod, is_leap_year};
//!
//! let period = StudyPeriod::new(1979, 30).unwrap();
//! assert_eq!(period.n_decades(), 3);
//! for block in period.walk() {
//!     // block.decade, block.year, block.month, block.n_days
//! }
//! assert!(is_leap_year(1980));
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `gregorian` | Leap-year rule and month lengths |
//! | `date` | Validated Gregorian date |
//! | `sequence` | Date sequence generation |
//! | `period` | Study period, calendar walk and daily uniform draws |
//! | `index` | `(year, month)` row index over a daily record |
//! | `error` | Error types |

mod date;
mod error;
mod gregorian;
mod index;
mod period;
mod sequence;

pub use date::Date;
pub use error::CalendarError;
pub use gregorian::{MONTH_DAYS, days_in_month, days_in_year, is_leap_year};
pub use index::MonthYearIndex;
pub use period::{CalendarWalk, DEFAULT_YEARS_PER_DECADE, MonthBlock, StudyPeriod};
pub use sequence::date_sequence;
