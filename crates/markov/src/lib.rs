//! Decade-varying two-state Markov chain for daily rainfall occurrence.
//!
//! A day is wet when its depth reaches the threshold. The observed record
//! is split into decade chunks; within each chunk, day-to-day transitions
//! are counted per calendar month to give dry->dry and wet->wet
//! persistence probabilities that vary both by month and by decade.
//!
//! # Pipeline
//!
//! ```text
//!  ┌───────────────┐     ┌────────────────┐     ┌──────────────────┐
//!  │   partition   │────▶│  transition    │────▶│    simulate      │
//!  │   (decades)   │     │  (estimate P)  │     │  (step states)   │
//!  └───────────────┘     └────────────────┘     └──────────────────┘
//! ```
//!
//! Undefined (0/0) probabilities are kept as `None` rather than NaN. The
//! [`DegeneratePolicy`] decides whether they are reported and propagated or
//! turned into an error.
//!
//! # Quick start
//!
//! ```rust
//! use dhmc_markov::{MarkovConfig, WetState, estimate_decadal_transitions, next_state};
//!
//! let precip = [0.0, 0.0, 4.2, 1.1, 0.0, 0.0, 0.0, 7.5];
//! let months = [1u8; 8];
//! let decadal = estimate_decadal_transitions(&precip, &months, 2, &MarkovConfig::new()).unwrap();
//! assert_eq!(decadal.n_decades(), 2);
//!
//! let table = &decadal.tables()[0];
//! let state = next_state(table, WetState::Dry, 1, 0.5);
//! assert!(matches!(state, WetState::Dry | WetState::Wet));
//! ```

pub mod config;
pub mod error;
pub mod partition;
pub mod simulate;
pub mod state;
pub mod transition;

pub use config::{BoundaryMode, DegeneratePolicy, MarkovConfig};
pub use error::MarkovError;
pub use partition::decade_bounds;
pub use simulate::{next_state, seed_state, simulate_states};
pub use state::WetState;
pub use transition::{
    DecadalTransitions, TransitionCounts, TransitionTable, estimate_decadal_transitions,
    estimate_transitions, initial_dry_probability,
};
