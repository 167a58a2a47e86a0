//! Decade-varying, month-stratified transition probability estimation.

use tracing::{debug, warn};

use crate::config::{BoundaryMode, DegeneratePolicy, MarkovConfig};
use crate::error::MarkovError;
use crate::partition::decade_bounds;
use crate::state::WetState;

/// Day-to-day transition counts for one month of one decade.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransitionCounts {
    /// Dry followed by dry.
    pub dry_to_dry: u32,
    /// Dry followed by wet.
    pub dry_to_wet: u32,
    /// Wet followed by dry.
    pub wet_to_dry: u32,
    /// Wet followed by wet.
    pub wet_to_wet: u32,
}

impl TransitionCounts {
    /// Adds one observed `from -> to` transition.
    pub fn record(&mut self, from: WetState, to: WetState) {
        match (from, to) {
            (WetState::Dry, WetState::Dry) => self.dry_to_dry += 1,
            (WetState::Dry, WetState::Wet) => self.dry_to_wet += 1,
            (WetState::Wet, WetState::Dry) => self.wet_to_dry += 1,
            (WetState::Wet, WetState::Wet) => self.wet_to_wet += 1,
        }
    }

    /// Number of transitions leaving `from` (including self-transitions).
    pub fn out_of(&self, from: WetState) -> u32 {
        match from {
            WetState::Dry => self.dry_to_dry + self.dry_to_wet,
            WetState::Wet => self.wet_to_dry + self.wet_to_wet,
        }
    }

    /// Total number of transitions counted.
    pub fn total(&self) -> u32 {
        self.out_of(WetState::Dry) + self.out_of(WetState::Wet)
    }

    /// Probability of staying in `from`, or `None` when no transition out
    /// of `from` was observed.
    pub fn persistence(&self, from: WetState) -> Option<f64> {
        let stay = match from {
            WetState::Dry => self.dry_to_dry,
            WetState::Wet => self.wet_to_wet,
        };
        match self.out_of(from) {
            0 => None,
            n => Some(f64::from(stay) / f64::from(n)),
        }
    }
}

/// Dry->dry and wet->wet probabilities for the twelve months of one decade.
///
/// A `None` cell is a degenerate month: no day of that state was followed
/// by another day in the month, so the probability is 0/0.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionTable {
    dry_to_dry: [Option<f64>; 12],
    wet_to_wet: [Option<f64>; 12],
    counts: [TransitionCounts; 12],
}

impl TransitionTable {
    /// Builds a table from per-month transition counts.
    pub fn from_counts(counts: [TransitionCounts; 12]) -> Self {
        Self {
            dry_to_dry: counts.map(|c| c.persistence(WetState::Dry)),
            wet_to_wet: counts.map(|c| c.persistence(WetState::Wet)),
            counts,
        }
    }

    /// Builds a table directly from probabilities (counts are left at zero).
    ///
    /// # Errors
    ///
    /// Returns [`MarkovError::InvalidProbability`] if a defined cell is not
    /// in `[0, 1]`.
    pub fn from_probabilities(
        dry_to_dry: [Option<f64>; 12],
        wet_to_wet: [Option<f64>; 12],
    ) -> Result<Self, MarkovError> {
        for (i, p) in dry_to_dry.iter().chain(&wet_to_wet).enumerate() {
            if let Some(value) = *p
                && !(0.0..=1.0).contains(&value)
            {
                return Err(MarkovError::InvalidProbability {
                    month: (i % 12) as u8 + 1,
                    value,
                });
            }
        }
        Ok(Self {
            dry_to_dry,
            wet_to_wet,
            counts: [TransitionCounts::default(); 12],
        })
    }

    /// Dry->dry probability for a 1-indexed month.
    ///
    /// # Panics
    ///
    /// Panics if `month` is 0 or greater than 12.
    pub fn dry_to_dry(&self, month: u8) -> Option<f64> {
        self.dry_to_dry[month_slot(month)]
    }

    /// Wet->wet probability for a 1-indexed month.
    ///
    /// # Panics
    ///
    /// Panics if `month` is 0 or greater than 12.
    pub fn wet_to_wet(&self, month: u8) -> Option<f64> {
        self.wet_to_wet[month_slot(month)]
    }

    /// Probability of staying in `state` during `month`.
    ///
    /// # Panics
    ///
    /// Panics if `month` is 0 or greater than 12.
    pub fn persistence(&self, state: WetState, month: u8) -> Option<f64> {
        match state {
            WetState::Dry => self.dry_to_dry(month),
            WetState::Wet => self.wet_to_wet(month),
        }
    }

    /// Transition counts for a 1-indexed month.
    ///
    /// # Panics
    ///
    /// Panics if `month` is 0 or greater than 12.
    pub fn counts(&self, month: u8) -> &TransitionCounts {
        &self.counts[month_slot(month)]
    }

    /// All twelve dry->dry cells, January first.
    pub fn dry_to_dry_row(&self) -> &[Option<f64>; 12] {
        &self.dry_to_dry
    }

    /// All twelve wet->wet cells, January first.
    pub fn wet_to_wet_row(&self) -> &[Option<f64>; 12] {
        &self.wet_to_wet
    }

    /// Iterates over the `(month, state)` cells whose probability is undefined.
    pub fn degenerate_cells(&self) -> impl Iterator<Item = (u8, WetState)> + '_ {
        (1..=12u8).flat_map(move |m| {
            WetState::ALL
                .into_iter()
                .filter(move |&s| self.persistence(s, m).is_none())
                .map(move |s| (m, s))
        })
    }
}

fn month_slot(month: u8) -> usize {
    assert!(
        (1..=12).contains(&month),
        "month must be 1..=12, got {month}"
    );
    (month - 1) as usize
}

/// First-day dry probability from a decade's January persistences.
///
/// `(1 - ww) / (2 - dd - ww)`, the stationary dry probability of the
/// January chain. `None` if either input is undefined or the ratio is not
/// finite.
pub fn initial_dry_probability(table: &TransitionTable) -> Option<f64> {
    let dd = table.dry_to_dry(1)?;
    let ww = table.wet_to_wet(1)?;
    let p = (1.0 - ww) / (2.0 - dd - ww);
    p.is_finite().then_some(p)
}

/// Transition tables for every decade plus the first-day dry probability.
#[derive(Debug, Clone, PartialEq)]
pub struct DecadalTransitions {
    tables: Vec<TransitionTable>,
    initial_dry: Option<f64>,
}

impl DecadalTransitions {
    /// Wraps per-decade tables; the first-day dry probability is derived
    /// from decade 0.
    ///
    /// # Errors
    ///
    /// Returns [`MarkovError::NoDecades`] if `tables` is empty.
    pub fn new(tables: Vec<TransitionTable>) -> Result<Self, MarkovError> {
        let first = tables.first().ok_or(MarkovError::NoDecades)?;
        let initial_dry = initial_dry_probability(first);
        Ok(Self {
            tables,
            initial_dry,
        })
    }

    /// Number of decades.
    pub fn n_decades(&self) -> usize {
        self.tables.len()
    }

    /// Table for a zero-based decade, if it exists.
    pub fn table(&self, decade: usize) -> Option<&TransitionTable> {
        self.tables.get(decade)
    }

    /// All decade tables in chronological order.
    pub fn tables(&self) -> &[TransitionTable] {
        &self.tables
    }

    /// Probability that the very first simulated day starts dry.
    pub fn initial_dry(&self) -> Option<f64> {
        self.initial_dry
    }
}

/// Estimates a single transition table from the whole record.
///
/// Equivalent to [`estimate_decadal_transitions`] with one decade.
///
/// # Errors
///
/// See [`estimate_decadal_transitions`].
pub fn estimate_transitions(
    precip: &[f64],
    months: &[u8],
    config: &MarkovConfig,
) -> Result<TransitionTable, MarkovError> {
    let mut decadal = estimate_decadal_transitions(precip, months, 1, config)?;
    Ok(decadal.tables.swap_remove(0))
}

/// Estimates per-decade transition tables from daily precipitation.
///
/// The record is split into `n_decades` chunks with
/// [`decade_bounds`](crate::decade_bounds). Within each chunk every row is
/// paired with its predecessor and the pair is counted under the month of
/// the later day. The predecessor of a chunk's first row is chosen by
/// [`BoundaryMode`].
///
/// # Errors
///
/// Returns [`MarkovError`] if the inputs are empty, differ in length,
/// contain a non-finite depth or an invalid month, hold fewer rows than
/// decades, if `n_decades` is zero, if the configuration is invalid, or
/// (under [`DegeneratePolicy::Fail`]) if any cell is degenerate.
pub fn estimate_decadal_transitions(
    precip: &[f64],
    months: &[u8],
    n_decades: usize,
    config: &MarkovConfig,
) -> Result<DecadalTransitions, MarkovError> {
    config.validate()?;
    if precip.is_empty() {
        return Err(MarkovError::EmptyData);
    }
    if precip.len() != months.len() {
        return Err(MarkovError::LengthMismatch {
            precip_len: precip.len(),
            months_len: months.len(),
        });
    }
    if n_decades == 0 {
        return Err(MarkovError::NoDecades);
    }
    if precip.len() < n_decades {
        return Err(MarkovError::InsufficientData {
            n: precip.len(),
            min: n_decades,
        });
    }
    if precip.iter().any(|p| !p.is_finite()) {
        return Err(MarkovError::NonFiniteData);
    }
    if let Some(&month) = months.iter().find(|m| !(1..=12).contains(*m)) {
        return Err(MarkovError::InvalidMonth { month });
    }

    let threshold = config.threshold();
    let states: Vec<WetState> = precip
        .iter()
        .map(|&p| WetState::classify(p, threshold))
        .collect();

    let mut tables = Vec::with_capacity(n_decades);
    for (decade, rows) in decade_bounds(precip.len(), n_decades).into_iter().enumerate() {
        let mut counts = [TransitionCounts::default(); 12];
        for i in rows.clone() {
            let prev = if i == rows.start {
                match config.boundary() {
                    BoundaryMode::Wrap => Some(rows.end - 1),
                    BoundaryMode::Contiguous => i.checked_sub(1),
                }
            } else {
                Some(i - 1)
            };
            if let Some(prev) = prev {
                counts[(months[i] - 1) as usize].record(states[prev], states[i]);
            }
        }

        let table = TransitionTable::from_counts(counts);
        for (month, from) in table.degenerate_cells() {
            match config.degenerate_policy() {
                DegeneratePolicy::Propagate => warn!(
                    decade,
                    month,
                    from = %from,
                    "degenerate transition probability (0/0); simulation always leaves this state"
                ),
                DegeneratePolicy::Fail => {
                    return Err(MarkovError::DegenerateProbability {
                        decade,
                        month,
                        from,
                    });
                }
            }
        }
        debug!(
            decade,
            rows = rows.len(),
            dry_to_dry = ?table.dry_to_dry_row(),
            wet_to_wet = ?table.wet_to_wet_row(),
            "estimated decade transitions"
        );
        tables.push(table);
    }

    DecadalTransitions::new(tables)
}
