//! Wet/dry state stepping.

use crate::state::WetState;
use crate::transition::TransitionTable;

/// Seeds the chain state for the very first simulated day.
///
/// Dry if `u <= initial_dry`, wet otherwise (including when the probability
/// is undefined).
pub fn seed_state(initial_dry: Option<f64>, u: f64) -> WetState {
    if initial_dry.is_some_and(|p| u <= p) {
        WetState::Dry
    } else {
        WetState::Wet
    }
}

/// Advances the chain by one day using the uniform draw `u`.
///
/// The chain stays in `from` if `u` does not exceed the month's persistence
/// probability and switches otherwise. An undefined probability never
/// compares true, so a degenerate cell always leaves its state.
///
/// # Panics
///
/// Panics if `month` is 0 or greater than 12.
pub fn next_state(table: &TransitionTable, from: WetState, month: u8, u: f64) -> WetState {
    if table.persistence(from, month).is_some_and(|p| u <= p) {
        from
    } else {
        from.flip()
    }
}

/// Simulates a sequence of wet/dry states under a single table.
///
/// # Arguments
///
/// * `table` - Monthly persistence probabilities.
/// * `sim_months` - 1-indexed month for each simulated day.
/// * `initial` - The state of the day before the first simulated day.
/// * `rng` - Random number generator (one uniform per day).
///
/// # Returns
///
/// A vector of [`WetState`] values with the same length as `sim_months`.
pub fn simulate_states(
    table: &TransitionTable,
    sim_months: &[u8],
    initial: WetState,
    rng: &mut impl rand::Rng,
) -> Vec<WetState> {
    let mut prev = initial;
    sim_months
        .iter()
        .map(|&m| {
            let u: f64 = rng.random();
            prev = next_state(table, prev, m, u);
            prev
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn uniform_table(dd: Option<f64>, ww: Option<f64>) -> TransitionTable {
        TransitionTable::from_probabilities([dd; 12], [ww; 12]).unwrap()
    }

    #[test]
    fn seed_state_threshold() {
        assert_eq!(seed_state(Some(0.6), 0.6), WetState::Dry);
        assert_eq!(seed_state(Some(0.6), 0.61), WetState::Wet);
        assert_eq!(seed_state(None, 0.0), WetState::Wet);
    }

    #[test]
    fn next_state_stays_on_low_draw() {
        let t = uniform_table(Some(0.7), Some(0.4));
        assert_eq!(next_state(&t, WetState::Dry, 1, 0.7), WetState::Dry);
        assert_eq!(next_state(&t, WetState::Dry, 1, 0.71), WetState::Wet);
        assert_eq!(next_state(&t, WetState::Wet, 1, 0.4), WetState::Wet);
        assert_eq!(next_state(&t, WetState::Wet, 1, 0.9), WetState::Dry);
    }

    #[test]
    fn undefined_probability_always_leaves() {
        let t = uniform_table(None, Some(1.0));
        for u in [0.0, 0.25, 0.999] {
            assert_eq!(next_state(&t, WetState::Dry, 6, u), WetState::Wet);
        }
    }

    #[test]
    fn length_correctness() {
        let t = uniform_table(Some(0.7), Some(0.4));
        let months = vec![1u8; 100];
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(simulate_states(&t, &months, WetState::Dry, &mut rng).len(), 100);
    }

    #[test]
    fn empty_sim_months() {
        let t = uniform_table(Some(0.7), Some(0.4));
        let mut rng = StdRng::seed_from_u64(42);
        assert!(simulate_states(&t, &[], WetState::Dry, &mut rng).is_empty());
    }

    #[test]
    fn deterministic_with_seed() {
        let t = uniform_table(Some(0.6), Some(0.5));
        let months: Vec<u8> = (0..50).map(|i| (i % 12) as u8 + 1).collect();

        let mut rng1 = StdRng::seed_from_u64(123);
        let mut rng2 = StdRng::seed_from_u64(123);
        assert_eq!(
            simulate_states(&t, &months, WetState::Wet, &mut rng1),
            simulate_states(&t, &months, WetState::Wet, &mut rng2)
        );
    }

    #[test]
    fn absorbing_dry() {
        let t = uniform_table(Some(1.0), Some(0.5));
        let months = vec![4u8; 50];
        let mut rng = StdRng::seed_from_u64(7);
        let states = simulate_states(&t, &months, WetState::Dry, &mut rng);
        assert!(states.iter().all(|&s| s == WetState::Dry));
    }

    #[test]
    fn alternates_when_never_persistent() {
        // P(stay) = 0: u <= 0 only when u == 0, which StdRng practically never yields.
        let t = uniform_table(Some(0.0), Some(0.0));
        let months = vec![1u8; 6];
        let mut rng = StdRng::seed_from_u64(11);
        let states = simulate_states(&t, &months, WetState::Dry, &mut rng);
        assert_eq!(
            states,
            vec![
                WetState::Wet,
                WetState::Dry,
                WetState::Wet,
                WetState::Dry,
                WetState::Wet,
                WetState::Dry
            ]
        );
    }
}
