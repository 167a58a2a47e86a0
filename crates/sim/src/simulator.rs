//! Day-by-day wet/dry walk with gamma wet-day depths.

use dhmc_amount::WetDayAmount;
use dhmc_markov::{WetState, next_state, seed_state};
use tracing::{debug, info};

use crate::assemble::{ReplicateSeries, SimulatedTable, assemble};
use crate::config::{ReseedPolicy, SimConfig};
use crate::error::SimError;
use crate::model::DhmcModel;
use crate::rng::SimulationRngs;

const PROGRESS_MILESTONES: [usize; 4] = [25, 50, 75, 100];

/// Generates replicate series from a calibrated model.
///
/// Every run walks the model's study period decade by decade, year by year
/// and month by month. The wet/dry state is never reset between runs
/// (unless [`ReseedPolicy::EveryDecade`] is chosen), so the first
/// `n_warmup` runs act as a burn-in that is simulated but not returned.
#[derive(Debug, Clone)]
pub struct RainfallSimulator<'a> {
    model: &'a DhmcModel,
    config: &'a SimConfig,
}

impl<'a> RainfallSimulator<'a> {
    /// Creates a simulator over a model.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidConfig`] if the configuration is invalid.
    pub fn new(model: &'a DhmcModel, config: &'a SimConfig) -> Result<Self, SimError> {
        config.validate()?;
        Ok(Self { model, config })
    }

    /// Runs `n_warmup + n_runs` passes and returns the last `n_runs`.
    ///
    /// Each returned series has one depth per day of the study period:
    /// zero on dry days, a two-decimal depth at or above the threshold on
    /// wet days.
    #[tracing::instrument(skip_all, fields(n_runs = self.config.n_runs(), n_warmup = self.config.n_warmup()))]
    pub fn run(&self, rngs: &mut SimulationRngs) -> Result<Vec<ReplicateSeries>, SimError> {
        let n_runs = self.config.n_runs();
        let n_warmup = self.config.n_warmup();
        let n_days = self.model.period().n_days();

        info!(n_days, "simulation in progress");
        let mut state = None;
        let mut replicates = Vec::with_capacity(n_runs);
        let mut next_milestone = 0;

        for run in 0..n_warmup + n_runs {
            let keep = run >= n_warmup;
            let mut depths = Vec::with_capacity(if keep { n_days } else { 0 });
            self.run_once(rngs, &mut state, |depth| {
                if keep {
                    depths.push(depth);
                }
            })?;

            if keep {
                replicates.push(ReplicateSeries::new(depths));
                let percent = replicates.len() * 100 / n_runs;
                while next_milestone < PROGRESS_MILESTONES.len()
                    && percent >= PROGRESS_MILESTONES[next_milestone]
                {
                    info!(
                        percent = PROGRESS_MILESTONES[next_milestone],
                        completed = replicates.len(),
                        "simulation progress"
                    );
                    next_milestone += 1;
                }
            } else {
                debug!(run, "warm-up run finished");
            }
        }

        Ok(replicates)
    }

    /// One pass over the study period, carrying `state` in and out.
    fn run_once(
        &self,
        rngs: &mut SimulationRngs,
        state: &mut Option<WetState>,
        mut emit: impl FnMut(f64),
    ) -> Result<(), SimError> {
        let SimulationRngs {
            occurrence,
            amount: amount_rng,
        } = rngs;
        let transitions = self.model.transitions();
        let amount_config = self.model.amount_config();

        for block in self.model.period().walk() {
            let table = transitions
                .table(block.decade)
                .ok_or_else(|| SimError::PeriodMismatch {
                    reason: format!("no transition table for decade {}", block.decade),
                })?;
            let amount = WetDayAmount::draw(
                self.model.amounts().month(block.month),
                amount_config.std_scale(),
                amount_config.threshold(),
                amount_rng,
            );
            let decade_start = block.year_in_decade == 0 && block.month == 1;

            for (day, u) in block.uniforms(occurrence).enumerate() {
                let reseed = match self.config.reseed() {
                    ReseedPolicy::FirstRun => state.is_none(),
                    ReseedPolicy::EveryDecade => state.is_none() || (decade_start && day == 0),
                };
                let from = match *state {
                    Some(s) if !reseed => s,
                    _ => {
                        let seeded = seed_state(transitions.initial_dry(), u);
                        if seeded.is_wet() {
                            // The seeded wet day draws its depth before the
                            // same uniform drives the day's transition.
                            amount.sample(amount_rng);
                        }
                        seeded
                    }
                };

                let next = next_state(table, from, block.month, u);
                let depth = if next.is_wet() {
                    amount.sample(amount_rng)
                } else {
                    0.0
                };
                *state = Some(next);
                emit(depth);
            }
        }
        Ok(())
    }
}

/// Runs the simulator and stacks the replicates under the study period's
/// dates.
///
/// # Errors
///
/// See [`RainfallSimulator::new`] and [`RainfallSimulator::run`].
pub fn simulate_table(
    model: &DhmcModel,
    config: &SimConfig,
    rngs: &mut SimulationRngs,
) -> Result<SimulatedTable, SimError> {
    let replicates = RainfallSimulator::new(model, config)?.run(rngs)?;
    assemble(&model.period().dates(), replicates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dhmc_amount::{AmountConfig, AmountParameters, MonthlyLogNormal};
    use dhmc_calendar::StudyPeriod;
    use dhmc_markov::{DecadalTransitions, TransitionTable};

    fn amounts() -> AmountParameters {
        AmountParameters::new(
            [MonthlyLogNormal {
                mu_mean: 1.6,
                sigma_mean: 0.2,
                mu_std: 1.7,
                sigma_std: 0.2,
                corr: Some(0.5),
            }; 12],
        )
    }

    fn model(dd: Option<f64>, ww: Option<f64>, n_years: usize) -> DhmcModel {
        let period = StudyPeriod::new(2001, n_years).unwrap();
        let tables = (0..period.n_decades())
            .map(|_| TransitionTable::from_probabilities([dd; 12], [ww; 12]).unwrap())
            .collect();
        DhmcModel::new(
            period,
            DecadalTransitions::new(tables).unwrap(),
            amounts(),
            AmountConfig::new(),
        )
        .unwrap()
    }

    #[test]
    fn replicate_count_and_length() {
        let m = model(Some(0.7), Some(0.5), 10);
        let cfg = SimConfig::new().with_n_runs(3).with_n_warmup(2);
        let sim = RainfallSimulator::new(&m, &cfg).unwrap();
        let reps = sim.run(&mut SimulationRngs::seed_from_u64(1)).unwrap();
        assert_eq!(reps.len(), 3);
        for r in &reps {
            assert_eq!(r.len(), 3652);
        }
    }

    #[test]
    fn depths_zero_or_above_threshold() {
        let m = model(Some(0.6), Some(0.6), 10);
        let cfg = SimConfig::new().with_n_runs(2).with_n_warmup(1);
        let reps = RainfallSimulator::new(&m, &cfg)
            .unwrap()
            .run(&mut SimulationRngs::seed_from_u64(2))
            .unwrap();
        let mut wet = 0;
        for &x in reps.iter().flat_map(|r| r.depths()) {
            assert!(x == 0.0 || x >= 0.3, "depth {x}");
            assert!(((x * 100.0).round() - x * 100.0).abs() < 1e-6);
            wet += usize::from(x > 0.0);
        }
        assert!(wet > 0);
    }

    #[test]
    fn degenerate_dry_cell_always_leaves_dry() {
        // dry_to_dry undefined: no dry day is ever followed by another.
        let m = model(None, Some(0.5), 10);
        let cfg = SimConfig::new().with_n_runs(1).with_n_warmup(0);
        let reps = RainfallSimulator::new(&m, &cfg)
            .unwrap()
            .run(&mut SimulationRngs::seed_from_u64(3))
            .unwrap();
        let d = reps[0].depths();
        for pair in d.windows(2) {
            assert!(!(pair[0] == 0.0 && pair[1] == 0.0), "two dry days in a row");
        }
    }

    #[test]
    fn absorbing_dry_stays_dry_after_first_day() {
        // initial dry probability is (1 - 0.5) / (2 - 1 - 0.5) = 1.
        let m = model(Some(1.0), Some(0.5), 10);
        let cfg = SimConfig::new().with_n_runs(2).with_n_warmup(1);
        let reps = RainfallSimulator::new(&m, &cfg)
            .unwrap()
            .run(&mut SimulationRngs::seed_from_u64(4))
            .unwrap();
        assert!(reps.iter().all(|r| r.depths().iter().all(|&x| x == 0.0)));
    }

    #[test]
    fn state_carries_across_runs() {
        // Wet is absorbing and the initial dry probability is
        // (1 - 1) / (2 - 0.5 - 1) = 0, so the chain starts wet and never dries.
        let m = model(Some(0.5), Some(1.0), 10);
        let cfg = SimConfig::new().with_n_runs(2).with_n_warmup(1);
        let reps = RainfallSimulator::new(&m, &cfg)
            .unwrap()
            .run(&mut SimulationRngs::seed_from_u64(5))
            .unwrap();
        assert!(reps.iter().all(|r| r.depths().iter().all(|&x| x >= 0.3)));
    }

    #[test]
    fn deterministic_with_seed() {
        let m = model(Some(0.7), Some(0.4), 20);
        let cfg = SimConfig::new().with_n_runs(2).with_n_warmup(1);
        let sim = RainfallSimulator::new(&m, &cfg).unwrap();
        let a = sim.run(&mut SimulationRngs::seed_from_u64(99)).unwrap();
        let b = sim.run(&mut SimulationRngs::seed_from_u64(99)).unwrap();
        assert_eq!(a, b);
        let c = sim.run(&mut SimulationRngs::seed_from_u64(100)).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn reseed_policies_share_first_decade() {
        let m = model(Some(0.7), Some(0.4), 20);
        let first = SimConfig::new().with_n_runs(2).with_n_warmup(0);
        let every = first.clone().with_reseed(ReseedPolicy::EveryDecade);
        let a = RainfallSimulator::new(&m, &first)
            .unwrap()
            .run(&mut SimulationRngs::seed_from_u64(6))
            .unwrap();
        let b = RainfallSimulator::new(&m, &every)
            .unwrap()
            .run(&mut SimulationRngs::seed_from_u64(6))
            .unwrap();
        assert_eq!(a.len(), b.len());
        // Both seed on the very first day, so the first decade is identical.
        let first_decade = 3652;
        assert_eq!(a[0].depths()[..first_decade], b[0].depths()[..first_decade]);
    }

    #[test]
    fn rejects_zero_runs() {
        let m = model(Some(0.7), Some(0.4), 10);
        let cfg = SimConfig::new().with_n_runs(0);
        assert!(RainfallSimulator::new(&m, &cfg).is_err());
    }
}
