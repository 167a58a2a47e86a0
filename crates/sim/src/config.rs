//! Configuration for the rainfall simulator.

use crate::error::SimError;

/// When the wet/dry chain is (re)started from the first-day dry probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReseedPolicy {
    /// Only on the very first day of the first (warm-up) run; the state then
    /// carries across every following day and run.
    #[default]
    FirstRun,
    /// On the first day of every decade of every run.
    EveryDecade,
}

/// Configuration for the simulation loop.
///
/// # Example
///
/// ```
/// use dhmc_sim::SimConfig;
///
/// let config = SimConfig::new().with_n_runs(5).with_n_warmup(10);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug)]
pub struct SimConfig {
    n_runs: usize,
    n_warmup: usize,
    reseed: ReseedPolicy,
}

impl SimConfig {
    /// Creates a new configuration with defaults.
    ///
    /// Defaults: `n_runs = 100`, `n_warmup = 10`, `reseed = FirstRun`.
    pub fn new() -> Self {
        Self {
            n_runs: 100,
            n_warmup: 10,
            reseed: ReseedPolicy::FirstRun,
        }
    }

    /// Sets the number of retained replicates.
    pub fn with_n_runs(mut self, n: usize) -> Self {
        self.n_runs = n;
        self
    }

    /// Sets the number of discarded warm-up runs.
    pub fn with_n_warmup(mut self, n: usize) -> Self {
        self.n_warmup = n;
        self
    }

    /// Sets the reseed policy.
    pub fn with_reseed(mut self, reseed: ReseedPolicy) -> Self {
        self.reseed = reseed;
        self
    }

    /// Returns the number of retained replicates.
    pub fn n_runs(&self) -> usize {
        self.n_runs
    }

    /// Returns the number of warm-up runs.
    pub fn n_warmup(&self) -> usize {
        self.n_warmup
    }

    /// Returns the reseed policy.
    pub fn reseed(&self) -> ReseedPolicy {
        self.reseed
    }

    /// Validates this configuration.
    ///
    /// At least one replicate must be requested.
    pub fn validate(&self) -> Result<(), SimError> {
        if self.n_runs == 0 {
            return Err(SimError::InvalidConfig {
                reason: "n_runs must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = SimConfig::default();
        assert_eq!(c.n_runs(), 100);
        assert_eq!(c.n_warmup(), 10);
        assert_eq!(c.reseed(), ReseedPolicy::FirstRun);
    }

    #[test]
    fn builder() {
        let c = SimConfig::new()
            .with_n_runs(3)
            .with_n_warmup(0)
            .with_reseed(ReseedPolicy::EveryDecade);
        assert_eq!(c.n_runs(), 3);
        assert_eq!(c.n_warmup(), 0);
        assert_eq!(c.reseed(), ReseedPolicy::EveryDecade);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn zero_runs_rejected() {
        assert!(SimConfig::new().with_n_runs(0).validate().is_err());
    }
}
