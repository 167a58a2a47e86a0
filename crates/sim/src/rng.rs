//! Random streams driving the simulation.

use rand::SeedableRng;
use rand::rngs::StdRng;

/// Two independent generators: one for the daily occurrence uniforms and
/// one for every amount draw (log-normal, normal and gamma).
///
/// Keeping the streams apart means the occurrence sequence does not shift
/// when a month turns degenerate and stops consuming amount draws.
#[derive(Debug, Clone)]
pub struct SimulationRngs {
    pub(crate) occurrence: StdRng,
    pub(crate) amount: StdRng,
}

impl SimulationRngs {
    /// Derives both streams from one seed.
    pub fn seed_from_u64(seed: u64) -> Self {
        Self::from_master(StdRng::seed_from_u64(seed))
    }

    /// Seeds both streams from the operating system.
    pub fn from_os_rng() -> Self {
        Self::from_master(StdRng::from_os_rng())
    }

    /// Seeded when `seed` is `Some`, from the operating system otherwise.
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => Self::seed_from_u64(s),
            None => Self::from_os_rng(),
        }
    }

    fn from_master(mut master: StdRng) -> Self {
        Self {
            occurrence: StdRng::from_rng(&mut master),
            amount: StdRng::from_rng(&mut master),
        }
    }
}
