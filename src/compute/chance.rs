//! Random draws for the butterfly passes.

use rand::prelude::*;

use crate::schema::ProbabilityMode;

/// Random number generator wrapper for garden operations.
pub struct GardenRng {
    rng: StdRng,
    mode: ProbabilityMode,
}

impl GardenRng {
    /// Create from seed.
    pub fn new(seed: u64, mode: ProbabilityMode) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            mode,
        }
    }

    /// Create with random seed.
    pub fn random(mode: ProbabilityMode) -> Self {
        Self {
            rng: StdRng::from_entropy(),
            mode,
        }
    }

    /// Run one trial with success probability `p`.
    ///
    /// Probabilities outside (0, 1], NaN included, always fail.
    pub fn trial(&mut self, p: f64) -> bool {
        if !(p > 0.0 && p <= 1.0) {
            return false;
        }
        match self.mode {
            ProbabilityMode::Reciprocal => {
                // p <= 1 keeps this at least 1; tiny p saturates at u64::MAX.
                let upper = (1.0 / p).trunc() as u64;
                self.rng.gen_range(1..=upper) == upper
            }
            ProbabilityMode::Bernoulli => self.rng.gen_bool(p),
        }
    }

    /// Uniformly pick one element, or `None` if `items` is empty.
    pub fn pick<T: Copy>(&mut self, items: &[T]) -> Option<T> {
        items.choose(&mut self.rng).copied()
    }
}
