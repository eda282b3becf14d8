//! Steady-state search.
//!
//! The garden is stepped until its canonical text form (tiles plus
//! butterfly overlay) repeats, or until the configured step limit is hit.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use serde::{Deserialize, Serialize};

use super::{Garden, GardenError};

/// Outcome of [`Garden::simulate_till_steady`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SteadyState {
    /// A previously seen state came back.
    Cycle {
        /// `detected_at - first_seen`; 1 for a fixed point.
        period: u64,
        /// Step at which the repeated state was first recorded.
        first_seen: u64,
        /// Step at which it was seen again.
        detected_at: u64,
    },
    /// The step limit was reached without any repeat.
    Unsettled {
        /// Step count when the search gave up.
        steps: u64,
    },
}

impl SteadyState {
    /// Cycle length, if one was found.
    pub fn period(&self) -> Option<u64> {
        match *self {
            SteadyState::Cycle { period, .. } => Some(period),
            SteadyState::Unsettled { .. } => None,
        }
    }

    pub fn is_fixed_point(&self) -> bool {
        self.period() == Some(1)
    }
}

impl Garden {
    /// Step until a state repeats or `step_count` reaches the step limit.
    ///
    /// The state present on entry is recorded at the current step count, so
    /// calling this on a garden that has already been stepped still yields
    /// correct periods.
    pub fn simulate_till_steady(&mut self) -> Result<SteadyState, GardenError> {
        let limit = self.config().step_limit;
        let mut seen: HashMap<String, u64> = HashMap::new();
        seen.insert(self.to_text(), self.step_count());

        while self.step_count() < limit {
            self.simulate()?;
            let detected_at = self.step_count();

            match seen.entry(self.to_text()) {
                Entry::Occupied(entry) => {
                    let first_seen = *entry.get();
                    let period = detected_at - first_seen;
                    log::debug!(
                        "steady state after {detected_at} steps: period {period} (first seen at {first_seen})"
                    );
                    return Ok(SteadyState::Cycle {
                        period,
                        first_seen,
                        detected_at,
                    });
                }
                Entry::Vacant(entry) => {
                    entry.insert(detected_at);
                }
            }
        }

        log::warn!(
            "no steady state within {limit} steps ({} distinct states)",
            seen.len()
        );
        Ok(SteadyState::Unsettled {
            steps: self.step_count(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{GardenConfig, ProbabilityMode};

    fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn test_fixed_point() {
        init_logging();
        let mut g = Garden::from_text("   \n   \n   ", GardenConfig::default()).unwrap();

        let result = g.simulate_till_steady().unwrap();
        assert_eq!(
            result,
            SteadyState::Cycle {
                period: 1,
                first_seen: 0,
                detected_at: 1
            }
        );
        assert!(result.is_fixed_point());
    }

    #[test]
    fn test_fixed_point_is_idempotent() {
        let mut g = Garden::from_text("** \n** \n   ", GardenConfig::default()).unwrap();
        let before = g.to_text();

        g.simulate().unwrap();
        assert_eq!(g.to_text(), before);
        g.simulate().unwrap();
        assert_eq!(g.to_text(), before);

        let result = g.simulate_till_steady().unwrap();
        assert_eq!(result.period(), Some(1));
        assert_eq!(g.step_count(), 3);
    }

    #[test]
    fn test_settles_after_transient() {
        // The flower ring fills its centre, then its corners, then stays put.
        let mut g = Garden::from_text(" * \n* *\n * ", GardenConfig::default()).unwrap();

        let result = g.simulate_till_steady().unwrap();
        assert_eq!(
            result,
            SteadyState::Cycle {
                period: 1,
                first_seen: 2,
                detected_at: 3
            }
        );
        assert_eq!(g.to_text(), "***\n***\n***");
    }

    #[test]
    fn test_step_limit_is_distinguishable() {
        init_logging();
        let config = GardenConfig {
            step_limit: 1,
            ..Default::default()
        };
        let mut g = Garden::from_text(" * \n* *\n * ", config).unwrap();

        let result = g.simulate_till_steady().unwrap();
        assert_eq!(result, SteadyState::Unsettled { steps: 1 });
        assert_eq!(result.period(), None);
        assert!(!result.is_fixed_point());
    }

    #[test]
    fn test_limit_already_reached() {
        let config = GardenConfig {
            step_limit: 2,
            ..Default::default()
        };
        let mut g = Garden::from_text("~*~", config).unwrap();
        g.run(2).unwrap();

        assert_eq!(
            g.simulate_till_steady().unwrap(),
            SteadyState::Unsettled { steps: 2 }
        );
        assert_eq!(g.step_count(), 2);
    }

    #[test]
    fn test_immortal_butterfly_terminates() {
        // An immortal butterfly wanders a flowerless garden; the state space
        // is tiny, so a repeat must show up well before the limit.
        let config = GardenConfig {
            spawn_probability: 1.0,
            mortality_probability: 0.0,
            probability_mode: ProbabilityMode::Bernoulli,
            random_seed: Some(5),
            ..GardenConfig::with_butterflies()
        };
        let mut g = Garden::from_text("   \n ~ \n   ", config).unwrap();

        let result = g.simulate_till_steady().unwrap();
        match result {
            SteadyState::Cycle {
                period,
                first_seen,
                detected_at,
            } => {
                assert!(period >= 1);
                assert_eq!(detected_at - first_seen, period);
                assert_eq!(detected_at, g.step_count());
            }
            SteadyState::Unsettled { .. } => panic!("expected a repeat, got {result:?}"),
        }
        assert_eq!(g.butterflies().len(), 1);
    }
}
