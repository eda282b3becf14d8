//! Configuration types for garden simulation parameters.

use serde::{Deserialize, Serialize};

fn default_spawn_probability() -> f64 {
    0.01
}

fn default_mortality_probability() -> f64 {
    0.1
}

fn default_step_limit() -> u64 {
    1_000
}

/// How a probability `p` is turned into a yes/no outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ProbabilityMode {
    /// Draw an integer in `[1, trunc(1/p)]` and succeed on the upper bound.
    ///
    /// Only exact for probabilities whose reciprocal is an integer, but
    /// yields the same probability mass as recorded garden traces.
    #[default]
    Reciprocal,
    /// Direct Bernoulli(p) draw.
    Bernoulli,
}

/// Top-level garden configuration.
///
/// The grid shape is not part of the configuration: it is taken from the
/// initial tile matrix and never changes afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GardenConfig {
    /// Enable the butterfly spawn and move passes.
    #[serde(default)]
    pub with_butterflies: bool,
    /// Chance that a starving caterpillar releases a butterfly.
    /// Values outside (0, 1] disable spawning.
    #[serde(default = "default_spawn_probability")]
    pub spawn_probability: f64,
    /// Per-step chance that a butterfly dies.
    /// Values outside (0, 1] make butterflies immortal.
    #[serde(default = "default_mortality_probability")]
    pub mortality_probability: f64,
    /// Hard cap on `step_count` for the steady-state search.
    #[serde(default = "default_step_limit")]
    pub step_limit: u64,
    /// How probabilities are sampled.
    #[serde(default)]
    pub probability_mode: ProbabilityMode,
    /// Seed for the garden RNG (None = seed from entropy).
    #[serde(default)]
    pub random_seed: Option<u64>,
}

impl Default for GardenConfig {
    fn default() -> Self {
        Self {
            with_butterflies: false,
            spawn_probability: default_spawn_probability(),
            mortality_probability: default_mortality_probability(),
            step_limit: default_step_limit(),
            probability_mode: ProbabilityMode::default(),
            random_seed: None,
        }
    }
}

impl GardenConfig {
    /// Default configuration with butterflies switched on.
    pub fn with_butterflies() -> Self {
        Self {
            with_butterflies: true,
            ..Self::default()
        }
    }

    /// Validate configuration parameters.
    ///
    /// Out-of-range probabilities are deliberately accepted; they switch the
    /// corresponding stochastic branch off.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.step_limit == 0 {
            return Err(ConfigError::ZeroStepLimit);
        }
        Ok(())
    }
}

/// Configuration validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Step limit must be non-zero")]
    ZeroStepLimit,
}
