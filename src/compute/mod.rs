//! Compute module - Garden stepping, butterflies and steady-state search.

mod butterfly;
mod chance;
mod garden;
mod neighbourhood;
mod stats;
mod steady;
mod transition;

pub use butterfly::*;
pub use chance::*;
pub use garden::*;
pub use neighbourhood::*;
pub use stats::*;
pub use steady::*;
pub use transition::*;
