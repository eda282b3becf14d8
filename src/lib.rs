//! Butterfly Garden - Flower/caterpillar cellular automaton with roaming butterflies.
//!
//! A garden is a fixed-size grid of tiles (empty ground, flowers and
//! caterpillars) advanced in synchronous steps. Flowers bloom where enough
//! flowers meet and score as they age; caterpillars consume flowers and
//! starve without them. Optionally, starving caterpillars release
//! butterflies that wander the garden and seed new caterpillars on flowers.
//!
//! # Architecture
//!
//! - `schema`: Configuration, tile types and text seeding
//! - `compute`: Neighbourhood, tile rules, butterflies, stepping and the
//!   steady-state search
//!
//! # Example
//!
//! ```rust
//! use butterfly_garden::{Garden, GardenConfig, SteadyState};
//!
//! let mut garden = Garden::from_text(" * \n* *\n * ", GardenConfig::default()).unwrap();
//!
//! garden.simulate().unwrap();
//! assert_eq!(garden.to_string(), " * \n***\n * ");
//!
//! match garden.simulate_till_steady().unwrap() {
//!     SteadyState::Cycle { period, .. } => println!("settled with period {period}"),
//!     SteadyState::Unsettled { steps } => println!("still changing after {steps} steps"),
//! }
//! println!("score: {}", garden.score());
//! ```

pub mod compute;
pub mod schema;

// Re-export commonly used types
pub use compute::{Butterfly, Garden, GardenError, GardenSnapshot, GardenStats, SteadyState};
pub use schema::{GardenConfig, ProbabilityMode, Seed, Tile, TileKind};
