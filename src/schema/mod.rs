//! Schema module - Configuration, tile and seeding types for garden simulations.

mod config;
mod seed;
mod tile;

pub use config::*;
pub use seed::*;
pub use tile::*;
