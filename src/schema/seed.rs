//! Seed types for initializing garden simulations from text.

use std::convert::Infallible;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{Tile, TileKind};

/// Initial garden layout, one row of tile kinds per input line.
///
/// Parsing never fails: characters without a tile meaning (including a
/// stray `\r` or a butterfly `B`) are skipped. Skipping inside a row makes
/// that row shorter, so rectangularity is only checked when the seed is
/// turned into a garden.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seed {
    /// Tile kinds in row-major order.
    pub rows: Vec<Vec<TileKind>>,
}

impl Seed {
    /// Parse the line-oriented text form.
    pub fn parse(text: &str) -> Self {
        let rows = text
            .lines()
            .map(|line| line.chars().filter_map(TileKind::from_symbol).collect())
            .collect();
        Self { rows }
    }

    /// Generate the positioned tile matrix for this seed.
    pub fn generate(&self) -> Vec<Vec<Tile>> {
        self.rows
            .iter()
            .enumerate()
            .map(|(y, row)| {
                row.iter()
                    .enumerate()
                    .map(|(x, &kind)| Tile::new(kind, x, y))
                    .collect()
            })
            .collect()
    }
}

impl FromStr for Seed {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}
