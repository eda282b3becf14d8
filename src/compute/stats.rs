//! Per-step summaries handed to display code.

use serde::{Deserialize, Serialize};

use crate::schema::TileKind;

use super::{Garden, GardenError};

/// Text and counters of the garden at one step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GardenSnapshot {
    pub step: u64,
    pub score: i64,
    /// Canonical text form, butterflies included.
    pub board: String,
}

impl GardenSnapshot {
    pub fn from_garden(garden: &Garden) -> Self {
        Self {
            step: garden.step_count(),
            score: garden.score(),
            board: garden.to_text(),
        }
    }
}

/// Population statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GardenStats {
    pub step: u64,
    pub score: i64,
    pub empty: usize,
    pub flowers: usize,
    pub caterpillars: usize,
    pub butterflies: usize,
}

impl GardenStats {
    pub fn from_garden(garden: &Garden) -> Self {
        let mut stats = Self {
            step: garden.step_count(),
            score: garden.score(),
            butterflies: garden.butterflies().len(),
            ..Default::default()
        };

        for tile in garden.tiles().iter().flatten() {
            match tile.kind {
                TileKind::Empty => stats.empty += 1,
                TileKind::Flower => stats.flowers += 1,
                TileKind::Caterpillar => stats.caterpillars += 1,
            }
        }

        stats
    }
}

impl Garden {
    /// Snapshot of the current state.
    pub fn snapshot(&self) -> GardenSnapshot {
        GardenSnapshot::from_garden(self)
    }

    /// Step until `step_count` reaches `generations`, collecting a snapshot
    /// of the starting state and of every step taken.
    pub fn record(&mut self, generations: u64) -> Result<Vec<GardenSnapshot>, GardenError> {
        let mut frames = vec![self.snapshot()];
        while self.step_count() < generations {
            self.simulate()?;
            frames.push(self.snapshot());
        }
        Ok(frames)
    }
}
