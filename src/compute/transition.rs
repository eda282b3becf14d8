//! Tile state machine.
//!
//! A transition reads the tile and the kinds of its (clamped) neighbours and
//! returns the replacement tile plus the score contribution for the step.
//! It never touches the neighbours or any garden-level state.

use crate::schema::{Tile, TileKind};

/// Flower neighbours needed for empty ground to bloom.
pub const BLOOM_THRESHOLD: usize = 3;

/// Caterpillar neighbours needed to consume a flower.
pub const CONSUME_THRESHOLD: usize = 3;

/// Per-kind neighbour counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NeighbourCounts {
    pub flowers: usize,
    pub caterpillars: usize,
}

impl NeighbourCounts {
    pub fn tally<I>(kinds: I) -> Self
    where
        I: IntoIterator<Item = TileKind>,
    {
        kinds
            .into_iter()
            .fold(Self::default(), |mut counts, kind| {
                match kind {
                    TileKind::Flower => counts.flowers += 1,
                    TileKind::Caterpillar => counts.caterpillars += 1,
                    TileKind::Empty => {}
                }
                counts
            })
    }
}

impl Tile {
    /// Compute the next state of this tile.
    ///
    /// | Current | Condition | Next | Score |
    /// |---|---|---|---|
    /// | Empty | >= 3 flowers | Flower(0) | 0 |
    /// | Empty | otherwise | Empty(age+1) | 0 |
    /// | Flower | >= 3 caterpillars | Caterpillar(0) | 0 |
    /// | Flower | otherwise | Flower(age+1) | +new age |
    /// | Caterpillar | >= 1 caterpillar and >= 1 flower | Caterpillar(age+1) | -1 |
    /// | Caterpillar | otherwise | Empty(0) | 0 |
    pub fn transition(&self, counts: NeighbourCounts) -> (Tile, i64) {
        match self.kind {
            TileKind::Empty if counts.flowers >= BLOOM_THRESHOLD => {
                (self.become_kind(TileKind::Flower), 0)
            }
            TileKind::Empty => (self.aged(), 0),
            TileKind::Flower if counts.caterpillars >= CONSUME_THRESHOLD => {
                (self.become_kind(TileKind::Caterpillar), 0)
            }
            TileKind::Flower => {
                let next = self.aged();
                (next, i64::from(next.age))
            }
            TileKind::Caterpillar if counts.caterpillars >= 1 && counts.flowers >= 1 => {
                (self.aged(), -1)
            }
            TileKind::Caterpillar => (self.become_kind(TileKind::Empty), 0),
        }
    }
}
