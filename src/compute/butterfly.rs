//! Butterfly agents.
//!
//! Butterflies live above the tile grid. They are released by starving
//! caterpillars, wander between clamped neighbours, may die, and turn the
//! first flower they find themselves on into a caterpillar.

use serde::{Deserialize, Serialize};

use crate::schema::{Tile, TileKind};

use super::{GardenError, GardenRng, neighbours};

/// A mobile agent hovering over the garden.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Butterfly {
    pub x: usize,
    pub y: usize,
    /// Steps survived since release.
    pub age: u32,
    /// Per-step death chance; outside (0, 1] the butterfly never dies.
    pub mortality: f64,
}

/// What happened to a butterfly during the move pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Flight {
    /// Settled on a flower, which became a caterpillar.
    Landed,
    /// Died in flight.
    Died,
    /// Moved to a neighbouring coordinate.
    Moved(Butterfly),
}

impl Butterfly {
    pub fn new(x: usize, y: usize, mortality: f64) -> Self {
        Self {
            x,
            y,
            age: 0,
            mortality,
        }
    }

    #[inline]
    pub fn position(&self) -> (usize, usize) {
        (self.x, self.y)
    }

    /// Advance this butterfly by one step against the freshly computed grid.
    ///
    /// A landing rewrites exactly one tile of `tiles` in place; this is the
    /// only mutation of the new grid after the transition pass. A butterfly
    /// positioned outside `tiles` is dropped as dead.
    pub fn fly(mut self, tiles: &mut [Vec<Tile>], rng: &mut GardenRng) -> Flight {
        let (x, y) = self.position();
        let height = tiles.len();
        let width = tiles.first().map_or(0, Vec::len);

        let Some(tile) = tiles.get_mut(y).and_then(|row| row.get_mut(x)) else {
            log::trace!("butterfly at ({x}, {y}) is outside the garden");
            return Flight::Died;
        };
        if tile.is(TileKind::Flower) {
            *tile = tile.become_kind(TileKind::Caterpillar);
            log::trace!("butterfly landed on flower at ({x}, {y})");
            return Flight::Landed;
        }

        if rng.trial(self.mortality) {
            log::trace!("butterfly died at ({x}, {y}) aged {}", self.age);
            return Flight::Died;
        }

        // A 1x1 garden has nowhere to go; the butterfly hovers in place.
        if let Some((nx, ny)) = rng.pick(&neighbours(x, y, width, height)) {
            self.x = nx;
            self.y = ny;
        }
        self.age = self.age.saturating_add(1);
        Flight::Moved(self)
    }
}

/// Release butterflies where a caterpillar starved during the last step.
///
/// `previous` and `next` are the grids before and after the transition
/// pass. A caterpillar that turned into a flower contradicts the tile rules
/// and is reported as an error.
pub fn spawn(
    previous: &[Vec<Tile>],
    next: &[Vec<Tile>],
    spawn_probability: f64,
    mortality: f64,
    rng: &mut GardenRng,
) -> Result<Vec<Butterfly>, GardenError> {
    let mut released = Vec::new();

    for (old_row, new_row) in previous.iter().zip(next) {
        for (old, new) in old_row.iter().zip(new_row) {
            if !old.is(TileKind::Caterpillar) || new.is(TileKind::Caterpillar) {
                continue;
            }
            if new.is(TileKind::Flower) {
                return Err(GardenError::CaterpillarBloomed { x: old.x, y: old.y });
            }
            if rng.trial(spawn_probability) {
                log::trace!("butterfly released at ({}, {})", old.x, old.y);
                released.push(Butterfly::new(old.x, old.y, mortality));
            }
        }
    }

    Ok(released)
}

/// Run the move pass over every butterfly, in list order.
pub fn flutter(
    butterflies: Vec<Butterfly>,
    tiles: &mut [Vec<Tile>],
    rng: &mut GardenRng,
) -> Vec<Butterfly> {
    butterflies
        .into_iter()
        .filter_map(|b| match b.fly(tiles, rng) {
            Flight::Moved(moved) => Some(moved),
            Flight::Landed | Flight::Died => None,
        })
        .collect()
}
