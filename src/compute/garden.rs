//! Garden - Main simulation driver.
//!
//! Owns the tile grid, the running score, the step counter and the live
//! butterflies, and advances all of them one synchronous step at a time.

use std::collections::HashMap;
use std::fmt;

use rayon::prelude::*;

use crate::schema::{BUTTERFLY_SYMBOL, ConfigError, GardenConfig, Seed, Tile};

use super::{Butterfly, GardenRng, NeighbourCounts, butterfly, neighbours};

/// Structural and invariant errors raised by the garden.
#[derive(Debug, thiserror::Error)]
pub enum GardenError {
    #[error("Garden must have at least one row and one column")]
    Empty,
    #[error("Row {row} has {found} tiles, expected {expected}")]
    NonRectangular {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("Tile at ({x}, {y}) claims position ({found_x}, {found_y})")]
    MisplacedTile {
        x: usize,
        y: usize,
        found_x: usize,
        found_y: usize,
    },
    #[error("No next tile computed for ({x}, {y})")]
    MissingTile { x: usize, y: usize },
    #[error("Caterpillar at ({x}, {y}) turned into a flower")]
    CaterpillarBloomed { x: usize, y: usize },
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// A rectangular garden of tiles with roaming butterflies.
pub struct Garden {
    width: usize,
    height: usize,
    tiles: Vec<Vec<Tile>>,
    butterflies: Vec<Butterfly>,
    step_count: u64,
    score: i64,
    config: GardenConfig,
    rng: GardenRng,
}

impl Garden {
    /// Create a garden from a positioned tile matrix.
    ///
    /// Every row must have the same, non-zero length, and every tile must
    /// sit at the position it claims.
    pub fn new(tiles: Vec<Vec<Tile>>, config: GardenConfig) -> Result<Self, GardenError> {
        config.validate()?;
        let (width, height) = dimensions(&tiles)?;

        for (y, row) in tiles.iter().enumerate() {
            for (x, tile) in row.iter().enumerate() {
                if tile.position() != (x, y) {
                    return Err(GardenError::MisplacedTile {
                        x,
                        y,
                        found_x: tile.x,
                        found_y: tile.y,
                    });
                }
            }
        }

        let rng = match config.random_seed {
            Some(seed) => GardenRng::new(seed, config.probability_mode),
            None => GardenRng::random(config.probability_mode),
        };

        Ok(Self {
            width,
            height,
            tiles,
            butterflies: Vec::new(),
            step_count: 0,
            score: 0,
            config,
            rng,
        })
    }

    /// Create a garden from a parsed seed.
    pub fn from_seed(seed: &Seed, config: GardenConfig) -> Result<Self, GardenError> {
        Self::new(seed.generate(), config)
    }

    /// Create a garden from its text form.
    pub fn from_text(text: &str, config: GardenConfig) -> Result<Self, GardenError> {
        Self::from_seed(&Seed::parse(text), config)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Steps executed so far.
    #[inline]
    pub fn step_count(&self) -> u64 {
        self.step_count
    }

    /// Running score; never reset, may be negative.
    #[inline]
    pub fn score(&self) -> i64 {
        self.score
    }

    pub fn config(&self) -> &GardenConfig {
        &self.config
    }

    pub fn tiles(&self) -> &[Vec<Tile>] {
        &self.tiles
    }

    /// Tile at `(x, y)`, if in range.
    pub fn tile(&self, x: usize, y: usize) -> Option<&Tile> {
        self.tiles.get(y).and_then(|row| row.get(x))
    }

    /// Live butterflies, in list order.
    pub fn butterflies(&self) -> &[Butterfly] {
        &self.butterflies
    }

    /// Add a butterfly to the garden, e.g. when restoring a recorded state.
    ///
    /// Positions outside the grid are clamped onto its edge.
    pub fn release(&mut self, mut butterfly: Butterfly) {
        butterfly.x = butterfly.x.min(self.width - 1);
        butterfly.y = butterfly.y.min(self.height - 1);
        self.butterflies.push(butterfly);
    }

    /// The butterfly drawn at `(x, y)`: the last listed one at that position.
    pub fn butterfly_at(&self, x: usize, y: usize) -> Option<&Butterfly> {
        self.butterflies
            .iter()
            .rev()
            .find(|b| b.position() == (x, y))
    }

    /// Neighbouring tiles of `(x, y)` under the clamped Moore neighbourhood.
    ///
    /// Empty when `(x, y)` lies outside the garden.
    pub fn neighbours(&self, x: usize, y: usize) -> Vec<&Tile> {
        if x >= self.width || y >= self.height {
            return Vec::new();
        }
        neighbours(x, y, self.width, self.height)
            .into_iter()
            .map(|(nx, ny)| &self.tiles[ny][nx])
            .collect()
    }

    /// Canonical text form: one line per row, butterflies drawn over tiles.
    ///
    /// This is both the display form and the key used by the steady-state
    /// search, so the two can never disagree.
    pub fn to_text(&self) -> String {
        // Later butterflies overwrite earlier ones at the same position.
        let overlay: HashMap<(usize, usize), &Butterfly> = self
            .butterflies
            .iter()
            .map(|b| (b.position(), b))
            .collect();

        let mut out = String::with_capacity((self.width + 1) * self.height);
        for (y, row) in self.tiles.iter().enumerate() {
            if y > 0 {
                out.push('\n');
            }
            for tile in row {
                if overlay.contains_key(&tile.position()) {
                    out.push(BUTTERFLY_SYMBOL);
                } else {
                    out.push(tile.symbol());
                }
            }
        }
        out
    }

    /// Advance the garden by one step.
    ///
    /// Every tile transitions against the frozen previous grid (in parallel
    /// across rows), then the butterfly spawn and move passes run over the
    /// new grid, which is finally swapped in.
    pub fn simulate(&mut self) -> Result<(), GardenError> {
        let (width, height) = (self.width, self.height);
        let previous = &self.tiles;

        let computed: Vec<Vec<(Tile, i64)>> = previous
            .par_iter()
            .map(|row| {
                row.iter()
                    .map(|tile| {
                        let counts = NeighbourCounts::tally(
                            neighbours(tile.x, tile.y, width, height)
                                .into_iter()
                                .map(|(nx, ny)| previous[ny][nx].kind),
                        );
                        tile.transition(counts)
                    })
                    .collect()
            })
            .collect();

        if let Some((x, y)) = first_missing(&computed, width, height) {
            return Err(GardenError::MissingTile { x, y });
        }

        let mut next = Vec::with_capacity(height);
        for row in computed {
            let mut new_row = Vec::with_capacity(width);
            for (tile, delta) in row {
                self.score += delta;
                new_row.push(tile);
            }
            next.push(new_row);
        }

        if self.config.with_butterflies {
            let released = butterfly::spawn(
                &self.tiles,
                &next,
                self.config.spawn_probability,
                self.config.mortality_probability,
                &mut self.rng,
            )?;
            let mut flock = std::mem::take(&mut self.butterflies);
            flock.extend(released);
            // Landings rewrite single tiles of the new grid in place.
            self.butterflies = butterfly::flutter(flock, &mut next, &mut self.rng);
        }

        self.tiles = next;
        self.step_count += 1;
        Ok(())
    }

    /// Step until `step_count` reaches `generations`.
    pub fn run(&mut self, generations: u64) -> Result<(), GardenError> {
        while self.step_count < generations {
            self.simulate()?;
        }
        Ok(())
    }
}

impl fmt::Display for Garden {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl fmt::Debug for Garden {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Garden")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("step_count", &self.step_count)
            .field("score", &self.score)
            .field("butterflies", &self.butterflies.len())
            .finish()
    }
}

/// Width and height of a tile matrix, rejecting ragged or empty input.
fn dimensions(tiles: &[Vec<Tile>]) -> Result<(usize, usize), GardenError> {
    let height = tiles.len();
    let width = tiles.first().map_or(0, Vec::len);
    if height == 0 || width == 0 {
        return Err(GardenError::Empty);
    }

    for (row, tiles_in_row) in tiles.iter().enumerate() {
        if tiles_in_row.len() != width {
            return Err(GardenError::NonRectangular {
                row,
                expected: width,
                found: tiles_in_row.len(),
            });
        }
    }

    Ok((width, height))
}

/// First coordinate of a `width x height` grid with no computed tile.
fn first_missing<T>(grid: &[Vec<T>], width: usize, height: usize) -> Option<(usize, usize)> {
    (0..height).find_map(|y| match grid.get(y) {
        None => Some((0, y)),
        Some(row) if row.len() < width => Some((row.len(), y)),
        Some(_) => None,
    })
}
