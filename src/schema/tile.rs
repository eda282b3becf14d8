//! Tile types for the garden grid.

use serde::{Deserialize, Serialize};

/// Symbol used when a butterfly is overlaid on a tile.
pub const BUTTERFLY_SYMBOL: char = 'B';

/// The closed set of states a garden tile can be in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileKind {
    /// Unoccupied ground.
    Empty,
    /// Blooming flower; scores while it survives.
    Flower,
    /// Feeding caterpillar; costs a point per step it survives.
    Caterpillar,
}

impl TileKind {
    /// Character used in the canonical text form.
    #[inline]
    pub fn symbol(self) -> char {
        match self {
            TileKind::Empty => ' ',
            TileKind::Flower => '*',
            TileKind::Caterpillar => '~',
        }
    }

    /// Inverse of [`TileKind::symbol`]. Unknown characters map to `None`.
    #[inline]
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            ' ' => Some(TileKind::Empty),
            '*' => Some(TileKind::Flower),
            '~' => Some(TileKind::Caterpillar),
            _ => None,
        }
    }
}

/// A single grid slot: its kind, fixed position and age in steps.
///
/// Tiles never move. A transition produces a replacement tile at the same
/// position, with age reset to 0 if the kind changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub kind: TileKind,
    pub x: usize,
    pub y: usize,
    pub age: u32,
}

impl Tile {
    /// Create a fresh tile of `kind` at `(x, y)` with age 0.
    pub fn new(kind: TileKind, x: usize, y: usize) -> Self {
        Self { kind, x, y, age: 0 }
    }

    pub fn empty(x: usize, y: usize) -> Self {
        Self::new(TileKind::Empty, x, y)
    }

    pub fn flower(x: usize, y: usize) -> Self {
        Self::new(TileKind::Flower, x, y)
    }

    pub fn caterpillar(x: usize, y: usize) -> Self {
        Self::new(TileKind::Caterpillar, x, y)
    }

    /// Builder-style age override, mostly useful when setting up tests.
    pub fn with_age(mut self, age: u32) -> Self {
        self.age = age;
        self
    }

    #[inline]
    pub fn position(&self) -> (usize, usize) {
        (self.x, self.y)
    }

    #[inline]
    pub fn symbol(&self) -> char {
        self.kind.symbol()
    }

    #[inline]
    pub fn is(&self, kind: TileKind) -> bool {
        self.kind == kind
    }

    /// Same tile, same kind, one step older.
    #[inline]
    pub(crate) fn aged(self) -> Self {
        Self {
            age: self.age.saturating_add(1),
            ..self
        }
    }

    /// Replacement tile of a different kind at the same position.
    #[inline]
    pub(crate) fn become_kind(self, kind: TileKind) -> Self {
        Self::new(kind, self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_roundtrip() {
        for kind in [TileKind::Empty, TileKind::Flower, TileKind::Caterpillar] {
            assert_eq!(TileKind::from_symbol(kind.symbol()), Some(kind));
        }
        assert_eq!(TileKind::from_symbol(BUTTERFLY_SYMBOL), None);
        assert_eq!(TileKind::from_symbol('\n'), None);
    }

    #[test]
    fn test_become_kind_resets_age() {
        let tile = Tile::flower(3, 4).with_age(7);
        let next = tile.become_kind(TileKind::Caterpillar);

        assert_eq!(next.kind, TileKind::Caterpillar);
        assert_eq!(next.position(), (3, 4));
        assert_eq!(next.age, 0);
    }

    #[test]
    fn test_aged_keeps_kind() {
        let tile = Tile::empty(0, 1).with_age(2).aged();
        assert!(tile.is(TileKind::Empty));
        assert_eq!(tile.age, 3);
    }
}
