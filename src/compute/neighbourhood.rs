//! Clamped Moore neighbourhood.
//!
//! The garden does not wrap. Each of the 8 Moore offsets is clamped into the
//! grid independently, so offsets that fall off an edge collapse onto the
//! edge cell itself or onto another neighbour. After deduplication and
//! removal of the origin an interior cell has 8 neighbours, an edge cell 5
//! and a corner cell 3. Rule thresholds are applied to these sets as-is.

use std::collections::BTreeSet;

const OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

#[inline]
fn clamp_axis(v: usize, delta: isize, len: usize) -> usize {
    v.saturating_add_signed(delta).min(len.saturating_sub(1))
}

/// Distinct neighbouring coordinates of `(x, y)` in a `width x height` grid.
///
/// The result is sorted row-major (by `y`, then `x`) so that random choices
/// over it are reproducible for a given RNG seed.
pub fn neighbours(x: usize, y: usize, width: usize, height: usize) -> Vec<(usize, usize)> {
    let points: BTreeSet<(usize, usize)> = OFFSETS
        .iter()
        .map(|&(dx, dy)| (clamp_axis(y, dy, height), clamp_axis(x, dx, width)))
        .filter(|&(ny, nx)| (nx, ny) != (x, y))
        .collect();

    points.into_iter().map(|(ny, nx)| (nx, ny)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_interior() {
        let n = neighbours(1, 1, 3, 3);
        assert_eq!(n.len(), 8);
        assert!(!n.contains(&(1, 1)));
    }

    #[test]
    fn test_edges_and_corners() {
        // Matches the layout "*~ \n~**\n ~ ".
        for (x, y, expected) in [
            (1, 0, 5),
            (2, 1, 5),
            (1, 2, 5),
            (0, 1, 5),
            (0, 0, 3),
            (2, 2, 3),
            (0, 2, 3),
            (2, 0, 3),
        ] {
            assert_eq!(neighbours(x, y, 3, 3).len(), expected, "at ({x}, {y})");
        }
    }

    #[test]
    fn test_corner_members() {
        assert_eq!(neighbours(0, 0, 4, 4), vec![(1, 0), (0, 1), (1, 1)]);
    }

    #[test]
    fn test_sorted_row_major() {
        let n = neighbours(2, 2, 5, 5);
        let mut sorted = n.clone();
        sorted.sort_by_key(|&(x, y)| (y, x));
        assert_eq!(n, sorted);
    }

    #[test]
    fn test_degenerate_shapes() {
        assert!(neighbours(0, 0, 1, 1).is_empty());
        assert_eq!(neighbours(0, 0, 3, 1), vec![(1, 0)]);
        assert_eq!(neighbours(1, 0, 3, 1), vec![(0, 0), (2, 0)]);
    }

    proptest! {
        #[test]
        fn prop_neighbour_count_by_position(
            width in 2usize..40,
            height in 2usize..40,
            fx in 0.0f64..1.0,
            fy in 0.0f64..1.0,
        ) {
            let x = ((width as f64) * fx) as usize;
            let y = ((height as f64) * fy) as usize;
            let n = neighbours(x, y, width, height);

            let on_x_edge = x == 0 || x == width - 1;
            let on_y_edge = y == 0 || y == height - 1;
            let expected = match (on_x_edge, on_y_edge) {
                (true, true) => 3,
                (true, false) | (false, true) => 5,
                (false, false) => 8,
            };

            prop_assert_eq!(n.len(), expected);
            prop_assert!(!n.contains(&(x, y)));
            for &(nx, ny) in &n {
                prop_assert!(nx < width && ny < height);
                prop_assert!(nx.abs_diff(x) <= 1 && ny.abs_diff(y) <= 1);
            }
        }
    }
}
