//! Fixed 3x3 neighbourhood rotation.

use crate::grid::Grid;

/// Offsets of the eight ring cells of a 3x3 neighbourhood, in clockwise
/// order starting at the top-left corner.
const RING: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
];

/// Rotate the 3x3 neighbourhood of every fully surrounded cell
/// counter-clockwise.
///
/// A cell qualifies when it and all 8 of its neighbours are non-empty. All
/// reads come from `grid` and all writes go to a copy, so overlapping
/// neighbourhoods never see a partially rotated input: where two
/// neighbourhoods overlap, the one whose center comes later in row-major
/// order wins. Grids smaller than 3x3 are returned unchanged.
///
/// # Example
///
/// ```
/// use gridshift_core::{transform::center_rotate_3x3, Grid};
///
/// let grid = Grid::from_rows([["a", "b", "c"], ["d", "e", "f"], ["g", "h", "i"]]).unwrap();
/// let rotated = center_rotate_3x3(&grid);
/// assert_eq!(rotated.cells, ["c", "f", "i", "b", "e", "h", "a", "d", "g"]);
/// ```
pub fn center_rotate_3x3(grid: &Grid) -> Grid {
    let mut result = grid.clone();
    if grid.height < 3 || grid.width < 3 {
        return result;
    }

    for row in 1..grid.height - 1 {
        for col in 1..grid.width - 1 {
            if !is_surrounded(grid, row, col) {
                continue;
            }

            // Each ring cell takes the value two steps further clockwise
            for (pos, &(dr, dc)) in RING.iter().enumerate() {
                let (sr, sc) = RING[(pos + 2) % RING.len()];
                let value = &grid.cells[grid.index(offset(row, sr), offset(col, sc))];
                let dst = result.index(offset(row, dr), offset(col, dc));
                result.cells[dst].clone_from(value);
            }
        }
    }

    result
}

/// Check that the cell at `(row, col)` and all 8 neighbours are non-empty.
///
/// `(row, col)` must be an interior cell.
fn is_surrounded(grid: &Grid, row: usize, col: usize) -> bool {
    !grid.is_blank(row, col)
        && RING
            .iter()
            .all(|&(dr, dc)| !grid.is_blank(offset(row, dr), offset(col, dc)))
}

#[inline]
fn offset(base: usize, delta: isize) -> usize {
    base.wrapping_add_signed(delta)
}


// ============================================================================
// Property-Based Tests
// ============================================================================
