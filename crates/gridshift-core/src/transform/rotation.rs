//! Size-sweeping rotation of isolated square blocks.
//!
//! # Algorithm
//!
//! For every block size from 2 up to `min(width, height)`, and for every
//! top-left anchor in row-major order, a block qualifies when:
//!
//! 1. every cell inside it is non-empty, and
//! 2. each side not on the grid border is fully lined with blank cells.
//!
//! A qualifying block is rotated counter-clockwise immediately, so anchors
//! visited later (including every anchor of larger sizes) see the result.
//!
//! Rotation walks the block ring by ring. For layer `l` with
//! `first = l` and `last = size - 1 - l`, each ring element is cycled
//! through the four sides with a single temporary:
//! ```text
//! top    <- right
//! right  <- bottom
//! bottom <- left
//! left   <- top
//! ```

use std::mem;

use crate::grid::Grid;

/// Rotate every isolated, fully populated square block counter-clockwise.
///
/// Block sizes are visited in increasing order and anchors in row-major
/// order; each rotation is applied to the working grid before the next
/// candidate is tested. Grids narrower or shorter than 2 cells are
/// returned unchanged.
///
/// # Example
///
/// ```
/// use gridshift_core::{transform::sweep_rotate, Grid};
///
/// let grid = Grid::from_rows([["a", "b"], ["c", "d"]]).unwrap();
/// let rotated = sweep_rotate(grid);
/// assert_eq!(rotated.cells, ["b", "d", "a", "c"]);
/// ```
pub fn sweep_rotate(mut grid: Grid) -> Grid {
    let min_dim = grid.width.min(grid.height);

    for size in 2..=min_dim {
        for top in 0..=grid.height - size {
            for left in 0..=grid.width - size {
                if is_isolated_block(&grid, top, left, size) {
                    rotate_block_ccw(&mut grid, top, left, size);
                }
            }
        }
    }

    grid
}

/// Check whether the `size x size` block anchored at `(top, left)` is fully
/// populated and bounded by blank cells or the grid border on all four sides.
///
/// Diagonal neighbours are not inspected.
///
/// # Panics
///
/// Panics if the block does not fit inside the grid.
pub fn is_isolated_block(grid: &Grid, top: usize, left: usize, size: usize) -> bool {
    let bottom = top + size;
    let right = left + size;
    assert!(
        bottom <= grid.height && right <= grid.width,
        "block {size}x{size} at ({top}, {left}) outside {}x{} grid",
        grid.width,
        grid.height
    );

    let populated = (top..bottom).all(|r| (left..right).all(|c| !grid.is_blank(r, c)));
    if !populated {
        return false;
    }

    // Each side is checked only when it is not the grid edge
    let top_clear = top == 0 || (left..right).all(|c| grid.is_blank(top - 1, c));
    let bottom_clear = bottom == grid.height || (left..right).all(|c| grid.is_blank(bottom, c));
    let left_clear = left == 0 || (top..bottom).all(|r| grid.is_blank(r, left - 1));
    let right_clear = right == grid.width || (top..bottom).all(|r| grid.is_blank(r, right));

    top_clear && bottom_clear && left_clear && right_clear
}

/// Rotate the `size x size` block anchored at `(top, left)` 90 degrees
/// counter-clockwise in place.
///
/// The center cell of an odd-sized block does not move.
///
/// # Panics
///
/// Panics if the block does not fit inside the grid.
pub fn rotate_block_ccw(grid: &mut Grid, top: usize, left: usize, size: usize) {
    assert!(
        top + size <= grid.height && left + size <= grid.width,
        "block {size}x{size} at ({top}, {left}) outside {}x{} grid",
        grid.width,
        grid.height
    );

    for layer in 0..size / 2 {
        let first = layer;
        let last = size - 1 - layer;

        for k in first..last {
            let offset = k - first;

            let t = grid.index(top + first, left + k);
            let r = grid.index(top + k, left + last);
            let b = grid.index(top + last, left + last - offset);
            let l = grid.index(top + last - offset, left + first);

            let saved = mem::take(&mut grid.cells[t]);
            grid.cells[t] = mem::take(&mut grid.cells[r]);
            grid.cells[r] = mem::take(&mut grid.cells[b]);
            grid.cells[b] = mem::take(&mut grid.cells[l]);
            grid.cells[l] = saved;
        }
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
