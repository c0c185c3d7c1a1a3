//! Blank row insertion.

use crate::grid::Grid;

/// Compute the grid height after [`insert_rows`] with the given period.
pub fn inserted_height(height: usize, period: usize) -> usize {
    if period == 0 {
        return height;
    }
    height + height / period
}

/// Insert a blank row after every `period` original rows.
///
/// Unlike [`insert_columns`](super::insert_columns), a blank row is still
/// appended after the final row when the row count is a multiple of
/// `period`. A period of zero returns the grid unchanged.
pub fn insert_rows(grid: Grid, period: usize) -> Grid {
    if period == 0 {
        return grid;
    }

    let width = grid.width;
    let new_height = inserted_height(grid.height, period);
    let mut cells = Vec::with_capacity(width * new_height);

    for (row, chunk) in grid.into_rows().into_iter().enumerate() {
        cells.extend(chunk);
        if (row + 1) % period == 0 {
            cells.extend(std::iter::repeat_with(String::new).take(width));
        }
    }

    Grid::new(width, new_height, cells)
}


// ============================================================================
// Property-Based Tests
// ============================================================================
