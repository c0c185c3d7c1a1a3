//! Blank column insertion.

use crate::grid::Grid;

/// Compute the row width after [`insert_columns`] with the given period.
///
/// # Example
///
/// ```
/// use gridshift_core::insert::inserted_width;
///
/// // Blanks after cells 2 and 4, none after the trailing cell 5
/// assert_eq!(inserted_width(5, 2), 7);
/// assert_eq!(inserted_width(4, 2), 5);
/// ```
pub fn inserted_width(width: usize, period: usize) -> usize {
    if period == 0 || width == 0 {
        return width;
    }
    width + (width - 1) / period
}

/// Insert a blank cell after every `period` original cells of each row.
///
/// No blank is appended after the last original cell, so a row never ends
/// with an inserted column. A period of zero returns the grid unchanged.
///
/// # Arguments
///
/// * `grid` - Source grid
/// * `period` - Number of original cells between inserted blanks
///
/// # Returns
///
/// A new `Grid` with the same height and width `inserted_width(width, period)`.
pub fn insert_columns(grid: Grid, period: usize) -> Grid {
    if period == 0 || grid.width == 0 {
        return grid;
    }

    let width = grid.width;
    let new_width = inserted_width(width, period);
    let mut cells = Vec::with_capacity(new_width * grid.height);

    for (idx, cell) in grid.cells.into_iter().enumerate() {
        let col = idx % width;
        cells.push(cell);
        if (col + 1) % period == 0 && col != width - 1 {
            cells.push(String::new());
        }
    }

    Grid::new(new_width, grid.height, cells)
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for generating a rectangular grid of non-empty cells.
    fn grid_strategy() -> impl Strategy<Value = Grid> {
        (1usize..=12, 1usize..=6).prop_flat_map(|(width, height)| {
            prop::collection::vec("[a-z]{1,3}", width * height)
                .prop_map(move |cells| Grid::new(width, height, cells))
        })
    }

    proptest! {
        /// Property: Output width follows w + (w - 1) / n.
        #[test]
        fn prop_width_formula(grid in grid_strategy(), period in 1usize..=6) {
            let (width, height) = grid.dimensions();
            let result = insert_columns(grid, period);

            prop_assert_eq!(result.width, width + (width - 1) / period);
            prop_assert_eq!(result.height, height);
            prop_assert_eq!(result.cells.len(), result.width * result.height);
        }

        /// Property: Removing blanks gives back the original cells in order.
        #[test]
        fn prop_original_cells_preserved(grid in grid_strategy(), period in 1usize..=6) {
            let original = grid.cells.clone();
            let result = insert_columns(grid, period);

            let kept: Vec<String> = result.cells.into_iter().filter(|c| !c.is_empty()).collect();
            prop_assert_eq!(kept, original);
        }

        /// Property: The last column is never an inserted blank.
        #[test]
        fn prop_no_trailing_blank(grid in grid_strategy(), period in 1usize..=6) {
            let result = insert_columns(grid, period);

            for row in result.rows() {
                prop_assert!(!row[row.len() - 1].is_empty());
            }
        }
    }
}
