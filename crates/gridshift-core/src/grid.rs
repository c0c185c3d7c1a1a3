//! The rectangular cell grid shared by every transform.

use thiserror::Error;

/// Errors raised while building a grid from row data.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    /// A row has a different number of cells than the first row.
    /// `row` is 0-indexed.
    #[error("Ragged grid: row {row} has {actual} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        actual: usize,
    },
}

/// A rectangular table of text cells.
///
/// The empty string marks a blank cell. Whitespace is a value like any other.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    /// Number of cells per row.
    pub width: usize,
    /// Number of rows.
    pub height: usize,
    /// Cell values in row-major order.
    /// Length should be width * height.
    pub cells: Vec<String>,
}

impl Grid {
    /// Create a new Grid with the given dimensions and cell data.
    pub fn new(width: usize, height: usize, cells: Vec<String>) -> Self {
        debug_assert_eq!(cells.len(), width * height, "Cell buffer size mismatch");
        Self {
            width,
            height,
            cells,
        }
    }

    /// Create a grid where every cell is blank.
    pub fn blank(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![String::new(); width * height],
        }
    }

    /// Build a grid from a list of rows, rejecting rows of unequal length.
    pub fn from_rows<R, S>(rows: impl IntoIterator<Item = R>) -> Result<Self, GridError>
    where
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut cells = Vec::new();
        let mut width = None;
        let mut height = 0;

        for (row, record) in rows.into_iter().enumerate() {
            let before = cells.len();
            cells.extend(record.into_iter().map(Into::into));
            let actual = cells.len() - before;

            match width {
                None => width = Some(actual),
                Some(expected) if expected != actual => {
                    return Err(GridError::Ragged {
                        row,
                        expected,
                        actual,
                    });
                }
                Some(_) => {}
            }
            height += 1;
        }

        Ok(Self {
            width: width.unwrap_or(0),
            height,
            cells,
        })
    }

    /// Split the grid back into owned rows.
    pub fn into_rows(self) -> Vec<Vec<String>> {
        if self.width == 0 {
            return vec![Vec::new(); self.height];
        }
        let width = self.width;
        let mut rows = Vec::with_capacity(self.height);
        let mut cells = self.cells.into_iter();
        for _ in 0..self.height {
            rows.push(cells.by_ref().take(width).collect());
        }
        rows
    }

    /// Iterate over the rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[String]> {
        let width = self.width;
        (0..self.height).map(move |row| &self.cells[row * width..(row + 1) * width])
    }

    /// Get `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Check if the grid has no cells at all.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    #[inline]
    pub(crate) fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    /// Get the value at `(row, col)`, or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<&str> {
        if row < self.height && col < self.width {
            Some(&self.cells[self.index(row, col)])
        } else {
            None
        }
    }

    /// Overwrite the value at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the grid.
    pub fn set(&mut self, row: usize, col: usize, value: impl Into<String>) {
        assert!(
            row < self.height && col < self.width,
            "cell ({row}, {col}) outside {}x{} grid",
            self.width,
            self.height
        );
        let idx = self.index(row, col);
        self.cells[idx] = value.into();
    }

    /// Check whether the cell at `(row, col)` is blank.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the grid.
    #[inline]
    pub fn is_blank(&self, row: usize, col: usize) -> bool {
        assert!(
            row < self.height && col < self.width,
            "cell ({row}, {col}) outside {}x{} grid",
            self.width,
            self.height
        );
        self.cells[self.index(row, col)].is_empty()
    }
}
