//! The full grid transform: column insertion, row insertion, rotation.

use serde::{Deserialize, Serialize};

use crate::grid::Grid;
use crate::insert::{insert_columns, insert_rows};
use crate::transform::{center_rotate_3x3, sweep_rotate};

/// Which block rotation runs as the last pipeline stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RotationPolicy {
    /// Size-sweeping rotation of isolated square blocks, in place.
    #[default]
    Sweep,
    /// Fixed 3x3 rotation around fully surrounded cells, copy based.
    Center3x3,
}

/// Settings for one batch transform.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pipeline {
    /// Insert a blank row after every `row_period` rows (0 disables)
    pub row_period: usize,
    /// Insert a blank column after every `col_period` columns (0 disables)
    pub col_period: usize,
    /// Rotation applied after both insertions
    #[serde(default)]
    pub rotation: RotationPolicy,
}

impl Pipeline {
    /// Create a pipeline with the default sweep rotation.
    pub fn new(row_period: usize, col_period: usize) -> Self {
        Self {
            row_period,
            col_period,
            rotation: RotationPolicy::default(),
        }
    }

    /// Select the rotation stage.
    pub fn with_rotation(mut self, rotation: RotationPolicy) -> Self {
        self.rotation = rotation;
        self
    }

    /// Run columns, then rows, then rotation over `grid`.
    pub fn apply(&self, grid: Grid) -> Grid {
        let grid = insert_columns(grid, self.col_period);
        let grid = insert_rows(grid, self.row_period);
        match self.rotation {
            RotationPolicy::Sweep => sweep_rotate(grid),
            RotationPolicy::Center3x3 => center_rotate_3x3(&grid),
        }
    }
}
