//! Block rotation operations.
//!
//! Two policies are provided and they are deliberately kept apart:
//!
//! - [`sweep_rotate`]: finds every isolated, fully populated square block of
//!   size 2 and up and rotates it in place. Isolation looks at the four
//!   straight sides only. Later blocks see earlier rotations.
//! - [`center_rotate_3x3`]: rotates the 3x3 neighbourhood of every cell whose
//!   8 neighbours are all populated. Reads come from the untouched input and
//!   writes go to a fresh grid.
//!
//! # Coordinate System
//!
//! - `(row, col)` with origin at the top-left cell
//! - Rotations are 90 degrees counter-clockwise: the right column of a block
//!   becomes its top row

mod center;
mod rotation;

pub use center::center_rotate_3x3;
pub use rotation::{is_isolated_block, rotate_block_ccw, sweep_rotate};
