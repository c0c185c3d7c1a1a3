//! gridshift core - grid transformation library
//!
//! This crate provides the structural grid transforms behind gridshift:
//! periodic blank column and row insertion, and counter-clockwise rotation of
//! isolated square blocks. It also carries the CSV codec used to load and
//! store grids. Nothing here touches the filesystem or the network.
//!
//! # Pipeline Order
//!
//! 1. Column insertion
//! 2. Row insertion
//! 3. Block rotation (sweep or fixed 3x3)

pub mod decode;
pub mod encode;
pub mod grid;
pub mod insert;
pub mod pipeline;
pub mod transform;

pub use decode::{parse_grid, read_grid, DecodeError};
pub use encode::{encode_grid, write_grid, EncodeError};
pub use grid::{Grid, GridError};
pub use insert::{insert_columns, insert_rows};
pub use pipeline::{Pipeline, RotationPolicy};
pub use transform::{center_rotate_3x3, rotate_block_ccw, sweep_rotate};
