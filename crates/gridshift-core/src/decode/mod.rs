//! Grid decoding from CSV text.
//!
//! Input is read fully into memory before a [`Grid`](crate::Grid) is
//! returned. Records are headerless and must all have the same number of
//! fields.
//!
//! # Examples
//!
//! ```ignore
//! use gridshift_core::decode::read_grid;
//!
//! let file = std::fs::File::open("table.csv").unwrap();
//! let grid = read_grid(file).unwrap();
//! println!("Loaded {}x{} grid", grid.width, grid.height);
//! ```

mod csv;

pub use self::csv::{parse_grid, read_grid, DecodeError};
