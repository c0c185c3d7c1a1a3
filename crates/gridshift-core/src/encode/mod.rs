//! Grid encoding to CSV text.
//!
//! # Examples
//!
//! ```ignore
//! use gridshift_core::encode::encode_grid;
//!
//! let bytes = encode_grid(&grid).unwrap();
//! std::fs::write("out.csv", bytes).unwrap();
//! ```

mod csv;

pub use self::csv::{encode_grid, write_grid, EncodeError};
