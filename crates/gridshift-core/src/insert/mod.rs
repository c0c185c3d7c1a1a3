//! Periodic insertion of blank columns and rows.
//!
//! Both inserters count *original* cells or rows only, so inserted blanks
//! never shift the period. They differ at the trailing edge:
//!
//! - Columns: no blank is added after the last cell of a row.
//! - Rows: a blank row is added after the last row whenever it lands on a
//!   period boundary.
//!
//! A period of zero leaves the grid unchanged.

mod columns;
mod rows;

pub use columns::{insert_columns, inserted_width};
pub use rows::{insert_rows, inserted_height};
