//! CSV writer built on the `csv` crate.

use std::io::Write;

use csv::{Terminator, WriterBuilder};
use thiserror::Error;

use crate::grid::Grid;

/// Errors that can occur during CSV encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Writing a record or flushing the output failed
    #[error("CSV write failed: {0}")]
    WriteFailed(String),
}

impl From<csv::Error> for EncodeError {
    fn from(err: csv::Error) -> Self {
        EncodeError::WriteFailed(err.to_string())
    }
}

/// Write a grid as CSV, one record per row.
///
/// Fields are quoted only when they contain a delimiter, quote or line
/// break. Records end with `\n`.
pub fn write_grid<W: Write>(grid: &Grid, writer: W) -> Result<(), EncodeError> {
    let mut csv_writer = WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);

    for row in grid.rows() {
        csv_writer.write_record(row)?;
    }

    csv_writer
        .flush()
        .map_err(|e| EncodeError::WriteFailed(e.to_string()))
}

/// Encode a grid to CSV bytes in memory.
pub fn encode_grid(grid: &Grid) -> Result<Vec<u8>, EncodeError> {
    let mut buffer = Vec::new();
    write_grid(grid, &mut buffer)?;
    Ok(buffer)
}
