//! CSV reader built on the `csv` crate.

use std::io::Read;

use csv::{ErrorKind, ReaderBuilder};
use thiserror::Error;

use crate::grid::Grid;

/// Errors that can occur while decoding CSV input.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// A record has a different number of fields than the first record.
    /// `record` is 0-indexed, like [`GridError::Ragged`](crate::GridError::Ragged).
    #[error("Ragged CSV: record {record} has {actual} fields, expected {expected}")]
    Ragged {
        record: u64,
        expected: u64,
        actual: u64,
    },

    /// The input is not valid CSV or not valid UTF-8.
    #[error("Malformed CSV: {0}")]
    Malformed(String),

    /// Reading from the underlying source failed.
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<csv::Error> for DecodeError {
    fn from(err: csv::Error) -> Self {
        let message = err.to_string();
        match err.into_kind() {
            ErrorKind::UnequalLengths {
                pos,
                expected_len,
                len,
            } => DecodeError::Ragged {
                record: pos.map(|p| p.record()).unwrap_or_default(),
                expected: expected_len,
                actual: len,
            },
            ErrorKind::Io(io) => DecodeError::Io(io.to_string()),
            _ => DecodeError::Malformed(message),
        }
    }
}

/// Read a whole CSV document into a grid.
///
/// Records are comma separated, double-quote escaped and have no header
/// row. Every record must have as many fields as the first one. Empty input
/// produces an empty grid.
///
/// # Errors
///
/// Returns an error if:
/// - A record has a different field count ([`DecodeError::Ragged`])
/// - A field is not valid UTF-8 ([`DecodeError::Malformed`])
/// - The reader fails ([`DecodeError::Io`])
pub fn read_grid<R: Read>(reader: R) -> Result<Grid, DecodeError> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(false)
        .from_reader(reader);

    let mut width = 0;
    let mut height = 0;
    let mut cells = Vec::new();

    for record in csv_reader.records() {
        let record = record?;
        width = record.len();
        height += 1;
        cells.extend(record.iter().map(str::to_owned));
    }

    Ok(Grid::new(width, height, cells))
}

/// Decode a CSV document held in memory.
pub fn parse_grid(bytes: &[u8]) -> Result<Grid, DecodeError> {
    read_grid(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        let grid = parse_grid(b"a,b,c\nd,e,f\n").unwrap();

        assert_eq!(grid.dimensions(), (3, 2));
        assert_eq!(grid.cells, ["a", "b", "c", "d", "e", "f"]);
    }

    #[test]
    fn test_first_row_is_data() {
        let grid = parse_grid(b"name,age\nbob,30").unwrap();
        assert_eq!(grid.get(0, 0), Some("name"));
        assert_eq!(grid.height, 2);
    }

    #[test]
    fn test_parse_blank_cells() {
        let grid = parse_grid(b"a,,c\n,,\n").unwrap();

        assert_eq!(grid.dimensions(), (3, 2));
        assert!(grid.is_blank(0, 1));
        assert!((0..3).all(|col| grid.is_blank(1, col)));
    }

    #[test]
    fn test_parse_quoted_fields() {
        let grid = parse_grid(b"\"a,b\",\"say \"\"hi\"\"\"\n\"multi\nline\",x\n").unwrap();

        assert_eq!(grid.get(0, 0), Some("a,b"));
        assert_eq!(grid.get(0, 1), Some("say \"hi\""));
        assert_eq!(grid.get(1, 0), Some("multi\nline"));
    }

    #[test]
    fn test_whitespace_preserved() {
        let grid = parse_grid(b" a , \n").unwrap();
        assert_eq!(grid.cells, [" a ", " "]);
    }

    #[test]
    fn test_crlf_line_endings() {
        let grid = parse_grid(b"a,b\r\nc,d\r\n").unwrap();
        assert_eq!(grid.cells, ["a", "b", "c", "d"]);
    }

    #[test]
    fn test_empty_input() {
        let grid = parse_grid(b"").unwrap();
        assert!(grid.is_empty());
    }

    #[test]
    fn test_ragged_rejected() {
        let err = parse_grid(b"a,b\nc\n").unwrap_err();

        assert!(
            matches!(
                err,
                DecodeError::Ragged {
                    record: 1,
                    expected: 2,
                    actual: 1,
                }
            ),
            "unexpected error: {err:?}"
        );
    }

    #[test]
    fn test_invalid_utf8_rejected() {
        let err = parse_grid(b"a,\xff\xfe\n").unwrap_err();
        assert!(matches!(err, DecodeError::Malformed(_)));
    }

    #[test]
    fn test_decode_error_display() {
        let err = DecodeError::Ragged {
            record: 3,
            expected: 4,
            actual: 2,
        };
        assert_eq!(err.to_string(), "Ragged CSV: record 3 has 2 fields, expected 4");
    }
}
