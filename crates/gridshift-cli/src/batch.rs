//! One-shot batch transform: load CSV, run the pipeline, store CSV.
//!
//! The core library never touches the filesystem; this module owns the
//! file handling around it and classifies every failure into
//! [`BatchError`].

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use gridshift_core::{encode_grid, parse_grid, DecodeError, Grid, Pipeline};
use thiserror::Error;

/// Errors that terminate a batch run.
#[derive(Debug, Error)]
pub enum BatchError {
    /// The input file is missing or could not be read.
    #[error("Cannot read input file {}: {source}", path.display())]
    InputNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The input is not a rectangular CSV table.
    #[error("Input is not valid CSV: {0}")]
    InputUnparseable(#[from] DecodeError),

    /// A period, policy or output name was rejected.
    #[error("Invalid parameter {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    /// The output could not be encoded or written.
    #[error("Failed to write output {}: {reason}", path.display())]
    OutputWriteFailure { path: PathBuf, reason: String },
}

/// A single input-to-output transform.
#[derive(Debug, Clone)]
pub struct BatchJob {
    /// CSV file to read
    pub input: PathBuf,
    /// CSV file to create or replace
    pub output: PathBuf,
    /// Transform settings
    pub pipeline: Pipeline,
}

impl BatchJob {
    /// Run the job end to end and return the output grid dimensions.
    pub fn run(&self) -> Result<(usize, usize), BatchError> {
        tracing::info!(
            "Processing {} (row period {}, column period {}, {:?} rotation)",
            self.input.display(),
            self.pipeline.row_period,
            self.pipeline.col_period,
            self.pipeline.rotation
        );

        let grid = load_grid(&self.input)?;
        let grid = transform(grid, &self.pipeline);
        store_grid(&grid, &self.output)?;

        tracing::info!(
            "Wrote {}x{} grid to {}",
            grid.width,
            grid.height,
            self.output.display()
        );
        Ok(grid.dimensions())
    }
}

/// Read and decode a CSV file.
pub fn load_grid(path: &Path) -> Result<Grid, BatchError> {
    let bytes = fs::read(path).map_err(|source| BatchError::InputNotFound {
        path: path.to_path_buf(),
        source,
    })?;
    let grid = parse_grid(&bytes)?;
    tracing::debug!("Loaded {}x{} grid", grid.width, grid.height);
    Ok(grid)
}

/// Run the pipeline, logging dimensions.
pub fn transform(grid: Grid, pipeline: &Pipeline) -> Grid {
    let (width, height) = grid.dimensions();
    let result = pipeline.apply(grid);
    tracing::debug!(
        "Transformed {}x{} -> {}x{}",
        width,
        height,
        result.width,
        result.height
    );
    result
}

/// Encode a grid and write it atomically to `path`.
pub fn store_grid(grid: &Grid, path: &Path) -> Result<(), BatchError> {
    let failure = |reason: String| BatchError::OutputWriteFailure {
        path: path.to_path_buf(),
        reason,
    };

    let bytes = encode_grid(grid).map_err(|e| failure(e.to_string()))?;
    write_atomic(path, &bytes).map_err(|e| failure(e.to_string()))
}

/// Sequence number making temporary names unique within the process.
static TMP_SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Write `bytes` to a sibling temporary file, then rename it over `path`.
///
/// Readers of `path` see either the old contents or the complete new ones.
/// Concurrent writers to the same `path` each use their own temporary file;
/// the last rename wins.
fn write_atomic(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let file_name = path
        .file_name()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "output path has no file name"))?;

    let sequence = TMP_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    let mut tmp_name = std::ffi::OsString::from(".");
    tmp_name.push(file_name);
    tmp_name.push(format!(".{}.{sequence}.tmp", std::process::id()));
    let tmp_path = path.with_file_name(tmp_name);

    let result = fs::write(&tmp_path, bytes).and_then(|()| fs::rename(&tmp_path, path));
    if result.is_err() {
        let _ = fs::remove_file(&tmp_path);
    }
    result
}
