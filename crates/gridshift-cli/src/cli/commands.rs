//! Subcommands and their arguments.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};
use gridshift_core::RotationPolicy;

use crate::server::ServerConfig;

/// The top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Transform one CSV file
    Process(ProcessArgs),

    /// Serve the upload form over HTTP
    Serve(ServeArgs),
}

/// Arguments for the `process` command.
///
/// Periods are taken as raw text so that bad values are reported through
/// the same validation as the HTTP form.
#[derive(Args, Debug)]
pub struct ProcessArgs {
    /// CSV file to read
    pub input: PathBuf,

    /// Insert a blank row after every N_ROW rows
    #[arg(allow_negative_numbers = true)]
    pub n_row: String,

    /// Insert a blank column after every N_COL columns
    #[arg(allow_negative_numbers = true)]
    pub n_col: String,

    /// CSV file to write
    pub output: PathBuf,

    /// Block rotation applied after insertion
    #[arg(long, value_enum, default_value_t = RotationArg::Sweep)]
    pub rotation: RotationArg,
}

/// Arguments for the `serve` command.
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:8080")]
    pub addr: SocketAddr,

    /// Directory where processed files are stored for download
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Largest accepted upload, in bytes
    #[arg(long, default_value_t = 10 * 1024 * 1024)]
    pub max_upload_bytes: usize,
}

/// Rotation policy as spelled on the command line.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RotationArg {
    /// Rotate every isolated square block of size 2 and up
    Sweep,
    /// Rotate the 3x3 neighbourhood of every fully surrounded cell
    #[value(name = "center3x3")]
    Center3x3,
}

impl From<RotationArg> for RotationPolicy {
    fn from(arg: RotationArg) -> Self {
        match arg {
            RotationArg::Sweep => RotationPolicy::Sweep,
            RotationArg::Center3x3 => RotationPolicy::Center3x3,
        }
    }
}

/// The server never sees clap types.
impl From<ServeArgs> for ServerConfig {
    fn from(a: ServeArgs) -> Self {
        ServerConfig {
            addr: a.addr,
            output_dir: a.output_dir,
            max_upload_bytes: a.max_upload_bytes,
        }
    }
}
