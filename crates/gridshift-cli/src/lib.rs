//! gridshift front end - batch command and HTTP upload form
//!
//! This crate wraps `gridshift-core` with everything that touches the outside
//! world: argument parsing, file handling, the HTTP server and error
//! classification.
//!
//! # Module Structure
//!
//! - `cli` - clap commands and dispatch
//! - `batch` - load, transform and atomically store one CSV file
//! - `params` - validation shared by the command line and the form
//! - `server` - axum routes for upload and download

pub mod batch;
pub mod cli;
pub mod params;
pub mod server;

pub use batch::{BatchError, BatchJob};
pub use cli::Cli;
pub use server::{router, serve, ServerConfig};
