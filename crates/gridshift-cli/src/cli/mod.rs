//! Command line interface.
//!
//! Two commands are supported:
//! 1. `process` - transform one CSV file into another
//! 2. `serve` - run the HTTP upload form

pub mod commands;

use anyhow::{Context, Result};
use clap::Parser;
use commands::{Commands, ProcessArgs, ServeArgs};
use gridshift_core::Pipeline;

use crate::batch::BatchJob;
use crate::params::parse_period;
use crate::server;

#[derive(Parser, Debug)]
#[command(
    name = "gridshift",
    version,
    about = "Insert blank rows and columns into a CSV table and rotate isolated blocks."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Dispatch to the selected command.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Process(args) => run_process(args),
            Commands::Serve(args) => run_serve(args),
        }
    }
}

fn run_process(args: ProcessArgs) -> Result<()> {
    let pipeline = Pipeline::new(
        parse_period("n_row", &args.n_row)?,
        parse_period("n_col", &args.n_col)?,
    )
    .with_rotation(args.rotation.into());

    let job = BatchJob {
        input: args.input,
        output: args.output,
        pipeline,
    };
    job.run()
        .with_context(|| format!("Processing {} failed", job.input.display()))?;

    println!("Processed CSV written to {}", job.output.display());
    Ok(())
}

fn run_serve(args: ServeArgs) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new().context("Cannot start async runtime")?;
    runtime.block_on(server::serve(args.into()))
}
