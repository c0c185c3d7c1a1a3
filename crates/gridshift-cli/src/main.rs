use anyhow::Result;
use clap::Parser;
use gridshift_cli::Cli;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("gridshift_cli=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    Cli::parse().run()
}
