// qualis/src/main.rs

mod cli;
mod commands;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    // 1. Setup Logging (Tracing), on stderr so stdout stays parseable.
    // RUST_LOG=debug qualis validate ... to see every rule evaluation
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate {
            config,
            input,
            format,
            output,
        } => commands::validate::execute(config, input, format, output),
        Commands::Rules { config } => commands::rules::execute(config),
    }
}
