// qualis/src/cli.rs
//
// Single source of truth for all CLI definitions (Clap structs).

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "qualis")]
#[command(about = "Rule-based record validation and quality scoring", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// ✅ Validates records against a rule configuration
    Validate {
        /// Rule configuration (.yaml, .yml or .json)
        #[arg(long, short)]
        config: PathBuf,

        /// JSON file holding one record or an array of records
        #[arg(long, short)]
        input: PathBuf,

        /// Output format on stdout
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Also write the JSON report to this file
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// 📋 Lists the normalized rules in evaluation order
    Rules {
        /// Rule configuration (.yaml, .yml or .json)
        #[arg(long, short)]
        config: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
