use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::writer::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "make-migration-json")]
#[command(version, about = "Turn a JSON schema description into migration definitions")]
pub struct Cli {
    /// Show debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate and flatten a JSON schema file into migration definitions
    Make {
        /// JSON schema file
        file: PathBuf,

        /// Only process these tables (comma-separated)
        #[arg(long, value_delimiter = ',')]
        only: Option<Vec<String>>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Write definitions to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Skip column validation
        #[arg(long)]
        no_validate: bool,
    },

    /// Validate a JSON schema file without producing definitions
    Validate {
        /// JSON schema file
        file: PathBuf,
    },

    /// List all supported column types and modifiers
    ListTypes,
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
