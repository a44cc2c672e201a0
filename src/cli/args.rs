use crate::config::ProviderKind;
use crate::formatting::ColorMode;
use crate::output::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "covgap")]
#[command(about = "Functional coverage gap analyzer", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (can be repeated: -v, -vv)
    /// -v: Log each analyzed bin
    /// -vv: Show parser and config debug information
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    /// Suppress progress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// When to color terminal output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorMode,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse a coverage report and print it as JSON
    Parse {
        /// Coverage report to parse
        report: PathBuf,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Parse, gather suggestions, prioritize and estimate closure
    Analyze {
        /// Coverage report to analyze
        report: PathBuf,

        /// Suggestion provider (overrides config)
        #[arg(long, value_enum)]
        provider: Option<ProviderKind>,

        /// Provider calls in flight at once (overrides config)
        #[arg(long, short = 'j')]
        workers: Option<usize>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Config file (defaults to .covgap.toml discovery)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
