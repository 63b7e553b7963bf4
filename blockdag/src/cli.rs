use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "blockdag")]
#[command(about = "BlockDAG validity checker and causal set calculator", long_about = None)]
pub struct Args {
    /// Path to configuration file (optional, uses defaults if not provided)
    #[arg(short, long = "config", global = true)]
    pub config_path: Option<PathBuf>,

    /// Input graph file ("-" for stdin)
    #[arg(short, long, global = true)]
    pub input: Option<PathBuf>,

    /// Output file ("-" for stdout)
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum)]
    pub format: Option<FormatArg>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Check that the graph is a valid DAG
    #[command(alias = "c1")]
    Check,

    /// Compute past, future and anticone of a block, plus the graph tips
    #[command(alias = "c2")]
    Sets {
        /// Block name to query
        vertex: String,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatArg {
    Text,
    Json,
}

pub fn parse_args() -> Args {
    Args::parse()
}
