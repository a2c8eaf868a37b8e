use crate::io::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "bigo")]
#[command(about = "Heuristic time-complexity estimator for JavaScript snippets", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase verbosity level (can be repeated: -v, -vv)
    ///
    /// -v shows rule selection, -vv adds per-feature extraction traces.
    /// RUST_LOG takes precedence when set.
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Estimate the time complexity of snippet files or standard input
    Analyze {
        /// Files or directories to analyze; `-` reads standard input
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Output format (defaults to the config file, then terminal)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Seed confidence jitter for reproducible output (ignored with --no-jitter)
        #[arg(long, env = "BIGO_SEED")]
        seed: Option<u64>,

        /// Report base confidences without jitter
        #[arg(long = "no-jitter")]
        no_jitter: bool,

        /// Analyze input even when it does not look like JavaScript
        #[arg(long = "skip-validation")]
        skip_validation: bool,

        /// Configuration file (defaults to the nearest .bigo.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Print the raw feature vector of a snippet
    Features {
        /// Snippet file; `-` reads standard input
        path: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,
    },

    /// Write a default .bigo.toml in the current directory
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
}
