use anyhow::Result;
use bigo::cli::{Cli, Commands};
use bigo::commands::{self, AnalyzeConfig};
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbosity);

    match cli.command {
        Commands::Analyze {
            paths,
            format,
            output,
            seed,
            no_jitter,
            skip_validation,
            config,
        } => commands::handle_analyze(AnalyzeConfig {
            paths,
            format,
            output,
            seed,
            no_jitter,
            skip_validation,
            config,
        }),
        Commands::Features { path, format } => commands::show_features(&path, format),
        Commands::Init { force } => commands::init_config(force),
    }
}

/// RUST_LOG wins; otherwise -v selects debug and -vv trace.
fn init_tracing(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "bigo=debug",
        _ => "bigo=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
