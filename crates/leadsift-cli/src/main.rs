//! LeadSift CLI - lead validation and scoring.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = commands::load_engine(cli.config.as_deref()).and_then(|engine| {
        match cli.command {
            Commands::Score { file, top, filters } => {
                commands::score::run(&engine, file, top, filters.to_filters(), cli.verbose)
            }

            Commands::Export {
                file,
                output,
                format,
                filters,
            } => commands::export::run(&engine, file, output, format, filters.to_filters()),

            Commands::Check { email, phone, json } => {
                commands::check::run(&engine, email, phone, json)
            }

            Commands::Insights { file, json } => commands::insights::run(&engine, file, json),
        }
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr. `RUST_LOG` overrides the level chosen by `--verbose`.
fn init_logging(verbose: bool) {
    let default = if verbose { "leadsift=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
