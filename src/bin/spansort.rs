// src/bin/spansort.rs

use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use spansort::cli::Cli;
use spansort::commands::sort::{sort_files, SortOptions};

fn main() -> ExitCode {
    // Initialize tracing if SPANSORT_LOG is set
    if let Ok(filter) = EnvFilter::try_from_env("SPANSORT_LOG") {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_level(true)
            .with_writer(std::io::stderr)
            .init();
        tracing::debug!("tracing initialized");
    }

    let cli = Cli::parse();
    let config = cli.sort_config();

    sort_files(
        &cli.paths,
        SortOptions {
            check: cli.check,
            stdout: cli.stdout,
            config,
        },
    )
}
