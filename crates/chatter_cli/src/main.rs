//! CLI entry point for chatter.

mod cli;
mod commands;
mod output;

use chatter_observability::{ObservabilityConfig, ObservabilityError};
use clap::Parser;

use crate::cli::Cli;

fn init_logging(verbose: bool) {
    let mut config = ObservabilityConfig::from_env().with_ansi(console::colors_enabled_stderr());
    if verbose {
        config = config.with_log_level("debug");
    }
    match chatter_observability::init(config) {
        Ok(()) | Err(ObservabilityError::AlreadyInitialised) => {}
        Err(e) => output::warning(&e.to_string()),
    }
}

fn main() {
    let cli = Cli::parse();
    output::init(cli.output);
    init_logging(cli.verbose);

    if let Err(e) = commands::handle(cli) {
        output::error(&format!("{e:#}"));
        std::process::exit(1);
    }
}
