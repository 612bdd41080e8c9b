//! gfxpack CLI - Updater for Cemu community graphic packs.

mod cli;
mod commands;
mod error;
mod output;
mod progress;
mod prompt;

use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = cli::Cli::parse();

    init_tracing(cli.verbose);

    let formatter = output::create_formatter(cli.json, cli.verbose, cli.quiet);
    formatter.format_banner();

    // Failures are reported, not propagated: the run always ends at the prompt
    if let Err(err) = commands::update::execute(&cli, &*formatter) {
        formatter.format_error(&err);
    }

    // Exit code stays 0 even if the prompt cannot be read
    prompt::finish(cli.no_wait || cli.json);
}

/// Diagnostics go to stderr; `RUST_LOG` overrides the level.
fn init_tracing(verbose: bool) {
    let default = if verbose { "warn,gfxpack_core=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}
