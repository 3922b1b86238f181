//! pwbox - a local password box sealed with one master password.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use pwbox::cli::output;
use pwbox::cli::{execute, Cli};
use pwbox::core::constants::ENV_LOG;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(ENV_LOG).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("pwbox=debug")
        } else {
            EnvFilter::new("pwbox=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .init();

    if let Err(e) = execute(cli.command, cli.store) {
        output::error(&e.to_string());
        if let Some(hint) = e.hint() {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
