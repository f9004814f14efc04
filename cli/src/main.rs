//! Nomenclator CLI entrypoint.
//!
//! This binary validates the assets of a manifest against the configured
//! naming convention and exits with `0` when every asset passes, `2` when any
//! asset violates the convention and `1` when the check could not run.

use clap::Parser;
use nomenclator_cli::cli::Cli;
use nomenclator_cli::run::{EXIT_SUCCESS, exit_code_for, run};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbosity, cli.quiet);

    let mut stdout = std::io::stdout().lock();
    let mut stderr = std::io::stderr();
    let run_result = run(&cli, &mut stdout);
    let exit_code = exit_code_for(run_result, &mut stderr);
    if exit_code != EXIT_SUCCESS {
        std::process::exit(exit_code);
    }
}

/// Installs a stderr subscriber; `log` records from the library crates are
/// forwarded to it. `RUST_LOG` overrides the level chosen by the flags.
fn init_logging(verbosity: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .try_init()
        .is_err()
    {
        // A subscriber is already installed; keep it.
    }
}
