//! Password Generator CLI
//!
//! Prints one password per line on stdout. Diagnostics and logs go to
//! stderr.

use clap::Parser;
use passgen::cli::{self, normalize_args, Args, RunConfig};
use std::io::{self, BufWriter};
use std::process::ExitCode;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

/// Exit status for errors surfaced by the generator or configuration.
const EXIT_FAILURE: u8 = 1;
/// Exit status for internal misuse of the entropy interface.
const EXIT_BUG: u8 = 2;
/// Exit status after Ctrl-C.
const EXIT_INTERRUPTED: i32 = 130;

fn main() -> ExitCode {
    let args = match Args::try_parse_from(normalize_args(std::env::args_os())) {
        Ok(args) => args,
        Err(e) => e.exit(),
    };

    init_logging(args.verbose);
    debug!("passgen v{}", passgen::VERSION);

    // Reads from the OS device may block; let Ctrl-C end the process.
    if let Err(e) = ctrlc::set_handler(|| {
        eprintln!("passgen: interrupted");
        std::process::exit(EXIT_INTERRUPTED);
    }) {
        warn!("Failed to install Ctrl-C handler: {}", e);
    }

    let config = match RunConfig::resolve(&args) {
        Ok(config) => config,
        Err(e) => return on_error("config", &e, EXIT_FAILURE),
    };
    debug!(?config, "Resolved configuration");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match cli::run(&config, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let code = if e.is_usage() { EXIT_BUG } else { EXIT_FAILURE };
            on_error("run", &e, code)
        }
    }
}

/// `RUST_LOG` wins when set; otherwise `-v` picks the level.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .init();
}

fn on_error(context: &str, e: &dyn std::error::Error, code: u8) -> ExitCode {
    eprintln!("err - {} - {}", context, e);
    ExitCode::from(code)
}
