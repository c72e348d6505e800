//! Diagnostic logging for the CLI
//!
//! Logs go to stderr so generated output and summaries on stdout stay
//! clean. `RUST_LOG` is honoured unless `-v`/`-q` is given.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Filter directive for the given verbosity flags
pub fn directive(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Initialize the global subscriber
pub fn init_logging(verbose: u8, quiet: bool) {
    let default = directive(verbose, quiet);
    let filter = if verbose > 0 || quiet {
        EnvFilter::new(default)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
    };

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false));

    // Ignore error if already set (e.g., in tests)
    let _ = tracing::subscriber::set_global_default(subscriber);
}
