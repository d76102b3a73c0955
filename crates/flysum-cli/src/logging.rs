//! Logging setup

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Filter for the requested verbosity: `debug` when verbose, `info` otherwise
#[must_use]
pub fn env_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    }
}

/// Install the global subscriber; logs go to stderr so stdout stays clean
pub fn setup_logging(verbose: bool) {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(env_filter(verbose))
        .init();
}
