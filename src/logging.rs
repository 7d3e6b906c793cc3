//! Diagnostic logging to stderr; stdout belongs to the console UI.

use tracing_subscriber::EnvFilter;

pub fn init(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
