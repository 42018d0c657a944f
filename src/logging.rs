//! Tracing subscriber setup for the binary.

use tracing_subscriber::EnvFilter;

/// Pick the filter: `RUST_LOG` wins, then `--debug`, then the configured
/// directive. An unparsable configured directive falls back to `warn`.
pub fn filter(debug_flag: bool, configured: &str) -> EnvFilter {
    if let Ok(from_env) = EnvFilter::try_from_env("RUST_LOG") {
        return from_env;
    }
    if debug_flag {
        return EnvFilter::new("debug");
    }
    EnvFilter::try_new(configured).unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Install a stderr `fmt` subscriber. Safe to call more than once; later
/// calls are ignored.
pub fn init(debug_flag: bool, configured: &str) {
    let installed = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter(debug_flag, configured))
        .try_init();
    if installed.is_ok() {
        tracing::debug!(debug_flag, filter = configured, "memkv logging started");
    }
}
