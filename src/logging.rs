// src/logging.rs

use tracing_subscriber::{fmt, EnvFilter};

/// Sets up the global subscriber.
///
/// Reads `RUST_LOG` (e.g. `RUST_LOG=invilytics=debug`), falling back to `info`.
/// Log lines go to stderr so table/JSON/CSV output on stdout stays clean.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

/// Verbose subscriber for tests. Safe to call more than once.
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
