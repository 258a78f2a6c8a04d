//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Install a compact stderr subscriber.
///
/// Priority: `RUST_LOG` > `--verbose` (debug) > default (warn).
pub fn init_tracing(verbose: bool) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .ok(); // Ignore error if already initialized
}
