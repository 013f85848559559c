//! Console logging setup shared by the binaries.

use tracing_subscriber::EnvFilter;

/// Map a `-v` count to a default filter directive.
pub fn filter_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install a `fmt` subscriber. `RUST_LOG` wins over the verbosity count.
///
/// Safe to call more than once; later calls are ignored.
pub fn setup_logging(verbosity: u8) {
    let filter = filter_for_verbosity(verbosity);
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .try_init();
}
