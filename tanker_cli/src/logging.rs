//! Logging setup for the command-line front end.

use tracing_subscriber::{fmt, EnvFilter};

/// Install the global subscriber.
///
/// `RUST_LOG` controls the filter (default: `warn`), e.g.
/// `RUST_LOG=tanker_core=debug`. Output goes to stderr so stdout stays
/// clean for text or JSON results.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
