//! Development-time tracing for the reducer.
//!
//! The reducer emits `debug` events for every transition (pair formed,
//! survivors carried, winner decided). Nothing is printed unless a
//! subscriber is installed, either by the embedding application or by
//! [`init`].

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing subscriber for development logging.
///
/// Reads `RUST_LOG` env var. Defaults to `warn` if unset.
/// Output: stderr, compact format. Calling it again after a subscriber is
/// already installed is a no-op.
///
/// # Example
/// ```bash
/// RUST_LOG=voting=debug cargo test
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .try_init();
}
