//! Logging initialisation for binaries.
//!
//! Library crates emit `tracing` events and never install a subscriber;
//! the binary decides the sink and verbosity by calling [`init_logging`]
//! once at startup.

use tracing_subscriber::EnvFilter;

/// Install a formatted `tracing` subscriber.
///
/// The filter comes from `RUST_LOG` when set, defaulting to `info`.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}
