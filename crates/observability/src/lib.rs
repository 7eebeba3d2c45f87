//! `quikcart-observability` — shared tracing/logging setup.

use tracing_subscriber::EnvFilter;

/// Install the process-wide tracing subscriber.
///
/// Honors `RUST_LOG`; without it, quikcart crates log at debug and everything
/// else at info. Safe to call more than once; later calls keep the first
/// subscriber.
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("quikcart=debug,info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .compact()
        .try_init();
}
