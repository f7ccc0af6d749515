//! Tracing/logging setup shared by binaries and tests that embed slots.
//!
//! Library crates only emit events through `tracing`; installing a subscriber
//! is the embedding application's call.

/// Environment-driven configuration.
pub mod config;

/// Tracing configuration (filters, layers).
pub mod tracing;

pub use config::{LOG_FORMAT_ENV, LogFormat, ObservabilityConfig};

/// Initialize process-wide observability from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init_with(&ObservabilityConfig::from_env());
}

/// Initialize observability with an explicit configuration.
pub fn init_with(config: &ObservabilityConfig) {
    tracing::init_with(config);
}

/// Initialize a subscriber that writes through the test harness' capture.
pub fn init_for_tests() {
    tracing::init_for_tests();
}
