//! Test helpers shared by the integration tests.
//!
//! Run from workspace root: `cargo test -p filemodel-core`.
//! Set `RUST_LOG=filemodel_core=debug` to see the decoder logs.

#![allow(dead_code)]

pub mod fixtures;

/// Install a test-writer subscriber once per test binary.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
}
