// tests/common.rs
//! Log capture for integration tests

use tracing_subscriber::EnvFilter;

/// Route migrator logs into the test harness output; `RUST_LOG` overrides
/// the default of debug for this crate only
#[allow(dead_code)]
pub fn setup() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("identity_migrator=debug"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}
