//! Test logging
//!
//! Routes `tracing` output through the test harness's captured writer.
//! `RUST_LOG` selects what is shown; without it only warnings appear.

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset
pub const DEFAULT_TEST_FILTER: &str = "warn";

/// Install a global subscriber for tests.
///
/// Safe to call from every test: only the first call installs anything.
pub fn init_test_logging() {
    init_test_logging_with(DEFAULT_TEST_FILTER);
}

/// Like [`init_test_logging`] with an explicit fallback filter, e.g.
/// `"cosmology_core=trace"`.
pub fn init_test_logging_with(fallback: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}
