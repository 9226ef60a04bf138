// Shared helpers for the integration tests

use std::sync::Once;

static INIT: Once = Once::new();

/// Installs a tracing subscriber once per test binary.
///
/// Set `RUST_LOG=rvoip_sip_addr=trace` to see the parser output.
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}
