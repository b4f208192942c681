use std::sync::Arc;

use rainbow::PriceConnector;
use rainbow_providers::{HttpConfig, default_chain};

/// Set to any value to run the demos against deterministic mock data.
pub const USE_MOCK_ENV: &str = "RAINBOW_DEMOS_USE_MOCK";

/// Whether the demos should stay offline.
#[must_use]
pub fn use_mock() -> bool {
    std::env::var_os(USE_MOCK_ENV).is_some()
}

/// Return the connectors for demos: the live fallback chain, or the mock in CI.
///
/// # Errors
/// Returns an error if an HTTP connector cannot be constructed.
pub fn get_connectors() -> Result<Vec<Arc<dyn PriceConnector>>, rainbow::RainbowError> {
    if use_mock() {
        println!("--- (Using Mock Connector for CI) ---");
        return Ok(vec![Arc::new(rainbow_mock::MockConnector::new())]);
    }
    let cfg = HttpConfig::default().with_timeout(std::time::Duration::from_secs(20));
    default_chain(&cfg)
}
