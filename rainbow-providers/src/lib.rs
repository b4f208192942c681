//! rainbow-providers
//!
//! HTTP connectors implementing `PriceConnector` for the public price APIs
//! rainbow falls back across: CoinGecko, CoinCap and Blockchain.info.
//!
//! Every failure (transport, status, or payload) is reported as a
//! `RainbowError::Provider` tagged with the connector's key so the
//! orchestrator can move on to the next source.
#![warn(missing_docs)]

mod blockchain;
mod coincap;
mod coingecko;
/// Shared HTTP settings and the JSON fetch helper.
pub mod http;

use std::sync::Arc;

pub use blockchain::BlockchainInfoConnector;
pub use coincap::{COINCAP_START_MS, CoinCapConnector};
pub use coingecko::CoinGeckoConnector;
pub use http::{DEFAULT_USER_AGENT, HttpConfig};
use rainbow_core::{PriceConnector, RainbowError};

/// The three connectors in default fallback order: CoinGecko, CoinCap, Blockchain.info.
///
/// # Errors
/// Returns `InvalidArg` if `cfg` carries an invalid base URL or client settings.
pub fn default_chain(cfg: &HttpConfig) -> Result<Vec<Arc<dyn PriceConnector>>, RainbowError> {
    let chain: Vec<Arc<dyn PriceConnector>> = vec![
        Arc::new(CoinGeckoConnector::with_config(cfg)?),
        Arc::new(CoinCapConnector::with_config(cfg)?),
        Arc::new(BlockchainInfoConnector::with_config(cfg)?),
    ];
    Ok(chain)
}
