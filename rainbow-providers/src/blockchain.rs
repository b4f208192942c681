use async_trait::async_trait;
use rainbow_core::connector::ProviderKey;
use rainbow_core::{Asset, Observation, PriceConnector, RainbowError};
use serde::Deserialize;

use crate::http::{Diagnostics, HttpConfig, get_json, validate_base};

const DIAG: Diagnostics = Diagnostics {
    provider: BlockchainInfoConnector::KEY.as_str(),
    label: "Blockchain.info",
    bad_payload: "Blockchain bad payload",
};

#[derive(Deserialize)]
struct Chart {
    values: Vec<ChartPoint>,
}

#[derive(Deserialize)]
struct ChartPoint {
    /// Epoch seconds.
    x: f64,
    y: Option<f64>,
}

/// Bitcoin market price chart from Blockchain.info. Serves no other asset.
pub struct BlockchainInfoConnector {
    client: reqwest::Client,
    base: String,
}

impl BlockchainInfoConnector {
    /// Static connector key for priority configuration.
    pub const KEY: ProviderKey = ProviderKey::new("blockchain-info");
    /// Public API root.
    pub const DEFAULT_BASE: &'static str = "https://api.blockchain.info";

    /// Connector with default HTTP settings.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the HTTP client cannot be constructed.
    pub fn new() -> Result<Self, RainbowError> {
        Self::with_config(&HttpConfig::default())
    }

    /// Connector with custom HTTP settings.
    ///
    /// # Errors
    /// Returns `InvalidArg` for an invalid base URL or client settings.
    pub fn with_config(cfg: &HttpConfig) -> Result<Self, RainbowError> {
        Ok(Self {
            client: cfg.client()?,
            base: cfg.base_or(Self::DEFAULT_BASE)?,
        })
    }

    /// Point the connector at a different API root.
    ///
    /// # Errors
    /// Returns `InvalidArg` if `base` is not an absolute http(s) URL.
    pub fn with_base_url(mut self, base: &str) -> Result<Self, RainbowError> {
        self.base = validate_base(base)?;
        Ok(self)
    }
}

#[async_trait]
impl PriceConnector for BlockchainInfoConnector {
    fn name(&self) -> &'static str {
        Self::KEY.as_str()
    }

    fn vendor(&self) -> &'static str {
        "Blockchain.com"
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "rainbow_providers::blockchain::history", skip(self), fields(asset = %asset))
    )]
    async fn history(&self, asset: &Asset) -> Result<Vec<Observation>, RainbowError> {
        if !asset.is_bitcoin() {
            return Err(RainbowError::provider(
                DIAG.provider,
                format!("Blockchain.info has no history for {}", asset.id()),
            ));
        }
        let url = format!("{}/charts/market-price", self.base);
        let query = [
            ("format", "json".to_string()),
            ("cors", "true".to_string()),
        ];
        let chart: Chart = get_json(&self.client, &DIAG, &url, &query).await?;
        Ok(chart
            .values
            .into_iter()
            .map(|v| Observation::new((v.x * 1000.0) as i64, v.y.unwrap_or(f64::NAN)))
            .collect())
    }
}
