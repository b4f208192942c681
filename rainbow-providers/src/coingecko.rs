use async_trait::async_trait;
use rainbow_core::connector::ProviderKey;
use rainbow_core::{Asset, Observation, PriceConnector, RainbowError};
use serde::Deserialize;

use crate::http::{Diagnostics, HttpConfig, get_json, validate_base};

const DIAG: Diagnostics = Diagnostics {
    provider: CoinGeckoConnector::KEY.as_str(),
    label: "CoinGecko",
    bad_payload: "CoinGecko bad payload",
};

#[derive(Deserialize)]
struct MarketChart {
    // [[epoch_ms, price], ...]; nulls survive as NaN and are dropped downstream
    prices: Vec<(f64, Option<f64>)>,
}

/// Full daily history from the CoinGecko `market_chart` endpoint.
pub struct CoinGeckoConnector {
    client: reqwest::Client,
    base: String,
}

impl CoinGeckoConnector {
    /// Static connector key for priority configuration.
    pub const KEY: ProviderKey = ProviderKey::new("coingecko");
    /// Public API root.
    pub const DEFAULT_BASE: &'static str = "https://api.coingecko.com/api/v3";

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
impl PriceConnector for CoinGeckoConnector {
    fn name(&self) -> &'static str {
        Self::KEY.as_str()
    }

    fn vendor(&self) -> &'static str {
        "CoinGecko"
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "rainbow_providers::coingecko::history", skip(self), fields(asset = %asset))
    )]
    async fn history(&self, asset: &Asset) -> Result<Vec<Observation>, RainbowError> {
        let url = format!("{}/coins/{}/market_chart", self.base, asset.id());
        let query = [
            ("vs_currency", "usd".to_string()),
            ("days", "max".to_string()),
        ];
        let chart: MarketChart = get_json(&self.client, &DIAG, &url, &query).await?;
        Ok(chart
            .prices
            .into_iter()
            .map(|(ms, price)| Observation::new(ms as i64, price.unwrap_or(f64::NAN)))
            .collect())
    }
}
