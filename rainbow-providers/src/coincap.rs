use async_trait::async_trait;
use chrono::Utc;
use rainbow_core::connector::ProviderKey;
use rainbow_core::{Asset, Observation, PriceConnector, RainbowError};
use serde::Deserialize;

use crate::http::{Diagnostics, HttpConfig, get_json, validate_base};

const DIAG: Diagnostics = Diagnostics {
    provider: CoinCapConnector::KEY.as_str(),
    label: "CoinCap",
    bad_payload: "CoinCap bad payload",
};

/// 2013-04-28T00:00:00Z, the earliest day CoinCap serves.
pub const COINCAP_START_MS: i64 = 1_367_107_200_000;

#[derive(Deserialize)]
struct History {
    data: Vec<HistoryPoint>,
}

#[derive(Deserialize)]
struct HistoryPoint {
    time: f64,
    #[serde(rename = "priceUsd")]
    price_usd: Option<String>,
}

impl HistoryPoint {
    fn into_observation(self) -> Observation {
        let price = self
            .price_usd
            .and_then(|s| s.trim().parse::<f64>().ok())
            .unwrap_or(f64::NAN);
        Observation::new(self.time as i64, price)
    }
}

/// Daily history from the CoinCap v2 `assets/{id}/history` endpoint.
pub struct CoinCapConnector {
    client: reqwest::Client,
    base: String,
}

impl CoinCapConnector {
    /// Static connector key for priority configuration.
    pub const KEY: ProviderKey = ProviderKey::new("coincap");
    /// Public API root.
    pub const DEFAULT_BASE: &'static str = "https://api.coincap.io/v2";

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
impl PriceConnector for CoinCapConnector {
    fn name(&self) -> &'static str {
        Self::KEY.as_str()
    }

    fn vendor(&self) -> &'static str {
        "CoinCap"
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "rainbow_providers::coincap::history", skip(self), fields(asset = %asset))
    )]
    async fn history(&self, asset: &Asset) -> Result<Vec<Observation>, RainbowError> {
        let url = format!("{}/assets/{}/history", self.base, asset.id());
        let query = [
            ("interval", "d1".to_string()),
            ("start", COINCAP_START_MS.to_string()),
            ("end", Utc::now().timestamp_millis().to_string()),
        ];
        let history: History = get_json(&self.client, &DIAG, &url, &query).await?;
        Ok(history
            .data
            .into_iter()
            .map(HistoryPoint::into_observation)
            .collect())
    }
}
