//! Foundational data types and re-exports from `rainbow-types`.
// Consolidated re-exports so downstream crates can depend on `rainbow-core` only

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use rainbow_types::{
    BAND_MULTIPLIERS, BOUNDARY_COUNT, Band, HALVING_TIMESTAMPS, MIN_REGRESSION_POINTS,
    ProviderKey, RainbowConfig, RainbowError, ReferenceEvent, halvings,
};

/// The asset whose history is fetched, identified the way providers address it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Asset {
    id: String,
    symbol: String,
}

impl Asset {
    /// Build an asset from a provider slug (e.g. `"bitcoin"`) and a ticker symbol.
    pub fn new(id: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            symbol: symbol.into(),
        }
    }

    /// Bitcoin, the asset every default provider serves.
    #[must_use]
    pub fn bitcoin() -> Self {
        Self::new("bitcoin", "BTC")
    }

    /// Provider slug.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Ticker symbol.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Whether this asset is Bitcoin.
    #[must_use]
    pub fn is_bitcoin(&self) -> bool {
        self.id.eq_ignore_ascii_case("bitcoin") || self.symbol.eq_ignore_ascii_case("BTC")
    }
}

impl core::fmt::Display for Asset {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.symbol)
    }
}

/// A raw price observation as returned by a provider.
///
/// Nothing is validated here: the timestamp may be outside the representable
/// range and the price may be NaN, infinite, zero, or negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Milliseconds since the Unix epoch.
    pub timestamp_ms: i64,
    /// Quoted price in the provider's currency.
    pub price: f64,
}

impl Observation {
    /// Build an observation from epoch milliseconds and a price.
    #[must_use]
    pub const fn new(timestamp_ms: i64, price: f64) -> Self {
        Self {
            timestamp_ms,
            price,
        }
    }

    /// Build an observation from an instant and a price.
    #[must_use]
    pub fn at(ts: DateTime<Utc>, price: f64) -> Self {
        Self::new(ts.timestamp_millis(), price)
    }

    /// Convert into a validated point, or `None` when the observation is malformed.
    #[must_use]
    pub fn to_point(self) -> Option<Point> {
        if !(self.price.is_finite() && self.price > 0.0) {
            return None;
        }
        DateTime::from_timestamp_millis(self.timestamp_ms).map(|ts| Point {
            ts,
            price: self.price,
        })
    }
}

/// A validated point of a [`Series`](crate::Series).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Observation instant.
    pub ts: DateTime<Utc>,
    /// Finite, strictly positive price.
    pub price: f64,
}
