use async_trait::async_trait;

use crate::types::{Asset, Observation};
use crate::RainbowError;
pub use rainbow_types::ProviderKey;

/// A source of historical daily prices.
///
/// Implementations perform I/O and report every failure as a
/// [`RainbowError::Provider`] tagged with their own name, so the acquisition
/// chain can move on to the next provider.
#[async_trait]
pub trait PriceConnector: Send + Sync {
    /// A stable identifier for priority lists (e.g., "coingecko", "coincap").
    fn name(&self) -> &'static str;

    /// Canonical provider key constructed from the static name.
    ///
    /// Use this helper when configuring provider preference.
    fn key(&self) -> ProviderKey {
        ProviderKey::new(self.name())
    }

    /// Human-friendly vendor string.
    fn vendor(&self) -> &'static str {
        "unknown"
    }

    /// Fetch the full daily price history of `asset`.
    ///
    /// The returned observations are unvalidated; ordering and malformed
    /// entries are handled by [`Series::normalize`](crate::Series::normalize).
    ///
    /// # Errors
    /// Returns a `Provider` error on transport failure, a non-success status,
    /// or a payload missing the expected structure.
    async fn history(&self, asset: &Asset) -> Result<Vec<Observation>, RainbowError>;
}
