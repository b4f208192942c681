use rainbow_core::connector::ProviderKey;
use rainbow_core::{Asset, Observation, RainbowError};

use crate::Rainbow;
use crate::core::tag_err;
use crate::router::util::collapse_errors;

/// Which provider supplied the data and what failed before it.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceReport {
    /// Provider whose observations were used.
    pub provider: ProviderKey,
    /// Number of raw observations it returned, before normalization.
    pub observations: usize,
    /// Failures of the providers attempted before it, in attempt order.
    pub failures: Vec<RainbowError>,
}

impl Rainbow {
    /// Fetch raw observations from the first provider that succeeds.
    ///
    /// Providers are attempted strictly one after another in priority order;
    /// a provider is never called once an earlier one has succeeded. A
    /// provider that returns no observations counts as a failure.
    ///
    /// # Errors
    /// Returns `AllProvidersFailed` with every provider's failure, in attempt
    /// order, when no provider yields data.
    pub async fn acquire(&self, asset: &Asset) -> Result<Vec<Observation>, RainbowError> {
        self.acquire_with_report(asset).await.map(|(obs, _)| obs)
    }

    /// Like [`acquire`](Self::acquire) but also reports the winning provider.
    ///
    /// # Errors
    /// Returns `AllProvidersFailed` when no provider yields data.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "rainbow::router::acquire",
            skip(self),
            fields(asset = %asset),
        )
    )]
    pub async fn acquire_with_report(
        &self,
        asset: &Asset,
    ) -> Result<(Vec<Observation>, SourceReport), RainbowError> {
        let mut errors: Vec<RainbowError> = Vec::new();

        for c in self.ordered() {
            match c.history(asset).await {
                Ok(obs) if obs.is_empty() => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(provider = c.name(), "provider returned no observations");
                    errors.push(RainbowError::provider(
                        c.name(),
                        "returned no observations",
                    ));
                }
                Ok(obs) => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(
                        provider = c.name(),
                        observations = obs.len(),
                        skipped = errors.len(),
                        "provider succeeded"
                    );
                    let report = SourceReport {
                        provider: c.key(),
                        observations: obs.len(),
                        failures: errors,
                    };
                    return Ok((obs, report));
                }
                Err(e) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(provider = c.name(), error = %e, "provider failed; falling back");
                    errors.push(tag_err(c.name(), e));
                }
            }
        }

        Err(collapse_errors(errors))
    }
}
