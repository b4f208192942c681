use rainbow_core::{Asset, PreparedSeries, RainbowError, Series, prepare_series};

use crate::Rainbow;
use crate::router::acquire::SourceReport;

impl Rainbow {
    /// Acquire history for `asset` and compute the full band set.
    ///
    /// Behavior and trade-offs:
    /// - Providers are tried in priority order until one returns data.
    /// - Normalization and regression failures are fatal; the chain is not
    ///   resumed because a later provider returned nothing better at fetch time.
    /// - Every call fetches afresh; nothing is cached between calls.
    ///
    /// # Errors
    /// Returns `AllProvidersFailed` when no provider yields data,
    /// `InsufficientData` when fewer than three observations are usable, or
    /// `SingularFit` when the regression is degenerate.
    pub async fn prepare(&self, asset: &Asset) -> Result<PreparedSeries, RainbowError> {
        self.prepare_with_report(asset)
            .await
            .map(|(prepared, _)| prepared)
    }

    /// Like [`prepare`](Self::prepare) but also reports which provider supplied the data.
    ///
    /// # Errors
    /// Same as [`prepare`](Self::prepare).
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "rainbow::router::prepare", skip(self), fields(asset = %asset))
    )]
    pub async fn prepare_with_report(
        &self,
        asset: &Asset,
    ) -> Result<(PreparedSeries, SourceReport), RainbowError> {
        let (raw, report) = self.acquire_with_report(asset).await?;
        let series = Series::normalize(raw)?;
        let prepared = prepare_series(&series, &self.cfg)?;

        #[cfg(feature = "tracing")]
        tracing::info!(
            provider = %report.provider,
            rows = prepared.len(),
            events = prepared.events().len(),
            "prepared rainbow series"
        );

        Ok((prepared, report))
    }
}
