use std::collections::HashMap;
use std::sync::Arc;

use rainbow_core::connector::ProviderKey;
use rainbow_core::{BOUNDARY_COUNT, PriceConnector, RainbowConfig, RainbowError, ReferenceEvent};

/// Orchestrator that acquires price history and turns it into rainbow bands.
pub struct Rainbow {
    pub(crate) connectors: Vec<Arc<dyn PriceConnector>>,
    pub(crate) priority: Vec<ProviderKey>,
    pub(crate) cfg: RainbowConfig,
}

/// Builder for constructing a `Rainbow` orchestrator with custom configuration.
pub struct RainbowBuilder {
    connectors: Vec<Arc<dyn PriceConnector>>,
    priority: Vec<ProviderKey>,
    cfg: RainbowConfig,
}

impl Default for RainbowBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RainbowBuilder {
    /// Create a new builder with the default configuration.
    ///
    /// Starts with no connectors; you must register at least one via
    /// [`with_connector`](Self::with_connector). Band multipliers default to
    /// `[-3, -2, -1, 0, 1, 2, 3, 3.5]` and the reference events to the four
    /// Bitcoin halvings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            connectors: vec![],
            priority: vec![],
            cfg: RainbowConfig::default(),
        }
    }

    /// Register a provider connector.
    ///
    /// Behavior and trade-offs:
    /// - Registration order is the attempt order unless [`prefer`](Self::prefer) is set.
    /// - Duplicates are not deduplicated; a connector registered twice is tried twice.
    #[must_use]
    pub fn with_connector(mut self, c: Arc<dyn PriceConnector>) -> Self {
        self.connectors.push(c);
        self
    }

    /// Set the preferred attempt order by provider key.
    ///
    /// Listed providers are tried first, in the given order; unlisted
    /// providers follow in registration order. Keys that match no registered
    /// connector are dropped at build time.
    #[must_use]
    pub fn prefer(mut self, keys: &[ProviderKey]) -> Self {
        self.priority = keys.to_vec();
        self
    }

    /// Override the eight band multipliers. Validated in [`build`](Self::build).
    #[must_use]
    pub const fn multipliers(mut self, multipliers: [f64; BOUNDARY_COUNT]) -> Self {
        self.cfg.multipliers = multipliers;
        self
    }

    /// Replace the reference events drawn over the series.
    #[must_use]
    pub fn reference_events(mut self, events: Vec<ReferenceEvent>) -> Self {
        self.cfg.reference_events = events;
        self
    }

    /// Set the lower clamp of the minimum-Y axis hint.
    #[must_use]
    pub const fn min_y_floor(mut self, floor: f64) -> Self {
        self.cfg.min_y_floor = floor;
        self
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, cfg: RainbowConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Build the `Rainbow` orchestrator.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no connectors have been registered or if the
    /// configuration is invalid.
    pub fn build(mut self) -> Result<Rainbow, RainbowError> {
        if self.connectors.is_empty() {
            return Err(RainbowError::InvalidArg(
                "no connectors registered; add at least one via with_connector(...)".to_string(),
            ));
        }
        self.cfg.validate()?;

        // Drop unknown keys and duplicates.
        let known: std::collections::HashSet<&'static str> =
            self.connectors.iter().map(|c| c.name()).collect();
        let mut seen: std::collections::HashSet<&'static str> = std::collections::HashSet::new();
        self.priority
            .retain(|k| known.contains(k.as_str()) && seen.insert(k.as_str()));

        Ok(Rainbow {
            connectors: self.connectors,
            priority: self.priority,
            cfg: self.cfg,
        })
    }
}

/// Attribute a connector error to the connector that produced it.
///
/// Errors already tagged with a provider are passed through.
pub fn tag_err(connector: &str, e: RainbowError) -> RainbowError {
    match e {
        e @ RainbowError::Provider { .. } => e,
        other => RainbowError::provider(connector, other.to_string()),
    }
}

impl Rainbow {
    /// Start building a new `Rainbow` instance.
    ///
    /// ```rust,ignore
    /// use std::sync::Arc;
    /// use rainbow::Rainbow;
    /// use rainbow_providers::{CoinCapConnector, CoinGeckoConnector};
    ///
    /// let gecko = Arc::new(CoinGeckoConnector::new()?);
    /// let cap = Arc::new(CoinCapConnector::new()?);
    ///
    /// let rainbow = Rainbow::builder()
    ///     .with_connector(gecko.clone())
    ///     .with_connector(cap.clone())
    ///     .prefer(&[cap.key(), gecko.key()])
    ///     .build()?;
    /// ```
    #[must_use]
    pub fn builder() -> RainbowBuilder {
        RainbowBuilder::new()
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &RainbowConfig {
        &self.cfg
    }

    /// Connectors in attempt order.
    pub(crate) fn ordered(&self) -> Vec<Arc<dyn PriceConnector>> {
        let mut out: Vec<(usize, Arc<dyn PriceConnector>)> =
            self.connectors.iter().cloned().enumerate().collect();
        if !self.priority.is_empty() {
            let pos: HashMap<_, _> = self
                .priority
                .iter()
                .enumerate()
                .map(|(i, k)| (k.as_str(), i))
                .collect();
            out.sort_by_key(|(orig_i, c)| {
                (pos.get(c.name()).copied().unwrap_or(usize::MAX), *orig_i)
            });
        }
        out.into_iter().map(|(_, c)| c).collect()
    }

    /// Provider names in attempt order.
    #[must_use]
    pub fn provider_order(&self) -> Vec<&'static str> {
        self.ordered().iter().map(|c| c.name()).collect()
    }
}
