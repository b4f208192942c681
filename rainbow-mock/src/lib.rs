//! Mock connectors for CI-safe tests and demos.
//!
//! - [`MockConnector::new`] serves deterministic synthetic Bitcoin history.
//! - [`MockConnector::builder`] scripts a connector that returns fixed data,
//!   fails, answers empty, or never answers, and counts its calls.
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use rainbow_core::{Asset, Observation, PriceConnector, RainbowError};

pub mod fixtures;

/// What a mock connector does when asked for history.
#[derive(Debug, Clone)]
pub enum Behavior {
    /// Serve the synthetic Bitcoin fixture; any other asset id fails.
    Fixture,
    /// Return these observations for every asset.
    Return(Vec<Observation>),
    /// Fail with a `Provider` error carrying this message.
    Fail(String),
    /// Succeed with no observations.
    Empty,
    /// Never complete.
    Hang,
}

/// Mock connector with scripted behavior and a call counter.
pub struct MockConnector {
    name: &'static str,
    behavior: Behavior,
    delay: Option<Duration>,
    calls: AtomicUsize,
}

impl Default for MockConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl MockConnector {
    /// Fixture-backed connector named `rainbow-mock`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            name: "rainbow-mock",
            behavior: Behavior::Fixture,
            delay: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Start scripting a mock connector.
    #[must_use]
    pub fn builder() -> MockConnectorBuilder {
        MockConnectorBuilder::new()
    }

    /// Number of times `history` has been called.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PriceConnector for MockConnector {
    fn name(&self) -> &'static str {
        self.name
    }

    fn vendor(&self) -> &'static str {
        "Mock"
    }

    async fn history(&self, asset: &Asset) -> Result<Vec<Observation>, RainbowError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(d) = self.delay {
            tokio::time::sleep(d).await;
        }
        match &self.behavior {
            Behavior::Fixture if asset.is_bitcoin() => Ok(fixtures::bitcoin_daily()),
            Behavior::Fixture => Err(RainbowError::provider(
                self.name,
                format!("no fixture for {}", asset.id()),
            )),
            Behavior::Return(obs) => Ok(obs.clone()),
            Behavior::Fail(msg) => Err(RainbowError::provider(self.name, msg.clone())),
            Behavior::Empty => Ok(Vec::new()),
            Behavior::Hang => std::future::pending().await,
        }
    }
}

/// Builder for scripted [`MockConnector`]s.
pub struct MockConnectorBuilder {
    name: &'static str,
    behavior: Behavior,
    delay: Option<Duration>,
}

impl Default for MockConnectorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MockConnectorBuilder {
    /// Defaults to a fixture-backed connector named `mock`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            name: "mock",
            behavior: Behavior::Fixture,
            delay: None,
        }
    }

    #[must_use]
    pub const fn name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Sleep before answering.
    #[must_use]
    pub const fn delay(mut self, d: Duration) -> Self {
        self.delay = Some(d);
        self
    }

    #[must_use]
    pub fn returns(mut self, obs: Vec<Observation>) -> Self {
        self.behavior = Behavior::Return(obs);
        self
    }

    #[must_use]
    pub fn fails(mut self, msg: impl Into<String>) -> Self {
        self.behavior = Behavior::Fail(msg.into());
        self
    }

    #[must_use]
    pub fn empty(mut self) -> Self {
        self.behavior = Behavior::Empty;
        self
    }

    #[must_use]
    pub fn hangs(mut self) -> Self {
        self.behavior = Behavior::Hang;
        self
    }

    #[must_use]
    pub fn build(self) -> Arc<MockConnector> {
        Arc::new(MockConnector {
            name: self.name,
            behavior: self.behavior,
            delay: self.delay,
            calls: AtomicUsize::new(0),
        })
    }
}
