use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the rainbow workspace.
///
/// This wraps provider-tagged failures, the aggregate produced when every
/// provider in the acquisition chain failed, and the fatal pipeline errors
/// raised by normalization and regression.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq)]
#[non_exhaustive]
pub enum RainbowError {
    /// An individual provider failed (transport, status, or payload problem).
    #[error("{provider}: {msg}")]
    Provider {
        /// Provider name that failed.
        provider: String,
        /// Human-readable diagnostic message.
        msg: String,
    },

    /// Every provider in the chain failed; contains the failures in attempt order.
    #[error("all data providers failed: {}", join_failures(.0))]
    AllProvidersFailed(Vec<RainbowError>),

    /// Too few usable observations survived normalization.
    #[error("insufficient data: need at least {required} valid observations, got {available}")]
    InsufficientData {
        /// Minimum number of points the regression needs.
        required: usize,
        /// Number of points that survived filtering.
        available: usize,
    },

    /// The normal-equations determinant vanished.
    #[error("singular fit: normal equations are degenerate for {points} points")]
    SingularFit {
        /// Number of points the fit was attempted on.
        points: usize,
    },

    /// Invalid input argument or configuration.
    #[error("invalid argument: {0}")]
    InvalidArg(String),
}

fn join_failures(errors: &[RainbowError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" | ")
}

impl RainbowError {
    /// Helper: build a `Provider` error with the provider name and message.
    pub fn provider(provider: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Provider {
            provider: provider.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build an `InsufficientData` error.
    #[must_use]
    pub const fn insufficient_data(required: usize, available: usize) -> Self {
        Self::InsufficientData {
            required,
            available,
        }
    }

    /// Returns true if the chain may recover from this error by trying the next provider.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Provider { .. })
    }

    /// Name of the provider this error is tagged with, if any.
    #[must_use]
    pub fn provider_name(&self) -> Option<&str> {
        match self {
            Self::Provider { provider, .. } => Some(provider),
            _ => None,
        }
    }

    /// Flatten nested `AllProvidersFailed` structures into a plain vector.
    ///
    /// This preserves other error variants as-is and unwraps recursively.
    #[must_use]
    pub fn flatten(self) -> Vec<Self> {
        match self {
            Self::AllProvidersFailed(list) => list.into_iter().flat_map(Self::flatten).collect(),
            other => vec![other],
        }
    }
}
