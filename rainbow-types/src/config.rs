//! Configuration types shared across the orchestrator and the pure pipeline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::RainbowError;

/// Number of boundary curves produced per series (seven bands in between).
pub const BOUNDARY_COUNT: usize = 8;

/// Minimum number of valid observations needed for a non-degenerate quadratic fit.
pub const MIN_REGRESSION_POINTS: usize = 3;

/// Default standard-deviation multipliers, lowest boundary first.
///
/// The set is intentionally asymmetric: the top boundary sits at +3.5σ.
pub const BAND_MULTIPLIERS: [f64; BOUNDARY_COUNT] = [-3.0, -2.0, -1.0, 0.0, 1.0, 2.0, 3.0, 3.5];

/// Bitcoin halving dates as (label, epoch seconds at 00:00 UTC).
pub const HALVING_TIMESTAMPS: [(&str, i64); 4] = [
    ("First halving", 1_354_060_800),
    ("Second halving", 1_468_022_400),
    ("Third halving", 1_589_155_200),
    ("Fourth halving", 1_713_571_200),
];

/// A fixed historical instant drawn as a marker over the series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceEvent {
    /// Display label.
    pub label: String,
    /// Instant of the event.
    pub at: DateTime<Utc>,
}

impl ReferenceEvent {
    /// Build an event from a label and an instant.
    pub fn new(label: impl Into<String>, at: DateTime<Utc>) -> Self {
        Self {
            label: label.into(),
            at,
        }
    }
}

/// The four Bitcoin halvings as reference events, oldest first.
#[must_use]
pub fn halvings() -> Vec<ReferenceEvent> {
    HALVING_TIMESTAMPS
        .iter()
        .filter_map(|&(label, secs)| {
            DateTime::from_timestamp(secs, 0).map(|at| ReferenceEvent::new(label, at))
        })
        .collect()
}

/// Global configuration for the `Rainbow` orchestrator and the band pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RainbowConfig {
    /// Standard-deviation multipliers for the eight boundary curves.
    ///
    /// Must be finite and strictly increasing.
    pub multipliers: [f64; BOUNDARY_COUNT],
    /// Events filtered against the observed time range.
    pub reference_events: Vec<ReferenceEvent>,
    /// Lower clamp for the minimum-Y axis hint.
    pub min_y_floor: f64,
}

impl Default for RainbowConfig {
    fn default() -> Self {
        Self {
            multipliers: BAND_MULTIPLIERS,
            reference_events: halvings(),
            min_y_floor: 1.0,
        }
    }
}

impl RainbowConfig {
    /// Check the invariants the band generator relies on.
    ///
    /// # Errors
    /// Returns `InvalidArg` if a multiplier is not finite, if the multipliers are not
    /// strictly increasing, or if `min_y_floor` is not finite.
    pub fn validate(&self) -> Result<(), RainbowError> {
        if let Some(m) = self.multipliers.iter().find(|m| !m.is_finite()) {
            return Err(RainbowError::InvalidArg(format!(
                "band multiplier {m} is not finite"
            )));
        }
        if let Some(pair) = self.multipliers.windows(2).find(|w| w[0] >= w[1]) {
            return Err(RainbowError::InvalidArg(format!(
                "band multipliers must be strictly increasing ({} >= {})",
                pair[0], pair[1]
            )));
        }
        if !self.min_y_floor.is_finite() {
            return Err(RainbowError::InvalidArg(
                "min_y_floor must be finite".to_string(),
            ));
        }
        Ok(())
    }
}
