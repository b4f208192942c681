use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::types::{MIN_REGRESSION_POINTS, Observation, Point, RainbowError};

/// A validated price series ordered by ascending timestamp.
///
/// Every point has a finite, strictly positive price. Points with equal
/// timestamps are all kept, in their original relative order. A `Series`
/// always holds at least [`MIN_REGRESSION_POINTS`] points.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    points: Vec<Point>,
}

impl Series {
    /// Filter malformed observations and order the rest by timestamp.
    ///
    /// Observations are dropped when the price is NaN, infinite, zero, or
    /// negative, or when the timestamp is not a representable instant.
    ///
    /// # Errors
    /// Returns `InsufficientData` when fewer than [`MIN_REGRESSION_POINTS`]
    /// observations survive.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "debug", skip(raw), fields(raw = raw.len()))
    )]
    pub fn normalize(raw: Vec<Observation>) -> Result<Self, RainbowError> {
        let total = raw.len();
        let mut points: Vec<Point> = raw
            .into_iter()
            .filter_map(|obs| {
                let point = obs.to_point();
                if point.is_none() {
                    trace_dropped(&obs);
                }
                point
            })
            .collect();

        if points.len() < MIN_REGRESSION_POINTS {
            return Err(RainbowError::insufficient_data(
                MIN_REGRESSION_POINTS,
                points.len(),
            ));
        }

        // Stable: equal timestamps keep their input order.
        points.sort_by_key(|p| p.ts);

        #[cfg(feature = "tracing")]
        tracing::debug!(kept = points.len(), dropped = total - points.len(), "normalized series");
        #[cfg(not(feature = "tracing"))]
        let _ = total;

        Ok(Self { points })
    }

    /// Points in ascending timestamp order.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false for a constructed series; provided for API symmetry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Earliest timestamp.
    #[must_use]
    pub fn first(&self) -> Option<DateTime<Utc>> {
        self.points.first().map(|p| p.ts)
    }

    /// Latest timestamp.
    #[must_use]
    pub fn last(&self) -> Option<DateTime<Utc>> {
        self.points.last().map(|p| p.ts)
    }

    /// Natural log of every price, in series order.
    #[must_use]
    pub fn log_prices(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.price.ln()).collect()
    }

    /// Consume the series, returning its points.
    #[must_use]
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }
}

#[cfg(feature = "tracing")]
fn trace_dropped(obs: &Observation) {
    tracing::trace!(
        timestamp_ms = obs.timestamp_ms,
        price = obs.price,
        "dropping malformed observation"
    );
}

#[cfg(not(feature = "tracing"))]
const fn trace_dropped(_obs: &Observation) {}
