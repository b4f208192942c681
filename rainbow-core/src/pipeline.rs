use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::timeseries::bands::{BandSet, spans_of};
use crate::timeseries::events::filter_events;
use crate::timeseries::regression::{QuadraticFit, ResidualStats, fit_quadratic, residual_stats};
use crate::timeseries::series::Series;
use crate::types::{BOUNDARY_COUNT, Band, Observation, RainbowConfig, RainbowError, ReferenceEvent};

/// One chart row: a price and the eight boundary values at the same index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PreparedRow {
    /// Observation instant.
    pub ts: DateTime<Utc>,
    /// Observed price.
    pub price: f64,
    /// Boundary values, lowest first.
    pub boundaries: [f64; BOUNDARY_COUNT],
}

impl PreparedRow {
    /// The lowest boundary, used as the stacking base.
    #[must_use]
    pub const fn base(&self) -> f64 {
        self.boundaries[0]
    }

    /// Height of each of the seven bands.
    #[must_use]
    pub fn spans(&self) -> [f64; BOUNDARY_COUNT - 1] {
        spans_of(&self.boundaries)
    }

    /// Band the observed price falls into.
    #[must_use]
    pub fn band(&self) -> Band {
        Band::classify(self.price, &self.boundaries)
    }
}

/// Everything a chart needs, computed from one normalized series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreparedSeries {
    rows: Vec<PreparedRow>,
    bands: BandSet,
    events: Vec<ReferenceEvent>,
    fit: QuadraticFit,
    residuals: ResidualStats,
    min_y: f64,
}

impl PreparedSeries {
    /// Rows in ascending timestamp order.
    #[must_use]
    pub fn rows(&self) -> &[PreparedRow] {
        &self.rows
    }

    /// The boundary curves.
    #[must_use]
    pub const fn bands(&self) -> &BandSet {
        &self.bands
    }

    /// Reference events inside the observed range.
    #[must_use]
    pub fn events(&self) -> &[ReferenceEvent] {
        &self.events
    }

    /// Regression coefficients on log price.
    #[must_use]
    pub const fn fit(&self) -> &QuadraticFit {
        &self.fit
    }

    /// Residual mean and spread.
    #[must_use]
    pub const fn residuals(&self) -> &ResidualStats {
        &self.residuals
    }

    /// Multipliers the boundaries were generated with.
    #[must_use]
    pub const fn multipliers(&self) -> &[f64; BOUNDARY_COUNT] {
        self.bands.multipliers()
    }

    /// Lower bound hint for a logarithmic Y axis.
    #[must_use]
    pub const fn min_y(&self) -> f64 {
        self.min_y
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Never true for a successfully prepared series.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Most recent row.
    #[must_use]
    pub fn latest(&self) -> Option<&PreparedRow> {
        self.rows.last()
    }

    /// Band of the most recent price.
    #[must_use]
    pub fn current_band(&self) -> Option<Band> {
        self.latest().map(PreparedRow::band)
    }
}

/// Run regression, band generation, and event filtering on a normalized series.
///
/// # Errors
/// Returns `InvalidArg` for an invalid configuration and `SingularFit` when
/// the regression is degenerate.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(level = "debug", skip(series, cfg), fields(points = series.len()))
)]
pub fn prepare_series(series: &Series, cfg: &RainbowConfig) -> Result<PreparedSeries, RainbowError> {
    cfg.validate()?;

    let ys = series.log_prices();
    let fit = fit_quadratic(&ys)?;
    let residuals = residual_stats(&ys, &fit);
    let fitted = fit.fitted(ys.len());
    let bands = BandSet::generate(&fitted, residuals.std_dev, &cfg.multipliers);

    let rows: Vec<PreparedRow> = series
        .points()
        .iter()
        .enumerate()
        .filter_map(|(i, p)| {
            bands.row(i).map(|boundaries| PreparedRow {
                ts: p.ts,
                price: p.price,
                boundaries,
            })
        })
        .collect();

    let events = match (series.first(), series.last()) {
        (Some(first), Some(last)) => filter_events(&cfg.reference_events, first, last),
        _ => Vec::new(),
    };

    let min_y = rows
        .iter()
        .map(|r| r.base().min(r.price))
        .fold(f64::INFINITY, f64::min)
        .max(cfg.min_y_floor);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        rows = rows.len(),
        events = events.len(),
        std_dev = residuals.std_dev,
        "prepared series"
    );

    Ok(PreparedSeries {
        rows,
        bands,
        events,
        fit,
        residuals,
        min_y,
    })
}

/// Normalize raw observations and prepare them in one step.
///
/// # Errors
/// Returns `InsufficientData` when fewer than three observations are usable,
/// plus any error from [`prepare_series`].
pub fn prepare_observations(
    raw: Vec<Observation>,
    cfg: &RainbowConfig,
) -> Result<PreparedSeries, RainbowError> {
    let series = Series::normalize(raw)?;
    prepare_series(&series, cfg)
}
