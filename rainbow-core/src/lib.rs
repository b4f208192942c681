//! rainbow-core
//!
//! Core types, the provider trait, and the pure band pipeline shared across the
//! rainbow workspace.
//!
//! - `types`: observations, validated points, and the asset handle.
//! - `connector`: the `PriceConnector` trait implemented by data providers.
//! - `timeseries`: normalization, the quadratic log-regression, bands, and events.
//! - `pipeline`: the end-to-end transform from observations to chart-ready rows.
//!
//! Everything except `connector` is synchronous and free of I/O.
#![warn(missing_docs)]

/// The `PriceConnector` trait implemented by every data provider.
pub mod connector;
/// Chart-ready output assembled from a normalized series.
pub mod pipeline;
/// Normalization, regression, band, and event helpers.
pub mod timeseries;
pub mod types;

pub use connector::PriceConnector;
pub use pipeline::{PreparedRow, PreparedSeries, prepare_observations, prepare_series};
pub use timeseries::bands::BandSet;
pub use timeseries::events::filter_events;
pub use timeseries::regression::{QuadraticFit, ResidualStats, fit_quadratic, residual_stats};
pub use timeseries::series::Series;
pub use types::*;
