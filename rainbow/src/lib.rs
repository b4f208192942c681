//! Rainbow turns long-horizon price history into log-regression bands.
//!
//! Overview
//! - Acquires daily prices from connectors that implement the `rainbow_core`
//!   `PriceConnector` contract, trying them one after another until one succeeds.
//! - Normalizes the observations, fits a quadratic trend to log price, and
//!   derives eight boundary curves at fixed multiples of the residual spread.
//! - Filters reference events (the Bitcoin halvings by default) to the
//!   observed range.
//!
//! Key behaviors and trade-offs
//! - Fallback is strictly sequential: predictable and light on rate limits,
//!   at the cost of latency when early providers are slow to fail.
//! - A provider that answers with an empty history is treated as failed.
//! - No caching: every `prepare` call fetches afresh.
//!
//! Examples
//! ```rust,ignore
//! use std::sync::Arc;
//! use rainbow::{Asset, Rainbow};
//! use rainbow_providers::default_chain;
//!
//! let mut builder = Rainbow::builder();
//! for c in default_chain(&Default::default())? {
//!     builder = builder.with_connector(c);
//! }
//! let rainbow = builder.build()?;
//!
//! let prepared = rainbow.prepare(&Asset::bitcoin()).await?;
//! if let Some(band) = prepared.current_band() {
//!     println!("latest close sits in: {band}");
//! }
//! ```
//!
//! See `demos/examples/` for runnable end-to-end demonstrations.
#![warn(missing_docs)]

pub(crate) mod core;
mod router;

pub use core::{Rainbow, RainbowBuilder, tag_err};
pub use router::acquire::SourceReport;
pub use router::util::collapse_errors;

// Re-export core types for convenience
pub use rainbow_core::{
    Asset, BAND_MULTIPLIERS, BOUNDARY_COUNT, Band, BandSet, HALVING_TIMESTAMPS,
    MIN_REGRESSION_POINTS, Observation, Point, PreparedRow, PreparedSeries, PriceConnector,
    ProviderKey, QuadraticFit, RainbowConfig, RainbowError, ReferenceEvent, ResidualStats, Series,
    halvings, prepare_observations, prepare_series,
};
