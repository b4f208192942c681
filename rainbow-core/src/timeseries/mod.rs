//! Pure numeric stages between raw observations and the finished chart.
//!
//! Modules include:
//! - `series`: filter and order raw observations
//! - `regression`: quadratic least-squares fit and residual spread
//! - `bands`: boundary curves around the fitted trend
//! - `events`: reference events inside the observed range
/// Boundary curves derived from a fit and its residual spread.
pub mod bands;
/// Reference-event filtering against the observed time range.
pub mod events;
/// Quadratic least-squares regression on log prices.
pub mod regression;
/// Validated, time-ordered price series.
pub mod series;
