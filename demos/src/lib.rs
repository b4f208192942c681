//! Shared helpers for the runnable demos.
#![warn(missing_docs)]

/// Connector selection shared by every demo.
pub mod common;
