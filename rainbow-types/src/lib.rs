//! Rainbow-specific error, configuration, and legend types shared by every crate.
#![warn(missing_docs)]

mod config;
mod connector;
mod error;
mod legend;

pub use config::{
    BAND_MULTIPLIERS, BOUNDARY_COUNT, HALVING_TIMESTAMPS, MIN_REGRESSION_POINTS, RainbowConfig,
    ReferenceEvent, halvings,
};
pub use connector::ProviderKey;
pub use error::RainbowError;
pub use legend::Band;
