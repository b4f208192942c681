/// Sequential provider fallback.
pub mod acquire;
/// Acquisition followed by the band pipeline.
pub mod prepare;
/// Shared error-collapsing helpers.
pub mod util;
