use rainbow_core::RainbowError;

/// Collapse the failures of an exhausted chain into `AllProvidersFailed`.
///
/// Attempt order is preserved. A connector that itself wraps a chain may
/// report an aggregate; its members are spliced in place.
pub fn collapse_errors(errors: Vec<RainbowError>) -> RainbowError {
    RainbowError::AllProvidersFailed(errors.into_iter().flat_map(RainbowError::flatten).collect())
}
