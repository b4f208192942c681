use chrono::{DateTime, Utc};

use crate::types::ReferenceEvent;

/// Keep the events whose instant lies within `[first, last]`, both inclusive,
/// preserving their input order.
#[must_use]
pub fn filter_events(
    events: &[ReferenceEvent],
    first: DateTime<Utc>,
    last: DateTime<Utc>,
) -> Vec<ReferenceEvent> {
    events
        .iter()
        .filter(|e| e.at >= first && e.at <= last)
        .cloned()
        .collect()
}
