use crate::analytics::range::DateRange;
use crate::models::Event;

/// Keep the events whose calendar date falls inside `range`, in their original order.
///
/// An inverted range selects nothing.
pub fn filter_by_range(events: &[Event], range: &DateRange) -> Vec<Event> {
    if range.is_inverted() {
        return Vec::new();
    }

    events
        .iter()
        .filter(|event| range.contains(event.date()))
        .copied()
        .collect()
}
