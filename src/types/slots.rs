//! The eight fixed daily result-publishing windows.

/// Canonical slot labels in chronological order. These are wire values:
/// they appear verbatim in `results.time_slot` and in API payloads.
pub const TIME_SLOTS: [&str; 8] = [
    "10:30 AM", "12:00 PM", "01:30 PM", "03:00 PM", "04:30 PM", "06:00 PM", "07:30 PM", "09:00 PM",
];

pub fn is_valid(slot: &str) -> bool {
    TIME_SLOTS.contains(&slot)
}

/// Chronological position of a slot. Unknown labels sort last so rows with
/// a stale slot value still come back instead of disappearing.
pub fn rank(slot: &str) -> usize {
    TIME_SLOTS
        .iter()
        .position(|s| *s == slot)
        .unwrap_or(TIME_SLOTS.len())
}
