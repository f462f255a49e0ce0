//! Time slots and the fixed hour grid they are picked from.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One interval of availability on a given date.
///
/// Start and end are 12-hour clock labels (e.g. `"9:00 AM"`) stored exactly
/// as given. There is no check that start precedes end; inverted and
/// overlapping slots are permitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub start: String,
    pub end: String,
}

impl TimeSlot {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        TimeSlot {
            start: start.into(),
            end: end.into(),
        }
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

/// The label for hour `hour` (0-23) on a 12-hour clock, e.g. `"9:00 AM"`.
pub fn hour_label(hour: u32) -> String {
    let h = match hour % 12 {
        0 => 12,
        h => h,
    };
    let meridiem = if hour % 24 < 12 { "AM" } else { "PM" };
    format!("{}:00 {}", h, meridiem)
}

/// The 24 hour-aligned labels slots are picked from, `"12:00 AM"` through
/// `"11:00 PM"`.
pub fn hour_labels() -> Vec<String> {
    (0..24).map(hour_label).collect()
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hour_label_wraps_twelve_hour_clock() {
        assert_eq!(hour_label(0), "12:00 AM");
        assert_eq!(hour_label(9), "9:00 AM");
        assert_eq!(hour_label(12), "12:00 PM");
        assert_eq!(hour_label(15), "3:00 PM");
        assert_eq!(hour_label(23), "11:00 PM");
    }

    #[test]
    fn test_hour_labels_covers_full_day() {
        let labels = hour_labels();
        assert_eq!(labels.len(), 24);
        assert_eq!(labels.first().map(String::as_str), Some("12:00 AM"));
        assert_eq!(labels.last().map(String::as_str), Some("11:00 PM"));
    }

    #[test]
    fn test_display_joins_start_and_end() {
        let slot = TimeSlot::new("9:00 AM", "10:00 AM");
        assert_eq!(slot.to_string(), "9:00 AM to 10:00 AM");
    }

    #[test]
    fn test_inverted_slot_is_not_rejected() {
        // Slot times are opaque labels; an end before the start is stored as-is.
        let slot = TimeSlot::new("3:00 PM", "9:00 AM");
        assert_eq!(slot.start, "3:00 PM");
        assert_eq!(slot.end, "9:00 AM");
    }
}
