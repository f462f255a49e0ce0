//! User records and their per-date availability.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::slot::TimeSlot;

/// Per-date availability: `YYYY-MM-DD` date key to that day's slots, in
/// display order. Date keys iterate chronologically (lexicographic order of
/// `YYYY-MM-DD` is date order); within a date, insertion order is preserved.
pub type Availability = BTreeMap<String, Vec<TimeSlot>>;

/// A slotbook user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique, case-sensitive identifier, chosen at first login and never
    /// changed afterwards.
    pub username: String,

    /// IANA timezone name. Advisory only: shown on the profile, never used
    /// to convert slot times.
    pub timezone: String,

    /// Records persisted before this field existed deserialize with an
    /// empty map.
    #[serde(default)]
    pub availability: Availability,
}

impl User {
    pub fn new(username: impl Into<String>, timezone: impl Into<String>) -> Self {
        User {
            username: username.into(),
            timezone: timezone.into(),
            availability: Availability::new(),
        }
    }

    /// The slots for one date, empty if the date has no entry.
    ///
    /// A date key holding an empty sequence and an absent key are
    /// equivalent; both read as "no slots".
    pub fn slots_on(&self, date: &str) -> &[TimeSlot] {
        self.availability
            .get(date)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Total slot count across all dates.
    pub fn slot_count(&self) -> usize {
        self.availability.values().map(Vec::len).sum()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_availability_field_deserializes_empty() {
        // Records written before the availability field existed.
        let json = r#"{"username": "alice", "timezone": "UTC"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert!(user.availability.is_empty());
    }

    #[test]
    fn test_slots_on_absent_date_is_empty() {
        let user = User::new("alice", "UTC");
        assert!(user.slots_on("2024-06-01").is_empty());
    }

    #[test]
    fn test_empty_entry_reads_like_absent_entry() {
        let mut user = User::new("alice", "UTC");
        user.availability.insert("2024-06-01".to_string(), vec![]);
        assert_eq!(user.slots_on("2024-06-01"), user.slots_on("2024-06-02"));
    }

    #[test]
    fn test_date_keys_iterate_chronologically() {
        let mut user = User::new("alice", "UTC");
        let slot = vec![TimeSlot::new("9:00 AM", "10:00 AM")];
        user.availability.insert("2024-06-03".to_string(), slot.clone());
        user.availability.insert("2024-06-01".to_string(), slot.clone());
        user.availability.insert("2023-12-31".to_string(), slot);

        let keys: Vec<_> = user.availability.keys().cloned().collect();
        assert_eq!(keys, vec!["2023-12-31", "2024-06-01", "2024-06-03"]);
    }

    #[test]
    fn test_slot_count_sums_all_dates() {
        let mut user = User::new("alice", "UTC");
        user.availability.insert(
            "2024-06-01".to_string(),
            vec![
                TimeSlot::new("9:00 AM", "10:00 AM"),
                TimeSlot::new("1:00 PM", "2:00 PM"),
            ],
        );
        user.availability.insert(
            "2024-06-02".to_string(),
            vec![TimeSlot::new("9:00 AM", "10:00 AM")],
        );
        assert_eq!(user.slot_count(), 3);
    }
}
