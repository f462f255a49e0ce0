//! The read-modify-write contract for editing a user's slots.
//!
//! Every editing surface goes through these four operations so the semantics
//! stay identical everywhere: read the date's current sequence, reshape it in
//! memory, write the full sequence back through the store. Positions are
//! plain sequence indexes captured at call time; nothing keeps them stable if
//! the sequence changes shape in between (single-user, single-process
//! assumption).

use crate::error::{SlotBookError, SlotBookResult};
use crate::slot::TimeSlot;
use crate::store::Store;

/// Append one slot to the end of a date's sequence.
pub fn add_slot(store: &Store, username: &str, date: &str, slot: TimeSlot) -> SlotBookResult<()> {
    let mut slots = current_slots(store, username, date);
    slots.push(slot);
    store.update_availability(username, date, slots)
}

/// Replace the slot at `index` in a date's sequence.
///
/// The index targets whatever element occupies that position now, not the
/// element it pointed at when it was captured. An out-of-range index is
/// invalid caller input and is reported as an error.
pub fn edit_slot(
    store: &Store,
    username: &str,
    date: &str,
    index: usize,
    slot: TimeSlot,
) -> SlotBookResult<()> {
    let mut slots = current_slots(store, username, date);

    let Some(target) = slots.get_mut(index) else {
        return Err(SlotBookError::SlotOutOfRange {
            date: date.to_string(),
            index,
        });
    };
    *target = slot;

    store.update_availability(username, date, slots)
}

/// Remove the slot at `index` from a date's sequence.
///
/// Same positional targeting as [`edit_slot`]. Returns the removed slot.
pub fn remove_slot(
    store: &Store,
    username: &str,
    date: &str,
    index: usize,
) -> SlotBookResult<TimeSlot> {
    let mut slots = current_slots(store, username, date);

    if index >= slots.len() {
        return Err(SlotBookError::SlotOutOfRange {
            date: date.to_string(),
            index,
        });
    }
    let removed = slots.remove(index);

    store.update_availability(username, date, slots)?;
    Ok(removed)
}

/// Copy one slot onto each of `dates`, as independent single-date appends.
///
/// Each destination date is read and written on its own; this is N updates,
/// not one batched one. Copying a slot twice onto the same date produces two
/// identical entries, duplicates are not detected.
pub fn copy_slot(
    store: &Store,
    username: &str,
    slot: &TimeSlot,
    dates: &[String],
) -> SlotBookResult<()> {
    for date in dates {
        add_slot(store, username, date, slot.clone())?;
    }
    Ok(())
}

fn current_slots(store: &Store, username: &str, date: &str) -> Vec<TimeSlot> {
    store
        .find_user(username)
        .map(|u| u.slots_on(date).to_vec())
        .unwrap_or_default()
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::User;
    use tempfile::TempDir;

    const DATE: &str = "2024-06-01";

    fn store_with_alice() -> (TempDir, Store) {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::at(dir.path());
        store.save_user(&User::new("alice", "UTC")).unwrap();
        (dir, store)
    }

    #[test]
    fn test_add_appends_in_order() {
        let (_dir, store) = store_with_alice();

        store
            .update_availability("alice", DATE, vec![TimeSlot::new("9:00 AM", "10:00 AM")])
            .unwrap();
        add_slot(&store, "alice", DATE, TimeSlot::new("2:00 PM", "3:00 PM")).unwrap();

        let stored = store.find_user("alice").unwrap();
        assert_eq!(
            stored.slots_on(DATE),
            &[
                TimeSlot::new("9:00 AM", "10:00 AM"),
                TimeSlot::new("2:00 PM", "3:00 PM"),
            ]
        );
    }

    #[test]
    fn test_add_to_unknown_user_changes_nothing() {
        let (_dir, store) = store_with_alice();

        add_slot(&store, "ghost", DATE, TimeSlot::new("9:00 AM", "10:00 AM")).unwrap();

        assert_eq!(store.list_users().len(), 1);
        assert!(store.find_user("ghost").is_none());
    }

    #[test]
    fn test_edit_replaces_element_at_index() {
        let (_dir, store) = store_with_alice();
        store
            .update_availability(
                "alice",
                DATE,
                vec![
                    TimeSlot::new("9:00 AM", "10:00 AM"),
                    TimeSlot::new("2:00 PM", "3:00 PM"),
                ],
            )
            .unwrap();

        edit_slot(&store, "alice", DATE, 1, TimeSlot::new("4:00 PM", "5:00 PM")).unwrap();

        let stored = store.find_user("alice").unwrap();
        assert_eq!(
            stored.slots_on(DATE),
            &[
                TimeSlot::new("9:00 AM", "10:00 AM"),
                TimeSlot::new("4:00 PM", "5:00 PM"),
            ]
        );
    }

    #[test]
    fn test_edit_out_of_range_is_an_error() {
        let (_dir, store) = store_with_alice();

        let err = edit_slot(&store, "alice", DATE, 0, TimeSlot::new("9:00 AM", "10:00 AM"))
            .unwrap_err();
        assert!(matches!(err, SlotBookError::SlotOutOfRange { index: 0, .. }));
    }

    #[test]
    fn test_remove_at_zero_keeps_second_element() {
        let (_dir, store) = store_with_alice();
        store
            .update_availability(
                "alice",
                DATE,
                vec![
                    TimeSlot::new("9:00 AM", "10:00 AM"),
                    TimeSlot::new("2:00 PM", "3:00 PM"),
                ],
            )
            .unwrap();

        let removed = remove_slot(&store, "alice", DATE, 0).unwrap();
        assert_eq!(removed, TimeSlot::new("9:00 AM", "10:00 AM"));

        let stored = store.find_user("alice").unwrap();
        assert_eq!(stored.slots_on(DATE), &[TimeSlot::new("2:00 PM", "3:00 PM")]);
    }

    #[test]
    fn test_remove_out_of_range_is_an_error() {
        let (_dir, store) = store_with_alice();

        let err = remove_slot(&store, "alice", DATE, 3).unwrap_err();
        assert!(matches!(err, SlotBookError::SlotOutOfRange { index: 3, .. }));
    }

    #[test]
    fn test_copy_grows_each_destination_by_one() {
        let (_dir, store) = store_with_alice();
        let source = TimeSlot::new("9:00 AM", "10:00 AM");
        store
            .update_availability("alice", DATE, vec![source.clone()])
            .unwrap();

        let destinations = vec![
            "2024-06-02".to_string(),
            "2024-06-03".to_string(),
            "2024-06-04".to_string(),
        ];
        copy_slot(&store, "alice", &source, &destinations).unwrap();

        let stored = store.find_user("alice").unwrap();
        for date in &destinations {
            assert_eq!(stored.slots_on(date), &[source.clone()]);
        }
        // The source date's own sequence is unchanged.
        assert_eq!(stored.slots_on(DATE), &[source]);
    }

    #[test]
    fn test_copy_twice_duplicates_the_entry() {
        let (_dir, store) = store_with_alice();
        let source = TimeSlot::new("9:00 AM", "10:00 AM");
        let destination = vec!["2024-06-02".to_string()];

        copy_slot(&store, "alice", &source, &destination).unwrap();
        copy_slot(&store, "alice", &source, &destination).unwrap();

        let stored = store.find_user("alice").unwrap();
        assert_eq!(stored.slots_on("2024-06-02"), &[source.clone(), source]);
    }

    #[test]
    fn test_copy_onto_destination_with_existing_slots_appends() {
        let (_dir, store) = store_with_alice();
        store
            .update_availability(
                "alice",
                "2024-06-02",
                vec![TimeSlot::new("8:00 AM", "9:00 AM")],
            )
            .unwrap();

        let source = TimeSlot::new("9:00 AM", "10:00 AM");
        copy_slot(&store, "alice", &source, &["2024-06-02".to_string()]).unwrap();

        let stored = store.find_user("alice").unwrap();
        assert_eq!(
            stored.slots_on("2024-06-02"),
            &[TimeSlot::new("8:00 AM", "9:00 AM"), source]
        );
    }
}
