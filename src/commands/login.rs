use anyhow::Result;
use owo_colors::OwoColorize;
use slotbook_core::{Store, User};

pub fn run(store: &Store, username: &str) -> Result<()> {
    let username = username.trim();

    if username.is_empty() {
        anyhow::bail!("Username is required");
    }

    let known = store.find_user(username).is_some();

    // First login creates the record; later logins never touch it.
    if !known {
        let timezone = iana_time_zone::get_timezone().unwrap_or_else(|_| "UTC".to_string());
        store.save_user(&User::new(username, timezone))?;
    }

    store.set_current_user(username)?;

    if known {
        println!("{}", format!("Welcome back, {}", username).green());
    } else {
        println!("{}", format!("Logged in as {}", username).green());
    }

    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use slotbook_core::TimeSlot;
    use tempfile::TempDir;

    fn temp_store() -> (TempDir, Store) {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::at(dir.path());
        (dir, store)
    }

    #[test]
    fn test_first_login_creates_user_and_logs_in() {
        let (_dir, store) = temp_store();

        run(&store, "alice").unwrap();

        let users = store.list_users();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].username, "alice");
        assert!(users[0].availability.is_empty());
        assert_eq!(store.current_user().unwrap().username, "alice");
    }

    #[test]
    fn test_repeat_login_never_touches_the_record() {
        let (_dir, store) = temp_store();

        let mut alice = User::new("alice", "Europe/Paris");
        alice.availability.insert(
            "2024-06-01".to_string(),
            vec![TimeSlot::new("9:00 AM", "10:00 AM")],
        );
        store.save_user(&alice).unwrap();

        run(&store, "alice").unwrap();

        let stored = store.find_user("alice").unwrap();
        assert_eq!(stored.timezone, "Europe/Paris");
        assert_eq!(stored.slots_on("2024-06-01").len(), 1);
        assert_eq!(store.current_user().unwrap().username, "alice");
    }

    #[test]
    fn test_blank_username_is_rejected() {
        let (_dir, store) = temp_store();

        assert!(run(&store, "   ").is_err());
        assert!(store.list_users().is_empty());
        assert!(store.current_user().is_none());
    }

    #[test]
    fn test_username_is_case_sensitive() {
        let (_dir, store) = temp_store();

        run(&store, "alice").unwrap();
        run(&store, "Alice").unwrap();

        assert_eq!(store.list_users().len(), 2);
        assert_eq!(store.current_user().unwrap().username, "Alice");
    }
}
