//! Whole-collection user storage.
//!
//! The full user collection lives in a single `users.json` document, and the
//! logged-in username in a `current_user` pointer file next to it. Every
//! mutation rewrites the whole collection; if two processes interleave their
//! read-modify-write cycles, the later write clobbers the earlier one at
//! collection granularity. That is the accepted model for a single-user,
//! single-process tool and is covered by a test below rather than hidden
//! behind locking.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::SlotbookConfig;
use crate::error::{SlotBookError, SlotBookResult};
use crate::slot::TimeSlot;
use crate::user::User;

const USERS_FILE: &str = "users.json";
const CURRENT_USER_FILE: &str = "current_user";

/// Handle to a slotbook data directory.
pub struct Store {
    dir: PathBuf,
}

impl Store {
    /// Open the store at the configured data directory.
    pub fn open() -> SlotBookResult<Self> {
        let config = SlotbookConfig::load()?;
        Ok(Store::at(config.data_path()))
    }

    /// Open a store rooted at an explicit directory.
    pub fn at(dir: impl Into<PathBuf>) -> Self {
        Store { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn users_path(&self) -> PathBuf {
        self.dir.join(USERS_FILE)
    }

    fn current_user_path(&self) -> PathBuf {
        self.dir.join(CURRENT_USER_FILE)
    }

    /// All known users, in stored order.
    ///
    /// Absent or unparseable data reads as an empty collection; this never
    /// surfaces an error to the caller.
    pub fn list_users(&self) -> Vec<User> {
        let Ok(content) = fs::read_to_string(self.users_path()) else {
            return Vec::new();
        };

        serde_json::from_str(&content).unwrap_or_default()
    }

    /// Look up one user by exact, case-sensitive username.
    pub fn find_user(&self, username: &str) -> Option<User> {
        self.list_users()
            .into_iter()
            .find(|u| u.username == username)
    }

    /// Insert or replace a user.
    ///
    /// An existing record with the same username is replaced in place,
    /// keeping its position in the collection; otherwise the user is
    /// appended. The stored record is replaced whole, not merged field by
    /// field.
    pub fn save_user(&self, user: &User) -> SlotBookResult<()> {
        let mut users = self.list_users();

        match users.iter_mut().find(|u| u.username == user.username) {
            Some(existing) => *existing = user.clone(),
            None => users.push(user.clone()),
        }

        self.write_users(&users)
    }

    /// Record `username` as the current user.
    ///
    /// The name is not checked against the collection; callers have just
    /// created or confirmed the user themselves.
    pub fn set_current_user(&self, username: &str) -> SlotBookResult<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.current_user_path(), username)?;
        Ok(())
    }

    /// Resolve the current-user pointer against the collection.
    ///
    /// Returns `None` when no pointer is recorded, or when the recorded
    /// username no longer matches any stored user (a stale pointer after the
    /// data was edited externally).
    pub fn current_user(&self) -> Option<User> {
        let raw = fs::read_to_string(self.current_user_path()).ok()?;
        let username = raw.trim_end_matches('\n');

        if username.is_empty() {
            return None;
        }

        self.find_user(username)
    }

    /// Clear the current-user pointer.
    ///
    /// Clearing an already-absent pointer is not an error.
    pub fn logout(&self) -> SlotBookResult<()> {
        match fs::remove_file(self.current_user_path()) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Replace the slot sequence for one date of one user.
    ///
    /// The date's sequence is replaced wholesale with `slots`, not merged or
    /// appended. An unknown username is a silent no-op: the collection is
    /// left untouched and no error is raised.
    pub fn update_availability(
        &self,
        username: &str,
        date: &str,
        slots: Vec<TimeSlot>,
    ) -> SlotBookResult<()> {
        let mut users = self.list_users();

        let Some(user) = users.iter_mut().find(|u| u.username == username) else {
            return Ok(());
        };

        user.availability.insert(date.to_string(), slots);
        self.write_users(&users)
    }

    fn write_users(&self, users: &[User]) -> SlotBookResult<()> {
        fs::create_dir_all(&self.dir)?;

        let content = serde_json::to_string_pretty(users)
            .map_err(|e| SlotBookError::Serialization(e.to_string()))?;

        let path = self.users_path();
        let temp = self.dir.join(format!("{USERS_FILE}.tmp"));

        fs::write(&temp, content)?;
        fs::rename(&temp, &path)?;
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================
