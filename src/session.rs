//! Session guard for protected commands.

use anyhow::Result;
use slotbook_core::{Store, User};

/// Resolve the logged-in user or fail with the login hint.
///
/// Every protected command calls this first. An absent pointer, or one
/// naming a user that no longer exists, routes to `slotbook login` before
/// anything touches the store.
pub fn require_login(store: &Store) -> Result<User> {
    match store.current_user() {
        Some(user) => Ok(user),
        None => anyhow::bail!(
            "Not logged in.\n\n\
            Pick a username with:\n  \
            slotbook login <username>"
        ),
    }
}
