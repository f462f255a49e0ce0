use anyhow::Result;
use owo_colors::OwoColorize;
use slotbook_core::Store;

use crate::render::pluralize;

pub fn run(store: &Store) -> Result<()> {
    let users = store.list_users();

    if users.is_empty() {
        println!("{}", "No users yet".dimmed());
        return Ok(());
    }

    let current = store.current_user().map(|u| u.username);

    for user in users {
        let marker = if current.as_deref() == Some(user.username.as_str()) {
            "*"
        } else {
            " "
        };
        let count = user.slot_count();

        println!(
            "{} {} {} {}",
            marker,
            user.username.bold(),
            format!("({})", user.timezone).dimmed(),
            format!("{} {}", count, pluralize("slot", count)).dimmed()
        );
    }

    Ok(())
}
