use anyhow::Result;
use owo_colors::OwoColorize;
use slotbook_core::Store;

use crate::render::{day_header, render_day};
use crate::{dates, session};

pub fn run(store: &Store, date: Option<&str>, user: Option<&str>, all: bool) -> Result<()> {
    let current = session::require_login(store)?;
    let date = dates::resolve(date)?;

    if all {
        // Everyone else's availability for the date, one block per user.
        let others: Vec<_> = store
            .list_users()
            .into_iter()
            .filter(|u| u.username != current.username)
            .collect();

        if others.is_empty() {
            println!("{}", "No other users yet".dimmed());
            return Ok(());
        }

        for (i, other) in others.iter().enumerate() {
            if i > 0 {
                println!();
            }
            println!("{}", day_header(&other.username, &date));
            println!("{}", render_day(other, &date));
        }

        return Ok(());
    }

    let target = match user {
        Some(name) => match store.find_user(name) {
            Some(found) => found,
            None => {
                let available: Vec<_> =
                    store.list_users().into_iter().map(|u| u.username).collect();
                anyhow::bail!(
                    "User '{}' not found. Available: {}",
                    name,
                    available.join(", ")
                );
            }
        },
        None => current,
    };

    println!("{}", day_header(&target.username, &date));
    println!("{}", render_day(&target, &date));

    Ok(())
}
