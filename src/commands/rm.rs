use anyhow::Result;
use owo_colors::OwoColorize;
use slotbook_core::{availability, Store};

use crate::render::{day_header, render_day};
use crate::{dates, session};

pub fn run(store: &Store, index: usize, date: Option<&str>) -> Result<()> {
    let user = session::require_login(store)?;
    let date = dates::resolve(date)?;

    let removed = availability::remove_slot(store, &user.username, &date, index)?;

    println!("{}", format!("Deleted {}", removed).green());

    if let Some(updated) = store.find_user(&user.username) {
        println!("{}", day_header(&updated.username, &date));
        println!("{}", render_day(&updated, &date));
    }

    Ok(())
}
