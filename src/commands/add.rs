use anyhow::Result;
use owo_colors::OwoColorize;
use slotbook_core::{availability, Store, TimeSlot};

use crate::render::{day_header, render_day};
use crate::{dates, prompt, session};

pub fn run(
    store: &Store,
    date: Option<&str>,
    start: Option<String>,
    end: Option<String>,
) -> Result<()> {
    let user = session::require_login(store)?;
    let date = dates::resolve(date)?;

    let interactive = start.is_none() || end.is_none();

    let start = match start {
        Some(s) => s,
        None => prompt::pick_hour("  Start time", Some("9:00 AM"))?,
    };
    let end = match end {
        Some(e) => e,
        None => prompt::pick_hour("  End time", Some("10:00 AM"))?,
    };

    availability::add_slot(store, &user.username, &date, TimeSlot::new(start, end))?;

    if interactive {
        println!();
    }
    println!("{}", "Slot added".green());

    // Re-read so the listing reflects the write.
    if let Some(updated) = store.find_user(&user.username) {
        println!("{}", day_header(&updated.username, &date));
        println!("{}", render_day(&updated, &date));
    }

    Ok(())
}
