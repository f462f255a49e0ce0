use anyhow::Result;
use owo_colors::OwoColorize;
use slotbook_core::{availability, Store, TimeSlot};

use crate::render::{day_header, render_day};
use crate::{dates, prompt, session};

pub fn run(
    store: &Store,
    index: usize,
    date: Option<&str>,
    start: Option<String>,
    end: Option<String>,
) -> Result<()> {
    let user = session::require_login(store)?;
    let date = dates::resolve(date)?;

    let Some(existing) = user.slots_on(&date).get(index).cloned() else {
        anyhow::bail!("No slot at index {} on {}", index, date);
    };

    let interactive = start.is_none() || end.is_none();

    let start = match start {
        Some(s) => s,
        None => prompt::pick_hour("  Start time", Some(&existing.start))?,
    };
    let end = match end {
        Some(e) => e,
        None => prompt::pick_hour("  End time", Some(&existing.end))?,
    };

    availability::edit_slot(store, &user.username, &date, index, TimeSlot::new(start, end))?;

    if interactive {
        println!();
    }
    println!("{}", "Slot updated".green());

    if let Some(updated) = store.find_user(&user.username) {
        println!("{}", day_header(&updated.username, &date));
        println!("{}", render_day(&updated, &date));
    }

    Ok(())
}
