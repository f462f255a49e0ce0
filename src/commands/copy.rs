use anyhow::Result;
use owo_colors::OwoColorize;
use slotbook_core::{availability, Store};

use crate::render::pluralize;
use crate::{dates, prompt, session};

pub fn run(store: &Store, index: usize, date: Option<&str>, to: Vec<String>) -> Result<()> {
    let user = session::require_login(store)?;
    let source_date = dates::resolve(date)?;

    let Some(slot) = user.slots_on(&source_date).get(index).cloned() else {
        anyhow::bail!("No slot at index {} on {}", index, source_date);
    };

    let destinations: Vec<String> = if to.is_empty() {
        prompt::pick_days(dates::parse_date(&source_date)?)?
    } else {
        to.iter()
            .map(|d| dates::parse_date(d).map(dates::date_key))
            .collect::<Result<_>>()?
    };

    if destinations.is_empty() {
        println!("{}", "No days selected".dimmed());
        return Ok(());
    }

    availability::copy_slot(store, &user.username, &slot, &destinations)?;

    let count = destinations.len();
    println!(
        "{}",
        format!("Copied {} to {} {}", slot, count, pluralize("day", count)).green()
    );

    Ok(())
}
