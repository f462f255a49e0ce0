use anyhow::Result;
use dialoguer::Select;
use owo_colors::OwoColorize;
use slotbook_core::{Store, User};

use crate::session;

const TIMEZONES: &[&str] = &[
    "UTC",
    "America/New_York",
    "America/Chicago",
    "America/Denver",
    "America/Los_Angeles",
    "Europe/London",
    "Europe/Paris",
    "Asia/Tokyo",
    "Asia/Dubai",
    "Australia/Sydney",
    "Pacific/Auckland",
];

pub fn run(store: &Store, timezone: Option<String>, edit: bool) -> Result<()> {
    let user = session::require_login(store)?;

    let new_timezone = if let Some(tz) = timezone {
        Some(tz)
    } else if edit {
        Some(pick_timezone(&user.timezone)?)
    } else {
        None
    };

    match new_timezone {
        Some(tz) => {
            // Only the timezone changes; every other field passes through.
            let updated = User { timezone: tz, ..user };
            store.save_user(&updated)?;
            println!("{}", format!("Timezone set to {}", updated.timezone).green());
        }
        None => {
            println!("Username:  {}", user.username.bold());
            println!("Timezone:  {}", user.timezone);
        }
    }

    Ok(())
}

fn pick_timezone(current: &str) -> Result<String> {
    let default = TIMEZONES.iter().position(|t| *t == current).unwrap_or(0);

    let picked = Select::new()
        .with_prompt("  Timezone")
        .items(TIMEZONES)
        .default(default)
        .interact()?;

    Ok(TIMEZONES[picked].to_string())
}
