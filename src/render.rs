//! Terminal rendering for slotbook types.
//!
//! Extension-trait rendering with owo_colors, kept out of the core crate so
//! the data types stay presentation-free.

use owo_colors::OwoColorize;
use slotbook_core::{TimeSlot, User};

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for TimeSlot {
    fn render(&self) -> String {
        format!("{} to {}", self.start.bold(), self.end.bold())
    }
}

/// Header line above a day listing.
pub fn day_header(username: &str, date: &str) -> String {
    format!("{} {}", date.bold(), format!("({})", username).dimmed())
}

/// One user's slots for a date, numbered for edit/rm/copy targeting.
pub fn render_day(user: &User, date: &str) -> String {
    let slots = user.slots_on(date);

    if slots.is_empty() {
        return format!("   {}", "No slots available for this day.".dimmed());
    }

    slots
        .iter()
        .enumerate()
        .map(|(index, slot)| format!("   {} {}", format!("[{}]", index).dimmed(), slot.render()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Simple pluralization helper.
pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}

// =============================================================================
// Tests
// =============================================================================
