//! Flattening availability into document rows.
//!
//! The export surface is read-only: it takes a `User` value and produces
//! (date, start, end) rows, plus a CSV rendering of them. It never touches
//! the store.

use crate::slot::TimeSlot;
use crate::user::User;

/// One row of the export table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRow {
    pub date: String,
    pub start: String,
    pub end: String,
}

/// Flatten a user's full availability into rows.
///
/// Dates come out chronologically; within a date, slots keep their display
/// order. Dates whose sequence is empty contribute no rows.
pub fn flatten(user: &User) -> Vec<ExportRow> {
    let mut rows = Vec::new();

    for (date, slots) in &user.availability {
        for TimeSlot { start, end } in slots {
            rows.push(ExportRow {
                date: date.clone(),
                start: start.clone(),
                end: end.clone(),
            });
        }
    }

    rows
}

/// Render rows as a CSV document with a header line.
pub fn to_csv(rows: &[ExportRow]) -> String {
    let mut out = String::from("Date,Start Time,End Time\n");

    for row in rows {
        out.push_str(&csv_field(&row.date));
        out.push(',');
        out.push_str(&csv_field(&row.start));
        out.push(',');
        out.push_str(&csv_field(&row.end));
        out.push('\n');
    }

    out
}

/// Quote a field if it contains a separator, quote, or newline.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

// =============================================================================
// Tests
// =============================================================================
