//! Date argument parsing.

use anyhow::Result;
use chrono::{Duration, Local, NaiveDate};

/// Format a date as the storage date key (`YYYY-MM-DD`).
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Resolve an optional date argument to a storage key, defaulting to today.
pub fn resolve(arg: Option<&str>) -> Result<String> {
    match arg {
        Some(input) => Ok(date_key(parse_date(input)?)),
        None => Ok(date_key(Local::now().date_naive())),
    }
}

/// Parse a date argument: `YYYY-MM-DD`, `today`, `tomorrow`, or `+N` for N
/// days from today.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    let today = Local::now().date_naive();

    match input.trim().to_lowercase().as_str() {
        "today" => return Ok(today),
        "tomorrow" => return Ok(today + Duration::days(1)),
        _ => {}
    }

    if let Some(offset) = input.trim().strip_prefix('+') {
        let days: i64 = offset
            .parse()
            .map_err(|_| anyhow::anyhow!("Could not parse day offset: \"{}\"", input))?;
        return Ok(today + Duration::days(days));
    }

    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|_| anyhow::anyhow!("Could not parse date: \"{}\" (expected YYYY-MM-DD)", input))
}

// =============================================================================
// Tests
// =============================================================================
