//! Interactive prompt helpers.

use anyhow::Result;
use chrono::{Duration, NaiveDate};
use dialoguer::{MultiSelect, Select};
use slotbook_core::slot::hour_labels;

use crate::dates;

/// Pick an hour label from the fixed 24-value grid.
///
/// `default` preselects a label (falling back to 9:00 AM when it is not one
/// of the grid values).
pub fn pick_hour(prompt: &str, default: Option<&str>) -> Result<String> {
    let labels = hour_labels();

    let default_index = default
        .and_then(|label| labels.iter().position(|l| l == label))
        .unwrap_or(9);

    let picked = Select::new()
        .with_prompt(prompt)
        .items(&labels)
        .default(default_index)
        .interact()?;

    Ok(labels[picked].clone())
}

/// Pick destination days for a copy: the seven days after `after`.
///
/// Returns the chosen dates as storage keys, possibly none.
pub fn pick_days(after: NaiveDate) -> Result<Vec<String>> {
    let days: Vec<NaiveDate> = (1..=7).map(|i| after + Duration::days(i)).collect();
    let labels: Vec<String> = days
        .iter()
        .map(|d| d.format("%B %d, %Y").to_string())
        .collect();

    let picked = MultiSelect::new()
        .with_prompt("  Copy to which days?")
        .items(&labels)
        .interact()?;

    Ok(picked.into_iter().map(|i| dates::date_key(days[i])).collect())
}
