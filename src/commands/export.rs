use std::path::PathBuf;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use slotbook_core::{export, Store};

use crate::render::pluralize;
use crate::session;

pub fn run(store: &Store, out: Option<PathBuf>) -> Result<()> {
    let user = session::require_login(store)?;

    let rows = export::flatten(&user);
    let path = out.unwrap_or_else(|| PathBuf::from("slots.csv"));

    std::fs::write(&path, export::to_csv(&rows))
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!(
        "{}",
        format!(
            "Exported {} {} to {}",
            rows.len(),
            pluralize("slot", rows.len()),
            path.display()
        )
        .green()
    );

    Ok(())
}
