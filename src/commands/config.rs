use anyhow::Result;
use owo_colors::OwoColorize;
use slotbook_core::config::SlotbookConfig;

pub fn run() -> Result<()> {
    let config_path = SlotbookConfig::config_path()?;
    let config = SlotbookConfig::load()?;

    println!("{}", "Paths".bold());
    println!("  Config:  {}", config_path.display());
    println!("  Data:    {}", config.data_path().display());

    Ok(())
}
