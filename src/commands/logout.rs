use anyhow::Result;
use owo_colors::OwoColorize;
use slotbook_core::Store;

pub fn run(store: &Store) -> Result<()> {
    store.logout()?;
    println!("{}", "Logged out".green());
    Ok(())
}
