use anyhow::Result;
use owo_colors::OwoColorize;
use slotbook_core::Store;

pub fn run(store: &Store) -> Result<()> {
    match store.current_user() {
        Some(user) => {
            println!(
                "{} {}",
                user.username.bold(),
                format!("({})", user.timezone).dimmed()
            );
        }
        None => println!("{}", "Not logged in".dimmed()),
    }

    Ok(())
}
