mod commands;
mod dates;
mod prompt;
mod render;
mod session;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use slotbook_core::Store;

#[derive(Parser)]
#[command(name = "slotbook")]
#[command(about = "Record your time-slot availability and see everyone else's")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in, creating your user on first use
    Login {
        username: String,
    },
    /// Log out of the current session
    Logout,
    /// Show who is logged in
    Whoami,
    /// List all known users
    Users,
    /// Show availability for a date
    Slots {
        /// Date to show (YYYY-MM-DD, "today", "tomorrow", or "+N")
        #[arg(short, long)]
        date: Option<String>,

        /// Show this user's availability instead of your own
        #[arg(short, long)]
        user: Option<String>,

        /// Show every other user's availability
        #[arg(long)]
        all: bool,
    },
    /// Add an availability slot
    Add {
        /// Date to add to (defaults to today)
        #[arg(short, long)]
        date: Option<String>,

        /// Start time label, e.g. "9:00 AM"
        #[arg(short, long)]
        start: Option<String>,

        /// End time label, e.g. "10:00 AM"
        #[arg(short, long)]
        end: Option<String>,
    },
    /// Edit the slot at a position
    Edit {
        /// Slot position as shown by `slots`
        index: usize,

        #[arg(short, long)]
        date: Option<String>,

        #[arg(short, long)]
        start: Option<String>,

        #[arg(short, long)]
        end: Option<String>,
    },
    /// Delete the slot at a position
    Rm {
        /// Slot position as shown by `slots`
        index: usize,

        #[arg(short, long)]
        date: Option<String>,
    },
    /// Copy a slot onto other days
    Copy {
        /// Slot position as shown by `slots`
        index: usize,

        /// Date the slot is on (defaults to today)
        #[arg(short, long)]
        date: Option<String>,

        /// Destination dates; prompts over the next seven days if omitted
        #[arg(long, num_args = 1..)]
        to: Vec<String>,
    },
    /// Show or change your profile
    Profile {
        /// Set the timezone directly
        #[arg(long)]
        timezone: Option<String>,

        /// Pick the timezone interactively
        #[arg(long)]
        edit: bool,
    },
    /// Export all your slots to a CSV document
    Export {
        /// Output path (defaults to slots.csv)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Show config and data paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let store = Store::open()?;

    match cli.command {
        Commands::Login { username } => commands::login::run(&store, &username),
        Commands::Logout => commands::logout::run(&store),
        Commands::Whoami => commands::whoami::run(&store),
        Commands::Users => commands::users::run(&store),
        Commands::Slots { date, user, all } => {
            commands::slots::run(&store, date.as_deref(), user.as_deref(), all)
        }
        Commands::Add { date, start, end } => {
            commands::add::run(&store, date.as_deref(), start, end)
        }
        Commands::Edit {
            index,
            date,
            start,
            end,
        } => commands::edit::run(&store, index, date.as_deref(), start, end),
        Commands::Rm { index, date } => commands::rm::run(&store, index, date.as_deref()),
        Commands::Copy { index, date, to } => {
            commands::copy::run(&store, index, date.as_deref(), to)
        }
        Commands::Profile { timezone, edit } => commands::profile::run(&store, timezone, edit),
        Commands::Export { out } => commands::export::run(&store, out),
        Commands::Config => commands::config::run(),
    }
}
