//! Event commands
//!
//! Usage: maavarim event <list|add|clear>

use clap::{Args, Subcommand};
use maavarim_core::rules::validation::parse_event_date;
use maavarim_core::{ExError, RecordStore};

use super::{print_json, CommandResult, CommandStatus};

#[derive(Debug, Args)]
pub struct EventArgs {
    #[command(subcommand)]
    pub command: EventCommand,
}

#[derive(Debug, Subcommand)]
pub enum EventCommand {
    /// List events, most recent first, undated last
    List {
        /// Print rows as JSON
        #[arg(long)]
        json: bool,
    },
    /// Add an event
    Add {
        name: String,
        /// Event date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
    },
    /// Delete every event
    Clear,
}

/// Execute event command
pub fn execute(args: EventArgs, store: &mut dyn RecordStore) -> CommandResult {
    match args.command {
        EventCommand::List { json } => {
            let events = store.get_all_events()?;
            if json {
                print_json(&events)?;
            } else if events.is_empty() {
                println!("No events");
            } else {
                for event in events {
                    let date = event
                        .date
                        .map(|d| d.to_string())
                        .unwrap_or_else(|| "-".to_string());
                    println!("{}\t{}\t{}", event.id, date, event.name);
                }
            }
        }
        EventCommand::Add { name, date } => {
            let date = date
                .as_deref()
                .map(parse_event_date)
                .transpose()
                .map_err(ExError::from)?;
            let id = store.add_event(&name, date)?;
            println!("✓ Added event '{}' (id: {})", name.trim(), id);
        }
        EventCommand::Clear => {
            store.clear_events()?;
            println!("✓ Cleared events");
        }
    }

    Ok(CommandStatus::Success)
}
