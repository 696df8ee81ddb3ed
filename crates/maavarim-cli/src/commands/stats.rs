//! Stats command

use maavarim_core::ops::table_counts;
use maavarim_core::RecordStore;

use super::{CommandResult, CommandStatus};

/// Print the row count of every table
pub fn execute(store: &dyn RecordStore) -> CommandResult {
    let counts = table_counts(store)?;
    println!("services:  {}", counts.services);
    println!("employees: {}", counts.employees);
    println!("events:    {}", counts.events);
    Ok(CommandStatus::Success)
}
