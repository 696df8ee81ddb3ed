pub mod employee;
pub mod event;
pub mod import;
pub mod service;
pub mod stats;

use maavarim_core::{ExError, ExErrorKind};
use serde::Serialize;

/// How a command finished when it did not fail outright
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandStatus {
    Success,
    /// The store declined the change; a warning was printed
    Rejected,
}

pub type CommandResult = Result<CommandStatus, Box<dyn std::error::Error>>;

/// Print rows as a pretty JSON array of objects
pub(crate) fn print_json<T: Serialize>(rows: &[T]) -> Result<(), Box<dyn std::error::Error>> {
    let json = serde_json::to_string_pretty(rows).map_err(|e| {
        ExError::new(ExErrorKind::Serialization)
            .with_op("print_json")
            .with_message(e.to_string())
    })?;
    println!("{}", json);
    Ok(())
}
