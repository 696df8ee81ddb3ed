//! Employee directory commands
//!
//! Usage: maavarim employee <list|show|search|clear>

use clap::{Args, Subcommand};
use maavarim_core::ops::directory::{display_name, registered_event_names, search_employees};
use maavarim_core::{Employee, ExError, MaavarimError, RecordStore};

use super::{print_json, CommandResult, CommandStatus};

#[derive(Debug, Args)]
pub struct EmployeeArgs {
    #[command(subcommand)]
    pub command: EmployeeCommand,
}

#[derive(Debug, Subcommand)]
pub enum EmployeeCommand {
    /// List employees ordered by last name, then first name
    List {
        /// Print rows as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show one employee and the events they registered for
    Show { id: i64 },
    /// Search by name or email (case-insensitive)
    Search {
        text: String,
        /// Print rows as JSON
        #[arg(long)]
        json: bool,
    },
    /// Delete every employee
    Clear,
}

/// Execute employee command
pub fn execute(args: EmployeeArgs, store: &mut dyn RecordStore) -> CommandResult {
    match args.command {
        EmployeeCommand::List { json } => {
            let employees = store.get_all_employees()?;
            print_employees(&employees.iter().collect::<Vec<_>>(), json)?;
        }
        EmployeeCommand::Show { id } => {
            let employee = store
                .get_employee(id)?
                .ok_or_else(|| ExError::from(MaavarimError::EmployeeNotFound { employee_id: id }))?;
            print_details(&employee);
        }
        EmployeeCommand::Search { text, json } => {
            let employees = store.get_all_employees()?;
            let matches = search_employees(&employees, &text);
            print_employees(&matches, json)?;
        }
        EmployeeCommand::Clear => {
            store.clear_employees()?;
            println!("✓ Cleared employees");
        }
    }

    Ok(CommandStatus::Success)
}

fn print_employees(
    employees: &[&Employee],
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        return print_json(employees);
    }
    if employees.is_empty() {
        println!("No employees");
        return Ok(());
    }
    for employee in employees {
        println!(
            "{}\t{}\t{}",
            employee.id,
            display_name(employee),
            employee.registered_events.as_deref().unwrap_or("")
        );
    }
    Ok(())
}

fn print_details(employee: &Employee) {
    let optional = |value: &Option<String>| value.clone().unwrap_or_else(|| "-".to_string());

    println!("{}", display_name(employee));
    println!("  id:            {}", employee.id);
    println!("  phone:         {}", optional(&employee.phone));
    println!("  residence:     {}", optional(&employee.residence));
    println!("  role:          {}", optional(&employee.role));
    println!("  work location: {}", optional(&employee.work_location));

    let events = registered_event_names(employee);
    if events.is_empty() {
        println!("  events:        none");
    } else {
        println!("  events:");
        for event in events {
            println!("    - {}", event);
        }
    }
}
