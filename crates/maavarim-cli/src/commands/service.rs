//! Service catalog commands
//!
//! Usage: maavarim service <list|domains|add|update|delete|clear>

use clap::{Args, Subcommand};
use maavarim_core::RecordStore;

use super::{print_json, CommandResult, CommandStatus};

#[derive(Debug, Args)]
pub struct ServiceArgs {
    #[command(subcommand)]
    pub command: ServiceCommand,
}

#[derive(Debug, Subcommand)]
pub enum ServiceCommand {
    /// List services ordered by domain, then name
    List {
        /// Print rows as JSON
        #[arg(long)]
        json: bool,
    },
    /// List distinct domains
    Domains,
    /// Add a service
    Add { name: String, domain: String },
    /// Overwrite a service's name and domain
    Update {
        id: i64,
        name: String,
        domain: String,
    },
    /// Delete services by id
    Delete {
        #[arg(required = true)]
        ids: Vec<i64>,
    },
    /// Delete every service
    Clear,
}

/// Execute service command
pub fn execute(args: ServiceArgs, store: &mut dyn RecordStore) -> CommandResult {
    match args.command {
        ServiceCommand::List { json } => {
            let services = store.get_all_services()?;
            if json {
                print_json(&services)?;
            } else if services.is_empty() {
                println!("No services");
            } else {
                for service in services {
                    println!("{}\t{}\t{}", service.id, service.domain, service.name);
                }
            }
        }
        ServiceCommand::Domains => {
            for domain in store.get_domains()? {
                println!("{}", domain);
            }
        }
        ServiceCommand::Add { name, domain } => {
            if !store.add_service(&name, &domain)? {
                eprintln!("Warning: a service named '{}' already exists", name.trim());
                return Ok(CommandStatus::Rejected);
            }
            println!("✓ Added service '{}'", name.trim());
        }
        ServiceCommand::Update { id, name, domain } => {
            if !store.update_service(id, &name, &domain)? {
                eprintln!(
                    "Warning: another service is already named '{}'",
                    name.trim()
                );
                return Ok(CommandStatus::Rejected);
            }
            println!("✓ Updated service {}", id);
        }
        ServiceCommand::Delete { ids } => {
            for id in &ids {
                store.delete_service(*id)?;
            }
            println!("✓ Deleted {} service id(s)", ids.len());
        }
        ServiceCommand::Clear => {
            store.clear_services()?;
            println!("✓ Cleared services");
        }
    }

    Ok(CommandStatus::Success)
}
