//! Maavarim CLI
//!
//! Command-line interface over the services / employees / events store

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use maavarim_core::logging_facility;
use maavarim_store::SqliteStore;

mod commands;
mod config;

use commands::{CommandResult, CommandStatus};
use config::{AppConfig, Settings};

#[derive(Debug, Parser)]
#[command(name = "maavarim")]
#[command(about = "Maavarim - services, employees and event registrations", long_about = None)]
struct Cli {
    /// Database file (default: .maavarim/store.db)
    #[arg(long, global = true, env = "MAAVARIM_DB")]
    db: Option<PathBuf>,

    /// TOML configuration file (default: ./maavarim.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log output format: pretty or json
    #[arg(long, global = true, env = "MAAVARIM_LOG_FORMAT")]
    log_format: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Service catalog operations
    Service(commands::service::ServiceArgs),
    /// Employee directory operations
    Employee(commands::employee::EmployeeArgs),
    /// Event operations
    Event(commands::event::EventArgs),
    /// Import an employee spreadsheet for an event
    Import(commands::import::ImportArgs),
    /// Row counts of every table
    Stats,
}

fn main() {
    let cli = Cli::parse();

    match run(cli) {
        Ok(CommandStatus::Success) => {}
        Ok(CommandStatus::Rejected) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli) -> CommandResult {
    let file_config = AppConfig::load(cli.config.as_deref())?;
    let settings = Settings::resolve(cli.db, cli.log_format, &file_config)?;

    logging_facility::init(settings.log_profile);
    tracing::debug!(db = %settings.db_path.display(), "opening store");

    let mut store = SqliteStore::open(&settings.db_path)?;

    match cli.command {
        Commands::Service(args) => commands::service::execute(args, &mut store),
        Commands::Employee(args) => commands::employee::execute(args, &mut store),
        Commands::Event(args) => commands::event::execute(args, &mut store),
        Commands::Import(args) => commands::import::execute(args, &mut store),
        Commands::Stats => commands::stats::execute(&store),
    }
}
