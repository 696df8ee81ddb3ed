//! Spreadsheet import command
//!
//! Usage: maavarim import <FILE> (--event <LABEL> | --preview) [--kind <KIND>]

use std::path::PathBuf;

use clap::Args;
use maavarim_core::{ExError, RecordStore};
use maavarim_store::errors::io_error;
use maavarim_store::import::{import_file, parse_sheet, FileFormat, ImportKind};

use super::{CommandResult, CommandStatus};

/// Rows shown by `--preview`
const PREVIEW_ROWS: usize = 20;

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// Path to the CSV or Excel (.xlsx, .xls) file
    pub path: PathBuf,

    /// Event label recorded on every imported employee
    #[arg(long, required_unless_present = "preview")]
    pub event: Option<String>,

    /// Kind of list being uploaded (key or Hebrew label)
    #[arg(long, default_value = "conference_participants")]
    pub kind: String,

    /// Show the first rows without importing
    #[arg(long)]
    pub preview: bool,
}

/// Execute import command
pub fn execute(args: ImportArgs, store: &mut dyn RecordStore) -> CommandResult {
    let kind = ImportKind::from_key(&args.kind).map_err(ExError::from)?;

    if args.preview {
        return preview(&args, kind);
    }

    println!("Importing {} ({})...", args.path.display(), kind.label());
    let event = args.event.as_deref().unwrap_or_default();
    let outcome = import_file(store, &args.path, kind, event)?;

    println!(
        "✓ Imported {} row(s) for '{}': {} new, {} updated, {} unchanged",
        outcome.merge.processed,
        outcome.event_label,
        outcome.merge.inserted,
        outcome.merge.updated,
        outcome.merge.unchanged
    );
    if outcome.rows_discarded > 0 {
        println!(
            "  {} row(s) skipped for missing first and last name",
            outcome.rows_discarded
        );
    }
    println!("  {} employee(s) in store", outcome.employees_total);

    Ok(CommandStatus::Success)
}

fn preview(args: &ImportArgs, kind: ImportKind) -> CommandResult {
    let format = FileFormat::from_path(&args.path).map_err(ExError::from)?;
    let bytes =
        std::fs::read(&args.path).map_err(|e| io_error("read_import_file", e))?;
    let sheet = parse_sheet(&bytes, format)?;

    println!("{} ({} row(s))", kind.label(), sheet.row_count());
    println!("{}", sheet.headers.join("\t"));
    for row in sheet.preview(PREVIEW_ROWS) {
        println!("{}", row.join("\t"));
    }

    Ok(CommandStatus::Success)
}
