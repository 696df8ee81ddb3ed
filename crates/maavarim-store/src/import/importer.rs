//! Import orchestration
//!
//! Validates the request, reads the whole file, maps rows to employees and
//! runs the bulk merge against the store.

use std::path::Path;
use std::time::Instant;

use maavarim_core::ops::{merge_employees, MergeReport, RecordStore};
use maavarim_core::rules::validation::require_non_empty;
use maavarim_core::{log_op_end, log_op_error, log_op_start};

use crate::errors::{io_error, Result};
use crate::import::format::{FileFormat, ImportKind};
use crate::import::parser::parse_sheet;

/// Summary of one import
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportOutcome {
    pub kind: ImportKind,
    pub event_label: String,
    /// Data rows in the file
    pub rows_read: usize,
    /// Rows dropped for lacking both first and last name
    pub rows_discarded: usize,
    pub merge: MergeReport,
    /// Employees in the store after the import
    pub employees_total: u64,
}

/// Import a spreadsheet file
///
/// The format is decided from the extension before the file is opened.
///
/// # Errors
///
/// - `InvalidInput` when the event label is blank or the kind is unknown
/// - `UnsupportedFormat` for anything but `.csv`, `.xlsx` and `.xls`
/// - `NotImplemented` for kinds without a processor
/// - `Io` when the file cannot be read
/// - `MalformedInput` when the file cannot be parsed; nothing is merged
/// - store errors from the merge
pub fn import_file<S: RecordStore + ?Sized>(
    store: &mut S,
    path: &Path,
    kind: ImportKind,
    event_label: &str,
) -> Result<ImportOutcome> {
    let format = FileFormat::from_path(path)?;
    let bytes = std::fs::read(path).map_err(|e| io_error("read_import_file", e))?;
    import_bytes(store, &bytes, format, kind, event_label)
}

/// Import spreadsheet content that is already in memory
///
/// # Errors
///
/// Same as [`import_file`], minus the file-system failures.
pub fn import_bytes<S: RecordStore + ?Sized>(
    store: &mut S,
    bytes: &[u8],
    format: FileFormat,
    kind: ImportKind,
    event_label: &str,
) -> Result<ImportOutcome> {
    let started = Instant::now();
    log_op_start!("import", kind = kind.key(), bytes = bytes.len());

    let result = run_import(store, bytes, format, kind, event_label);
    let duration_ms = started.elapsed().as_millis() as u64;
    match &result {
        Ok(outcome) => {
            log_op_end!(
                "import",
                duration_ms = duration_ms,
                rows = outcome.rows_read,
                discarded = outcome.rows_discarded,
                processed = outcome.merge.processed
            );
        }
        Err(err) => {
            log_op_error!("import", err.clone(), duration_ms = duration_ms);
        }
    }
    result
}

fn run_import<S: RecordStore + ?Sized>(
    store: &mut S,
    bytes: &[u8],
    format: FileFormat,
    kind: ImportKind,
    event_label: &str,
) -> Result<ImportOutcome> {
    let event_label = require_non_empty("event", event_label)?;
    let columns = kind.columns()?;

    let sheet = parse_sheet(bytes, format)?;
    let mapped = sheet.to_employees(columns);

    if mapped.employees.is_empty() {
        tracing::warn!(
            rows = sheet.row_count(),
            "no usable employee rows found in file"
        );
    }

    let merge = merge_employees(store, &mapped.employees, event_label)?;

    Ok(ImportOutcome {
        kind,
        event_label: event_label.to_string(),
        rows_read: sheet.row_count(),
        rows_discarded: mapped.discarded,
        merge,
        employees_total: store.get_employees_count()?,
    })
}
