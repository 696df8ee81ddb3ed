//! Spreadsheet import
//!
//! Provides:
//! - Import kinds and the header-to-field mapping for each
//! - CSV and Excel parsing into an in-memory sheet (whole file or nothing)
//! - Importer orchestration feeding the bulk employee merge

pub mod format;
pub mod importer;
pub mod parser;

pub use format::{EmployeeField, FileFormat, ImportKind};
pub use importer::{import_bytes, import_file, ImportOutcome};
pub use parser::{parse_csv, parse_sheet, parse_workbook, ParsedSheet};
