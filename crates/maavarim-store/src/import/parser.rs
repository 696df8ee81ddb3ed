//! Spreadsheet parsing (CSV and Excel workbooks)
//!
//! The whole file is read into memory before anything is handed on, so a
//! malformed file is rejected without a partial import.

use std::io::Cursor;

use calamine::{open_workbook_auto_from_rs, Reader};
use maavarim_core::model::NewEmployee;
use maavarim_core::MaavarimError;

use crate::errors::{from_calamine, from_csv, Result};
use crate::import::format::{EmployeeField, FileFormat};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// A fully read spreadsheet: header row plus data rows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedSheet {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Employees mapped from a sheet, plus how many rows were dropped
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappedRows {
    pub employees: Vec<NewEmployee>,
    /// Rows with neither first nor last name
    pub discarded: usize,
}

/// Parse file content in the given format
///
/// # Errors
///
/// Returns `MalformedInput` when the content cannot be read as that format.
pub fn parse_sheet(bytes: &[u8], format: FileFormat) -> Result<ParsedSheet> {
    match format {
        FileFormat::Csv => parse_csv(bytes),
        FileFormat::Excel => parse_workbook(bytes),
    }
}

/// Parse CSV bytes with a header row
///
/// A leading UTF-8 BOM is ignored and headers are trimmed. Short rows are
/// padded with empty cells; a row longer than the header is malformed.
///
/// # Errors
///
/// Returns `MalformedInput` for invalid UTF-8, inconsistent quoting, or rows
/// wider than the header.
pub fn parse_csv(bytes: &[u8]) -> Result<ParsedSheet> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes);

    let headers: Vec<String> = reader
        .headers()
        .map_err(from_csv)?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record.map_err(from_csv)?;
        if record.len() > headers.len() {
            // +2: header line, 1-based numbering
            return Err(MaavarimError::MalformedSpreadsheet {
                reason: format!(
                    "line {} has {} fields, header has {}",
                    index + 2,
                    record.len(),
                    headers.len()
                ),
            }
            .into());
        }
        let mut row: Vec<String> = record.iter().map(str::to_string).collect();
        row.resize(headers.len(), String::new());
        rows.push(row);
    }

    Ok(ParsedSheet { headers, rows })
}

/// Parse the first worksheet of an `.xlsx` / `.xls` workbook
///
/// The first non-empty row is the header. Cells are rendered as text, so a
/// numeric phone cell `501234567` reads as `"501234567"`. Rows with no
/// content are skipped.
///
/// # Errors
///
/// Returns `MalformedInput` when the bytes are not a workbook or it has no
/// worksheet.
pub fn parse_workbook(bytes: &[u8]) -> Result<ParsedSheet> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes)).map_err(from_calamine)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| MaavarimError::MalformedSpreadsheet {
            reason: "workbook has no worksheets".to_string(),
        })?
        .map_err(from_calamine)?;

    let mut rows = range
        .rows()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect::<Vec<_>>())
        .filter(|row| row.iter().any(|cell| !cell.trim().is_empty()));

    let headers: Vec<String> = match rows.next() {
        Some(header_row) => header_row.iter().map(|h| h.trim().to_string()).collect(),
        None => return Ok(ParsedSheet::default()),
    };
    let rows = rows
        .map(|mut row| {
            row.resize(headers.len(), String::new());
            row
        })
        .collect();

    Ok(ParsedSheet { headers, rows })
}

impl ParsedSheet {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// First `limit` rows, for showing the operator what was loaded
    pub fn preview(&self, limit: usize) -> &[Vec<String>] {
        &self.rows[..self.rows.len().min(limit)]
    }

    /// Map rows to employee records using a header-to-field table
    ///
    /// Cells are trimmed and empty cells become absent. Mapped headers the
    /// sheet lacks leave their field absent. Rows without first and last name
    /// are discarded.
    pub fn to_employees(&self, columns: &[(&str, EmployeeField)]) -> MappedRows {
        let positions: Vec<(usize, EmployeeField)> = columns
            .iter()
            .filter_map(|(header, field)| {
                self.headers
                    .iter()
                    .position(|h| h == header)
                    .map(|idx| (idx, *field))
            })
            .collect();

        let mut mapped = MappedRows::default();
        for row in &self.rows {
            let mut employee = NewEmployee::default();
            for (idx, field) in &positions {
                let value = row
                    .get(*idx)
                    .map(|cell| cell.trim())
                    .filter(|cell| !cell.is_empty())
                    .map(str::to_string);
                field.assign(&mut employee, value);
            }
            if employee.has_name() {
                mapped.employees.push(employee);
            } else {
                mapped.discarded += 1;
            }
        }
        mapped
    }
}
