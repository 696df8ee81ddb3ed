//! Import kinds, accepted file formats and column mappings

use std::path::Path;

use maavarim_core::errors::{MaavarimError, Result};
use maavarim_core::model::NewEmployee;

/// Kind of spreadsheet being uploaded
///
/// Every kind has a stable key (used on the command line) and the Hebrew
/// label operators know it by. Only conference participants lists have a
/// processor so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportKind {
    ConferenceParticipants,
    ConferenceRegistrations,
    MeetingsBusiness,
    MeetingsEmployees,
}

impl ImportKind {
    pub const ALL: [ImportKind; 4] = [
        ImportKind::ConferenceParticipants,
        ImportKind::ConferenceRegistrations,
        ImportKind::MeetingsBusiness,
        ImportKind::MeetingsEmployees,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            ImportKind::ConferenceParticipants => "conference_participants",
            ImportKind::ConferenceRegistrations => "conference_registrations",
            ImportKind::MeetingsBusiness => "meetings_business",
            ImportKind::MeetingsEmployees => "meetings_employees",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ImportKind::ConferenceParticipants => "משתתפים בכנס יזמות",
            ImportKind::ConferenceRegistrations => "נרשמים לכנס יזמות",
            ImportKind::MeetingsBusiness => "פגישות ליווי עם בעלי עסקים",
            ImportKind::MeetingsEmployees => "פגישות ליווי עם שכירים",
        }
    }

    /// Look a kind up by key or by label
    ///
    /// # Errors
    ///
    /// Returns `UnknownImportKind` when nothing matches.
    pub fn from_key(key: &str) -> Result<Self> {
        let key = key.trim();
        Self::ALL
            .into_iter()
            .find(|k| k.key() == key || k.label() == key)
            .ok_or_else(|| MaavarimError::UnknownImportKind {
                key: key.to_string(),
            })
    }

    /// Header-to-field mapping for this kind
    ///
    /// # Errors
    ///
    /// Returns `ImportKindNotSupported` for kinds without a processor.
    pub fn columns(&self) -> Result<&'static [(&'static str, EmployeeField)]> {
        match self {
            ImportKind::ConferenceParticipants => Ok(&CONFERENCE_PARTICIPANTS_COLUMNS),
            other => Err(MaavarimError::ImportKindNotSupported {
                key: other.key().to_string(),
            }),
        }
    }
}

/// Employee field a spreadsheet column feeds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeField {
    FirstName,
    LastName,
    Email,
    Phone,
    Residence,
    Role,
    WorkLocation,
}

impl EmployeeField {
    pub fn assign(&self, employee: &mut NewEmployee, value: Option<String>) {
        let slot = match self {
            EmployeeField::FirstName => &mut employee.first_name,
            EmployeeField::LastName => &mut employee.last_name,
            EmployeeField::Email => &mut employee.email,
            EmployeeField::Phone => &mut employee.phone,
            EmployeeField::Residence => &mut employee.residence,
            EmployeeField::Role => &mut employee.role,
            EmployeeField::WorkLocation => &mut employee.work_location,
        };
        *slot = value;
    }
}

/// Conference participants export: source header -> employee field
pub static CONFERENCE_PARTICIPANTS_COLUMNS: [(&str, EmployeeField); 7] = [
    ("שם", EmployeeField::FirstName),
    ("שם משפחה", EmployeeField::LastName),
    ("דואר אלקטרוני", EmployeeField::Email),
    ("מספר SMS", EmployeeField::Phone),
    ("מקום מגורים", EmployeeField::Residence),
    ("תפקיד", EmployeeField::Role),
    ("יישוב (מקום העבודה)", EmployeeField::WorkLocation),
];

/// Accepted upload formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Csv,
    /// `.xlsx` or `.xls`; the first worksheet is read
    Excel,
}

impl FileFormat {
    /// Decide the format from the file extension, before reading anything
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedFileType` for anything but `.csv`, `.xlsx` and `.xls`.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match extension.as_str() {
            "csv" => Ok(FileFormat::Csv),
            "xlsx" | "xls" => Ok(FileFormat::Excel),
            _ => Err(MaavarimError::UnsupportedFileType { extension }),
        }
    }
}
