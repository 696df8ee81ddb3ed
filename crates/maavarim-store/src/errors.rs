//! Error handling for maavarim-store
//!
//! Wraps the core ExError with store-specific helpers

use maavarim_core::errors::{ExError, ExErrorKind, MaavarimError};

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create a migration error
pub fn migration_error(migration_id: &str, reason: &str) -> ExError {
    ExError::new(ExErrorKind::Persistence)
        .with_op("migration")
        .with_message(format!("Migration {} failed: {}", migration_id, reason))
}

/// Create a checksum mismatch error
pub fn checksum_mismatch(migration_id: &str, expected: &str, actual: &str) -> ExError {
    ExError::new(ExErrorKind::ConstraintViolation)
        .with_op("migration_checksum")
        .with_message(format!(
            "Checksum mismatch for migration {}: expected {}, got {}",
            migration_id, expected, actual
        ))
}

/// Create a database error from rusqlite::Error
pub fn from_rusqlite(err: rusqlite::Error) -> ExError {
    ExError::new(ExErrorKind::Persistence)
        .with_op("sqlite")
        .with_message(err.to_string())
}

/// True when the error is a UNIQUE/NOT NULL/CHECK constraint failure
pub fn is_constraint_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _) if e.code == rusqlite::ErrorCode::ConstraintViolation
    )
}

/// Create an IO error
pub fn io_error(operation: &str, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}

/// Create a malformed-spreadsheet error from csv::Error
pub fn from_csv(err: csv::Error) -> ExError {
    MaavarimError::MalformedSpreadsheet {
        reason: err.to_string(),
    }
    .into()
}

/// Create a malformed-spreadsheet error from calamine::Error
pub fn from_calamine(err: calamine::Error) -> ExError {
    MaavarimError::MalformedSpreadsheet {
        reason: err.to_string(),
    }
    .into()
}
