//! Input validation shared by every store implementation

use chrono::NaiveDate;

use crate::errors::{MaavarimError, Result};

/// Trim and check a required text field
pub fn require_non_empty<'a>(field: &'static str, value: &'a str) -> Result<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(MaavarimError::EmptyField { field });
    }
    Ok(trimmed)
}

/// Validate service fields, returning the trimmed `(name, domain)`
///
/// # Errors
///
/// Returns `EmptyField` when either field is blank.
pub fn validate_service<'a>(name: &'a str, domain: &'a str) -> Result<(&'a str, &'a str)> {
    Ok((
        require_non_empty("name", name)?,
        require_non_empty("domain", domain)?,
    ))
}

/// Validate an event name, returning it trimmed
///
/// # Errors
///
/// Returns `EmptyField` when the name is blank.
pub fn validate_event_name(name: &str) -> Result<&str> {
    require_non_empty("name", name)
}

/// Parse an event date in `YYYY-MM-DD` form
///
/// # Errors
///
/// Returns `InvalidDate` for anything else.
pub fn parse_event_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| MaavarimError::InvalidDate {
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_service_trims() {
        assert_eq!(
            validate_service("  Legal aid ", " Law").unwrap(),
            ("Legal aid", "Law")
        );
    }

    #[test]
    fn test_validate_service_rejects_blank_fields() {
        assert_eq!(
            validate_service("   ", "Law"),
            Err(MaavarimError::EmptyField { field: "name" })
        );
        assert_eq!(
            validate_service("Legal aid", ""),
            Err(MaavarimError::EmptyField { field: "domain" })
        );
    }

    #[test]
    fn test_parse_event_date() {
        assert_eq!(
            parse_event_date("2024-03-15").unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
        );
        assert!(matches!(
            parse_event_date("15/03/2024"),
            Err(MaavarimError::InvalidDate { .. })
        ));
    }
}
