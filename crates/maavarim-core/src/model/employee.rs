use serde::{Deserialize, Serialize};

/// Employee - a person record with contact and role attributes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Auto-increment identity
    pub id: i64,

    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub residence: Option<String>,
    pub role: Option<String>,
    pub work_location: Option<String>,

    /// Comma-joined event labels, edited by hand and by bulk import.
    /// See [`EventList`](crate::model::EventList) for the parsing rules.
    pub registered_events: Option<String>,
}

impl Employee {
    /// Identity key used by the bulk merge
    pub fn identity_key(&self) -> IdentityKey<'_> {
        IdentityKey {
            first_name: &self.first_name,
            last_name: &self.last_name,
            email: self.email.as_deref(),
        }
    }
}

/// Employee fields without an identity
///
/// Used both for direct inserts and as bulk-merge input parsed from a
/// spreadsheet row. Every field is optional here because import rows may be
/// missing any column; absent names are stored as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEmployee {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub residence: Option<String>,
    pub role: Option<String>,
    pub work_location: Option<String>,
    pub registered_events: Option<String>,
}

impl NewEmployee {
    pub fn named(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: Some(first_name.into()),
            last_name: Some(last_name.into()),
            ..Self::default()
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// True when the record carries at least one of first or last name
    pub fn has_name(&self) -> bool {
        self.first_name.is_some() || self.last_name.is_some()
    }

    pub fn identity_key(&self) -> IdentityKey<'_> {
        IdentityKey {
            first_name: self.first_name.as_deref().unwrap_or(""),
            last_name: self.last_name.as_deref().unwrap_or(""),
            email: self.email.as_deref(),
        }
    }
}

/// Merge identity: exact, case-sensitive `(first_name, last_name, email)`
///
/// An absent email only matches an absent email.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IdentityKey<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: Option<&'a str>,
}

impl IdentityKey<'_> {
    pub fn matches(&self, employee: &Employee) -> bool {
        employee.identity_key() == *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee(email: Option<&str>) -> Employee {
        Employee {
            id: 1,
            first_name: "Dana".to_string(),
            last_name: "Levi".to_string(),
            email: email.map(str::to_string),
            phone: None,
            residence: None,
            role: None,
            work_location: None,
            registered_events: None,
        }
    }

    #[test]
    fn test_identity_is_case_sensitive() {
        let input = NewEmployee::named("dana", "Levi").with_email("dana@example.com");
        assert!(!input
            .identity_key()
            .matches(&employee(Some("dana@example.com"))));
    }

    #[test]
    fn test_absent_email_matches_absent_email_only() {
        let input = NewEmployee::named("Dana", "Levi");
        assert!(input.identity_key().matches(&employee(None)));
        assert!(!input.identity_key().matches(&employee(Some("d@x.io"))));

        let with_email = NewEmployee::named("Dana", "Levi").with_email("d@x.io");
        assert!(!with_email.identity_key().matches(&employee(None)));
    }

    #[test]
    fn test_missing_names_key_as_empty_strings() {
        let input = NewEmployee {
            first_name: Some("Dana".to_string()),
            ..NewEmployee::default()
        };
        assert!(input.has_name());
        assert_eq!(input.identity_key().last_name, "");
        assert!(!NewEmployee::default().has_name());
    }
}
