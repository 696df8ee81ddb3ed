//! Denormalized event-label list stored on each employee
//!
//! The stored form is a single string of labels joined by `", "`. Operators
//! edit it by hand, so parsing is tolerant: entries are split on `,` and
//! trimmed, and empty entries are kept in place so a rewrite does not shift
//! anything the operator typed.

use std::fmt;

/// Parsed view of an employee's `registered_events` column
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventList {
    entries: Vec<String>,
}

impl EventList {
    pub const SEPARATOR: &'static str = ", ";

    /// Parse the stored column value; `None` and `""` both yield an empty list
    pub fn parse(stored: Option<&str>) -> Self {
        match stored {
            Some(s) if !s.is_empty() => Self {
                entries: s.split(',').map(|e| e.trim().to_string()).collect(),
            },
            _ => Self::default(),
        }
    }

    /// Exact match against the trimmed entries
    pub fn contains(&self, label: &str) -> bool {
        self.entries.iter().any(|e| e == label)
    }

    /// Append `label` at the end if it is non-empty and not already present
    ///
    /// Returns whether the list changed.
    pub fn push(&mut self, label: &str) -> bool {
        if label.is_empty() || self.contains(label) {
            return false;
        }
        self.entries.push(label.to_string());
        true
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Non-empty labels in stored order, for display one per row
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .map(String::as_str)
            .filter(|e| !e.is_empty())
    }

    /// Value to persist; an empty list is stored as NULL
    pub fn to_stored(&self) -> Option<String> {
        if self.entries.is_empty() {
            None
        } else {
            Some(self.entries.join(Self::SEPARATOR))
        }
    }
}

impl fmt::Display for EventList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.entries.join(Self::SEPARATOR))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_entries() {
        let list = EventList::parse(Some("Conf2024 ,  Conf2025"));
        assert!(list.contains("Conf2024"));
        assert!(list.contains("Conf2025"));
        assert_eq!(list.to_stored().as_deref(), Some("Conf2024, Conf2025"));
    }

    #[test]
    fn test_null_and_empty_parse_to_empty_list() {
        assert!(EventList::parse(None).is_empty());
        assert!(EventList::parse(Some("")).is_empty());
        assert_eq!(EventList::parse(Some("")).to_stored(), None);
    }

    #[test]
    fn test_push_appends_in_order_without_duplicates() {
        let mut list = EventList::parse(Some("B, A"));
        assert!(list.push("C"));
        assert!(!list.push("A"));
        assert!(!list.push(""));
        assert_eq!(list.to_string(), "B, A, C");
    }

    #[test]
    fn test_contains_is_exact() {
        let list = EventList::parse(Some("Conf2024"));
        assert!(!list.contains("conf2024"));
        assert!(!list.contains("Conf"));
    }

    #[test]
    fn test_names_skip_blank_entries_but_storage_keeps_them() {
        let list = EventList::parse(Some("A,,B"));
        assert_eq!(list.names().collect::<Vec<_>>(), vec!["A", "B"]);
        assert_eq!(list.to_stored().as_deref(), Some("A, , B"));
    }
}
