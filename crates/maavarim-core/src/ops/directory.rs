//! Employee lookup helpers for the details view

use crate::model::{Employee, EventList};

/// Queries shorter than this (after trimming) list everyone
pub const MIN_SEARCH_LEN: usize = 2;

/// `"First Last"`, followed by `" (email)"` when an email is on file
pub fn display_name(employee: &Employee) -> String {
    let mut name = format!("{} {}", employee.first_name, employee.last_name);
    if let Some(email) = employee.email.as_deref().filter(|e| !e.is_empty()) {
        name.push_str(&format!(" ({})", email));
    }
    name
}

/// Case-insensitive substring search over full name and email
pub fn search_employees<'a>(employees: &'a [Employee], query: &str) -> Vec<&'a Employee> {
    let needle = query.trim().to_lowercase();
    if needle.chars().count() < MIN_SEARCH_LEN {
        return employees.iter().collect();
    }
    employees
        .iter()
        .filter(|e| {
            let full_name = format!("{} {}", e.first_name, e.last_name).to_lowercase();
            let email = e.email.as_deref().unwrap_or("").to_lowercase();
            full_name.contains(&needle) || email.contains(&needle)
        })
        .collect()
}

/// The employee's event labels, one per entry, blanks skipped
pub fn registered_event_names(employee: &Employee) -> Vec<String> {
    EventList::parse(employee.registered_events.as_deref())
        .names()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee(id: i64, first: &str, last: &str, email: Option<&str>) -> Employee {
        Employee {
            id,
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: email.map(str::to_string),
            phone: None,
            residence: None,
            role: None,
            work_location: None,
            registered_events: None,
        }
    }

    #[test]
    fn test_display_name_with_and_without_email() {
        assert_eq!(
            display_name(&employee(1, "Dana", "Levi", Some("dana@example.com"))),
            "Dana Levi (dana@example.com)"
        );
        assert_eq!(display_name(&employee(2, "Avi", "Cohen", None)), "Avi Cohen");
    }

    #[test]
    fn test_search_matches_name_or_email_case_insensitively() {
        let employees = vec![
            employee(1, "Dana", "Levi", Some("dana@example.com")),
            employee(2, "Avi", "Cohen", Some("avi@corp.io")),
        ];

        let hits = search_employees(&employees, "LEVI");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 1);

        let hits = search_employees(&employees, "corp");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 2);

        assert!(search_employees(&employees, "zz").is_empty());
    }

    #[test]
    fn test_short_query_returns_everyone() {
        let employees = vec![
            employee(1, "Dana", "Levi", None),
            employee(2, "Avi", "Cohen", None),
        ];
        assert_eq!(search_employees(&employees, " d ").len(), 2);
    }

    #[test]
    fn test_registered_event_names() {
        let mut e = employee(1, "Dana", "Levi", None);
        e.registered_events = Some("Conf2024, Conf2025".to_string());
        assert_eq!(registered_event_names(&e), vec!["Conf2024", "Conf2025"]);
    }
}
