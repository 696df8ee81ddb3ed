use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Event - a named occurrence with an optional date
///
/// Employees refer to events by name only, through their
/// `registered_events` text; there is no foreign key between the two.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    pub name: String,
    pub date: Option<NaiveDate>,
}

impl Event {
    pub fn new(id: i64, name: impl Into<String>, date: Option<NaiveDate>) -> Self {
        Self {
            id,
            name: name.into(),
            date,
        }
    }
}
