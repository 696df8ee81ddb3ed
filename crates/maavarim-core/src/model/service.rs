use serde::{Deserialize, Serialize};

/// Service - a named offering within a domain
///
/// Services form a lookup table administered by hand. The name is unique
/// across the whole table, not just within a domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    /// Auto-increment identity
    pub id: i64,

    /// Unique, non-empty service name
    pub name: String,

    /// Non-empty domain (category) the service belongs to
    pub domain: String,
}

impl Service {
    pub fn new(id: i64, name: impl Into<String>, domain: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            domain: domain.into(),
        }
    }
}
