use maavarim_core::{MemoryStore, NewEmployee};

/// Create a new empty store for testing
#[allow(dead_code)]
pub fn new_store() -> MemoryStore {
    MemoryStore::new()
}

/// Import-style record for Dana Levi with a fixed email
#[allow(dead_code)]
pub fn dana() -> NewEmployee {
    NewEmployee::named("Dana", "Levi").with_email("dana.levi@example.com")
}
