//! Repository layer: the SQLite implementation of `RecordStore`

pub mod sqlite_store;

pub use sqlite_store::SqliteStore;
