//! Maavarim Store - SQLite persistence and spreadsheet import
//!
//! Provides:
//! - Connection management and embedded, checksummed migrations
//! - `SqliteStore`, the production `RecordStore`
//! - CSV import of employee lists feeding the bulk merge

pub mod db;
pub mod errors;
pub mod import;
pub mod migrations;
pub mod repo;

// Re-export key types
pub use errors::Result;
pub use repo::SqliteStore;
