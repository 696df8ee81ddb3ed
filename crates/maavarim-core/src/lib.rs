//! Maavarim Core - record models and store-independent logic
//!
//! This crate provides:
//! - Service, Employee and Event models, plus the denormalized event list
//! - The `RecordStore` trait and an in-memory implementation
//! - The bulk employee merge used by spreadsheet import
//! - Employee lookup helpers, input validation
//! - The error facility (`ExError`) and structured logging facility

pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod ops;
pub mod rules;

// Re-export commonly used types
pub use errors::{ExError, ExErrorKind, ExResult, MaavarimError, Result};
pub use model::{Employee, Event, EventList, IdentityKey, NewEmployee, Service};
pub use ops::{merge_employees, MemoryStore, MergeReport, RecordStore};
