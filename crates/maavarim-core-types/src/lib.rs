//! Core types shared across Maavarim facilities
//!
//! Holds the canonical field keys and event names used by the structured
//! logging macros and by error reporting, so every crate in the workspace
//! emits the same shape of event.

pub mod schema;
