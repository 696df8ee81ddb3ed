//! Record store interface
//!
//! `RecordStore` is the handle every consumer (merge, import, CLI) receives.
//! It is constructed once at startup and passed explicitly; nothing in the
//! workspace reaches for a global connection.
//!
//! Mutating methods take `&mut self`, so one handle means one writer.

use chrono::NaiveDate;

use crate::errors::ExResult;
use crate::model::{Employee, Event, IdentityKey, NewEmployee, Service};

/// CRUD over the three record kinds
///
/// Ordering contracts for the `get_all_*` methods:
/// - services: `(domain, name)`
/// - employees: `(last_name, first_name)`, ties by id
/// - events: date descending with undated events last, then name
pub trait RecordStore {
    // ----- services -----

    fn get_all_services(&self) -> ExResult<Vec<Service>>;

    /// Distinct service domains, ascending
    fn get_domains(&self) -> ExResult<Vec<String>>;

    /// Insert a service
    ///
    /// Returns `Ok(false)` and leaves the table unchanged when the name is
    /// already taken.
    ///
    /// # Errors
    ///
    /// `InvalidInput` when name or domain is blank, `Persistence` on storage failure.
    fn add_service(&mut self, name: &str, domain: &str) -> ExResult<bool>;

    /// Overwrite a service in place
    ///
    /// Returns `Ok(false)` when the new name belongs to a different service.
    /// An unknown id is a no-op that returns `Ok(true)`.
    ///
    /// # Errors
    ///
    /// `InvalidInput` when name or domain is blank, `Persistence` on storage failure.
    fn update_service(&mut self, id: i64, name: &str, domain: &str) -> ExResult<bool>;

    /// Delete by id; an unknown id is a no-op
    fn delete_service(&mut self, id: i64) -> ExResult<()>;

    fn clear_services(&mut self) -> ExResult<()>;

    fn get_services_count(&self) -> ExResult<u64>;

    // ----- employees -----

    fn get_all_employees(&self) -> ExResult<Vec<Employee>>;

    fn get_employee(&self, id: i64) -> ExResult<Option<Employee>>;

    /// Identity-key lookup; the lowest id wins when several rows share a key
    fn find_employee(&self, key: &IdentityKey<'_>) -> ExResult<Option<Employee>>;

    /// Unconditional insert, returns the new identity
    fn add_employee(&mut self, employee: &NewEmployee) -> ExResult<i64>;

    /// Overwrite one employee's event list
    fn set_registered_events(&mut self, id: i64, events: Option<&str>) -> ExResult<()>;

    fn clear_employees(&mut self) -> ExResult<()>;

    fn get_employees_count(&self) -> ExResult<u64>;

    // ----- events -----

    fn get_all_events(&self) -> ExResult<Vec<Event>>;

    /// Unconditional insert, returns the new identity
    ///
    /// # Errors
    ///
    /// `InvalidInput` when the name is blank.
    fn add_event(&mut self, name: &str, date: Option<NaiveDate>) -> ExResult<i64>;

    fn clear_events(&mut self) -> ExResult<()>;

    fn get_events_count(&self) -> ExResult<u64>;
}

/// Row counts for all three tables
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableCounts {
    pub services: u64,
    pub employees: u64,
    pub events: u64,
}

/// Collect the row counts of every table
pub fn table_counts<S: RecordStore + ?Sized>(store: &S) -> ExResult<TableCounts> {
    Ok(TableCounts {
        services: store.get_services_count()?,
        employees: store.get_employees_count()?,
        events: store.get_events_count()?,
    })
}
