//! SQLite record store
//!
//! One long-lived connection per store handle. All writes go through
//! `&mut self`, which serializes them within the process. Two processes
//! writing the same file are not coordinated: a bulk merge reads then writes
//! without isolation and can lose a concurrent update.

use std::path::Path;
use std::time::Instant;

use chrono::NaiveDate;
use maavarim_core::errors::ExResult;
use maavarim_core::model::{Employee, Event, IdentityKey, NewEmployee, Service};
use maavarim_core::ops::RecordStore;
use maavarim_core::rules::validation::{validate_event_name, validate_service};
use maavarim_core::{log_op_end, log_op_error, log_op_start};
use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::db;
use crate::errors::{from_rusqlite, is_constraint_violation, Result};
use crate::migrations::apply_migrations;

const EMPLOYEE_COLUMNS: &str = "id, first_name, last_name, email, phone, residence, role, \
                                work_location, registered_events";

/// SQLite-backed `RecordStore`
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) the database file, configure it and apply migrations
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_connection(db::open(path)?)
    }

    /// Fresh in-memory database with the schema applied
    pub fn open_in_memory() -> Result<Self> {
        Self::from_connection(db::open_in_memory()?)
    }

    /// Wrap an existing connection, configuring it and applying migrations
    pub fn from_connection(mut conn: Connection) -> Result<Self> {
        db::configure(&conn)?;
        apply_migrations(&mut conn)?;
        Ok(Self { conn })
    }

    /// Underlying connection, for diagnostics and tests
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    fn count(&self, table: &str) -> ExResult<u64> {
        let n: i64 = self
            .conn
            .query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| {
                row.get(0)
            })
            .map_err(from_rusqlite)?;
        Ok(u64::try_from(n).unwrap_or_default())
    }

    fn clear(&mut self, op: &'static str, table: &str) -> ExResult<()> {
        logged(op, || {
            self.conn
                .execute(&format!("DELETE FROM {}", table), [])
                .map_err(from_rusqlite)?;
            Ok(())
        })
    }
}

/// Run a mutating operation between start and end/end_error log events
fn logged<T>(op: &'static str, f: impl FnOnce() -> ExResult<T>) -> ExResult<T> {
    let started = Instant::now();
    log_op_start!(op);
    let result = f();
    let duration_ms = started.elapsed().as_millis() as u64;
    match &result {
        Ok(_) => {
            log_op_end!(op, duration_ms = duration_ms);
        }
        Err(err) => {
            log_op_error!(op, err.clone(), duration_ms = duration_ms);
        }
    }
    result
}

fn service_from_row(row: &Row<'_>) -> rusqlite::Result<Service> {
    Ok(Service {
        id: row.get(0)?,
        name: row.get(1)?,
        domain: row.get(2)?,
    })
}

fn employee_from_row(row: &Row<'_>) -> rusqlite::Result<Employee> {
    Ok(Employee {
        id: row.get(0)?,
        first_name: row.get(1)?,
        last_name: row.get(2)?,
        email: row.get(3)?,
        phone: row.get(4)?,
        residence: row.get(5)?,
        role: row.get(6)?,
        work_location: row.get(7)?,
        registered_events: row.get(8)?,
    })
}

fn event_from_row(row: &Row<'_>) -> rusqlite::Result<Event> {
    Ok(Event {
        id: row.get(0)?,
        name: row.get(1)?,
        date: row.get(2)?,
    })
}

impl SqliteStore {
    fn query_all<T>(
        &self,
        sql: &str,
        map: fn(&Row<'_>) -> rusqlite::Result<T>,
    ) -> ExResult<Vec<T>> {
        let mut stmt = self.conn.prepare(sql).map_err(from_rusqlite)?;
        let rows = stmt
            .query_map([], map)
            .map_err(from_rusqlite)?
            .collect::<rusqlite::Result<Vec<T>>>()
            .map_err(from_rusqlite)?;
        Ok(rows)
    }
}

impl RecordStore for SqliteStore {
    // ----- services -----

    fn get_all_services(&self) -> ExResult<Vec<Service>> {
        self.query_all(
            "SELECT id, name, domain FROM services ORDER BY domain, name",
            service_from_row,
        )
    }

    fn get_domains(&self) -> ExResult<Vec<String>> {
        self.query_all(
            "SELECT DISTINCT domain FROM services ORDER BY domain",
            |row| row.get(0),
        )
    }

    fn add_service(&mut self, name: &str, domain: &str) -> ExResult<bool> {
        logged("add_service", || {
            let (name, domain) = validate_service(name, domain)?;
            match self.conn.execute(
                "INSERT INTO services (name, domain) VALUES (?1, ?2)",
                params![name, domain],
            ) {
                Ok(_) => Ok(true),
                Err(e) if is_constraint_violation(&e) => {
                    tracing::warn!(service = name, "service name already exists");
                    Ok(false)
                }
                Err(e) => Err(from_rusqlite(e)),
            }
        })
    }

    fn update_service(&mut self, id: i64, name: &str, domain: &str) -> ExResult<bool> {
        logged("update_service", || {
            let (name, domain) = validate_service(name, domain)?;
            match self.conn.execute(
                "UPDATE services SET name = ?1, domain = ?2 WHERE id = ?3",
                params![name, domain, id],
            ) {
                Ok(0) => {
                    tracing::debug!(service_id = id, "update of unknown service ignored");
                    Ok(true)
                }
                Ok(_) => Ok(true),
                Err(e) if is_constraint_violation(&e) => {
                    tracing::warn!(service_id = id, service = name, "service name already exists");
                    Ok(false)
                }
                Err(e) => Err(from_rusqlite(e)),
            }
        })
    }

    fn delete_service(&mut self, id: i64) -> ExResult<()> {
        logged("delete_service", || {
            self.conn
                .execute("DELETE FROM services WHERE id = ?1", [id])
                .map_err(from_rusqlite)?;
            Ok(())
        })
    }

    fn clear_services(&mut self) -> ExResult<()> {
        self.clear("clear_services", "services")
    }

    fn get_services_count(&self) -> ExResult<u64> {
        self.count("services")
    }

    // ----- employees -----

    fn get_all_employees(&self) -> ExResult<Vec<Employee>> {
        self.query_all(
            &format!(
                "SELECT {} FROM employees ORDER BY last_name, first_name, id",
                EMPLOYEE_COLUMNS
            ),
            employee_from_row,
        )
    }

    fn get_employee(&self, id: i64) -> ExResult<Option<Employee>> {
        self.conn
            .query_row(
                &format!("SELECT {} FROM employees WHERE id = ?1", EMPLOYEE_COLUMNS),
                [id],
                employee_from_row,
            )
            .optional()
            .map_err(from_rusqlite)
    }

    fn find_employee(&self, key: &IdentityKey<'_>) -> ExResult<Option<Employee>> {
        // `IS` is SQLite's null-safe equality: NULL email matches NULL only
        self.conn
            .query_row(
                &format!(
                    "SELECT {} FROM employees
                     WHERE first_name = ?1 AND last_name = ?2 AND email IS ?3
                     ORDER BY id LIMIT 1",
                    EMPLOYEE_COLUMNS
                ),
                params![key.first_name, key.last_name, key.email],
                employee_from_row,
            )
            .optional()
            .map_err(from_rusqlite)
    }

    fn add_employee(&mut self, employee: &NewEmployee) -> ExResult<i64> {
        logged("add_employee", || {
            self.conn
                .execute(
                    "INSERT INTO employees (first_name, last_name, email, phone, residence, role, work_location, registered_events)
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                    params![
                        employee.first_name.as_deref().unwrap_or(""),
                        employee.last_name.as_deref().unwrap_or(""),
                        employee.email,
                        employee.phone,
                        employee.residence,
                        employee.role,
                        employee.work_location,
                        employee.registered_events,
                    ],
                )
                .map_err(from_rusqlite)?;
            Ok(self.conn.last_insert_rowid())
        })
    }

    fn set_registered_events(&mut self, id: i64, events: Option<&str>) -> ExResult<()> {
        logged("set_registered_events", || {
            self.conn
                .execute(
                    "UPDATE employees SET registered_events = ?1 WHERE id = ?2",
                    params![events, id],
                )
                .map_err(|e| from_rusqlite(e).with_entity_id(id.to_string()))?;
            Ok(())
        })
    }

    fn clear_employees(&mut self) -> ExResult<()> {
        self.clear("clear_employees", "employees")
    }

    fn get_employees_count(&self) -> ExResult<u64> {
        self.count("employees")
    }

    // ----- events -----

    fn get_all_events(&self) -> ExResult<Vec<Event>> {
        self.query_all(
            "SELECT id, name, date FROM events ORDER BY date IS NULL, date DESC, name, id",
            event_from_row,
        )
    }

    fn add_event(&mut self, name: &str, date: Option<NaiveDate>) -> ExResult<i64> {
        logged("add_event", || {
            let name = validate_event_name(name)?;
            self.conn
                .execute(
                    "INSERT INTO events (name, date) VALUES (?1, ?2)",
                    params![name, date],
                )
                .map_err(from_rusqlite)?;
            Ok(self.conn.last_insert_rowid())
        })
    }

    fn clear_events(&mut self) -> ExResult<()> {
        self.clear("clear_events", "events")
    }

    fn get_events_count(&self) -> ExResult<u64> {
        self.count("events")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_date_round_trips_as_iso_text() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 11, 3);
        store.add_event("Conf", date).unwrap();

        let stored: String = store
            .connection()
            .query_row("SELECT date FROM events", [], |row| row.get(0))
            .unwrap();
        assert_eq!(stored, "2024-11-03");
        assert_eq!(store.get_all_events().unwrap()[0].date, date);
    }

    #[test]
    fn test_add_employee_returns_rowid() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        let first = store.add_employee(&NewEmployee::named("A", "B")).unwrap();
        let second = store.add_employee(&NewEmployee::named("C", "D")).unwrap();
        assert_eq!(second, first + 1);
    }
}
