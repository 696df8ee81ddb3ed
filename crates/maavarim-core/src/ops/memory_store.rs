use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::errors::ExResult;
use crate::model::{Employee, Event, IdentityKey, NewEmployee, Service};
use crate::ops::store::RecordStore;
use crate::rules::validation::{validate_event_name, validate_service};

/// In-memory record store
///
/// BTreeMap-backed, single-threaded. Follows the same contracts as the
/// SQLite store, including identities that are never reused after a delete
/// or clear, so it can stand in for it in tests.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    services: BTreeMap<i64, Service>,
    employees: BTreeMap<i64, Employee>,
    events: BTreeMap<i64, Event>,
    next_service_id: i64,
    next_employee_id: i64,
    next_event_id: i64,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            services: BTreeMap::new(),
            employees: BTreeMap::new(),
            events: BTreeMap::new(),
            next_service_id: 1,
            next_employee_id: 1,
            next_event_id: 1,
        }
    }

    fn name_taken_by_other(&self, name: &str, except: Option<i64>) -> bool {
        self.services
            .values()
            .any(|s| s.name == name && Some(s.id) != except)
    }
}

fn bump(counter: &mut i64) -> i64 {
    let id = *counter;
    *counter += 1;
    id
}

impl RecordStore for MemoryStore {
    fn get_all_services(&self) -> ExResult<Vec<Service>> {
        let mut services: Vec<Service> = self.services.values().cloned().collect();
        services.sort_by(|a, b| (&a.domain, &a.name).cmp(&(&b.domain, &b.name)));
        Ok(services)
    }

    fn get_domains(&self) -> ExResult<Vec<String>> {
        let mut domains: Vec<String> = self.services.values().map(|s| s.domain.clone()).collect();
        domains.sort();
        domains.dedup();
        Ok(domains)
    }

    fn add_service(&mut self, name: &str, domain: &str) -> ExResult<bool> {
        let (name, domain) = validate_service(name, domain)?;
        if self.name_taken_by_other(name, None) {
            return Ok(false);
        }
        let id = bump(&mut self.next_service_id);
        self.services.insert(id, Service::new(id, name, domain));
        Ok(true)
    }

    fn update_service(&mut self, id: i64, name: &str, domain: &str) -> ExResult<bool> {
        let (name, domain) = validate_service(name, domain)?;
        if self.name_taken_by_other(name, Some(id)) {
            return Ok(false);
        }
        if let Some(service) = self.services.get_mut(&id) {
            service.name = name.to_string();
            service.domain = domain.to_string();
        }
        Ok(true)
    }

    fn delete_service(&mut self, id: i64) -> ExResult<()> {
        self.services.remove(&id);
        Ok(())
    }

    fn clear_services(&mut self) -> ExResult<()> {
        self.services.clear();
        Ok(())
    }

    fn get_services_count(&self) -> ExResult<u64> {
        Ok(self.services.len() as u64)
    }

    fn get_all_employees(&self) -> ExResult<Vec<Employee>> {
        let mut employees: Vec<Employee> = self.employees.values().cloned().collect();
        employees.sort_by(|a, b| {
            (&a.last_name, &a.first_name, a.id).cmp(&(&b.last_name, &b.first_name, b.id))
        });
        Ok(employees)
    }

    fn get_employee(&self, id: i64) -> ExResult<Option<Employee>> {
        Ok(self.employees.get(&id).cloned())
    }

    fn find_employee(&self, key: &IdentityKey<'_>) -> ExResult<Option<Employee>> {
        // BTreeMap iterates in id order, so the first hit is the lowest id
        Ok(self.employees.values().find(|e| key.matches(e)).cloned())
    }

    fn add_employee(&mut self, employee: &NewEmployee) -> ExResult<i64> {
        let id = bump(&mut self.next_employee_id);
        self.employees.insert(
            id,
            Employee {
                id,
                first_name: employee.first_name.clone().unwrap_or_default(),
                last_name: employee.last_name.clone().unwrap_or_default(),
                email: employee.email.clone(),
                phone: employee.phone.clone(),
                residence: employee.residence.clone(),
                role: employee.role.clone(),
                work_location: employee.work_location.clone(),
                registered_events: employee.registered_events.clone(),
            },
        );
        Ok(id)
    }

    fn set_registered_events(&mut self, id: i64, events: Option<&str>) -> ExResult<()> {
        if let Some(employee) = self.employees.get_mut(&id) {
            employee.registered_events = events.map(str::to_string);
        }
        Ok(())
    }

    fn clear_employees(&mut self) -> ExResult<()> {
        self.employees.clear();
        Ok(())
    }

    fn get_employees_count(&self) -> ExResult<u64> {
        Ok(self.employees.len() as u64)
    }

    fn get_all_events(&self) -> ExResult<Vec<Event>> {
        let mut events: Vec<Event> = self.events.values().cloned().collect();
        events.sort_by(|a, b| {
            // Dated before undated, later dates first
            b.date
                .is_some()
                .cmp(&a.date.is_some())
                .then_with(|| b.date.cmp(&a.date))
                .then_with(|| a.name.cmp(&b.name))
                .then_with(|| a.id.cmp(&b.id))
        });
        Ok(events)
    }

    fn add_event(&mut self, name: &str, date: Option<NaiveDate>) -> ExResult<i64> {
        let name = validate_event_name(name)?;
        let id = bump(&mut self.next_event_id);
        self.events.insert(id, Event::new(id, name, date));
        Ok(id)
    }

    fn clear_events(&mut self) -> ExResult<()> {
        self.events.clear();
        Ok(())
    }

    fn get_events_count(&self) -> ExResult<u64> {
        Ok(self.events.len() as u64)
    }
}
