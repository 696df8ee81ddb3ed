//! Bulk employee merge
//!
//! Reconciles imported employee rows against the store. Each row either
//! creates a new employee or appends the event label to the event list of
//! the employee with the same identity key.
//!
//! Records are applied one by one in input order with no enclosing
//! transaction. A store error stops the batch; rows already applied stay.

use std::time::Instant;

use crate::errors::ExResult;
use crate::model::{EventList, NewEmployee};
use crate::ops::store::RecordStore;
use crate::{log_op_end, log_op_error, log_op_start};

/// What happened to each record of a merge batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeReport {
    /// Records processed, whether or not they changed anything
    pub processed: usize,
    /// New employee rows created
    pub inserted: usize,
    /// Existing employees whose event list gained the label
    pub updated: usize,
    /// Existing employees left untouched (empty label or already registered)
    pub unchanged: usize,
}

impl MergeReport {
    /// Records that changed the store
    pub fn changed(&self) -> usize {
        self.inserted + self.updated
    }
}

/// Outcome for a single record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeAction {
    Inserted(i64),
    Appended(i64),
    Unchanged(i64),
}

/// Merge one record into the store
///
/// `event_label` must already be trimmed.
///
/// # Errors
///
/// Propagates store errors.
pub fn merge_employee<S: RecordStore + ?Sized>(
    store: &mut S,
    record: &NewEmployee,
    event_label: &str,
) -> ExResult<MergeAction> {
    match store.find_employee(&record.identity_key())? {
        Some(existing) => {
            let mut events = EventList::parse(existing.registered_events.as_deref());
            if events.push(event_label) {
                store.set_registered_events(existing.id, events.to_stored().as_deref())?;
                Ok(MergeAction::Appended(existing.id))
            } else {
                Ok(MergeAction::Unchanged(existing.id))
            }
        }
        None => {
            let mut new_employee = record.clone();
            new_employee.first_name = Some(record.first_name.clone().unwrap_or_default());
            new_employee.last_name = Some(record.last_name.clone().unwrap_or_default());
            new_employee.registered_events =
                (!event_label.is_empty()).then(|| event_label.to_string());
            let id = store.add_employee(&new_employee)?;
            Ok(MergeAction::Inserted(id))
        }
    }
}

/// Merge a batch of records, tagging each with `event_label`
///
/// The label is trimmed; an empty label inserts new employees without any
/// event and leaves existing employees untouched.
///
/// # Errors
///
/// Returns the first store error. Records before it remain applied.
pub fn merge_employees<S: RecordStore + ?Sized>(
    store: &mut S,
    records: &[NewEmployee],
    event_label: &str,
) -> ExResult<MergeReport> {
    let started = Instant::now();
    let label = event_label.trim();
    log_op_start!("merge_employees", rows = records.len(), event_label = label);

    let mut report = MergeReport::default();
    for record in records {
        match merge_employee(store, record, label) {
            Ok(action) => {
                match action {
                    MergeAction::Inserted(_) => report.inserted += 1,
                    MergeAction::Appended(_) => report.updated += 1,
                    MergeAction::Unchanged(_) => report.unchanged += 1,
                }
                report.processed += 1;
            }
            Err(err) => {
                log_op_error!(
                    "merge_employees",
                    err.clone(),
                    duration_ms = started.elapsed().as_millis() as u64,
                    processed = report.processed
                );
                return Err(err);
            }
        }
    }

    log_op_end!(
        "merge_employees",
        duration_ms = started.elapsed().as_millis() as u64,
        processed = report.processed,
        inserted = report.inserted,
        updated = report.updated
    );
    Ok(report)
}
