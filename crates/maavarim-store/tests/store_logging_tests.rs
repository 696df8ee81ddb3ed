//! Store mutations emit start/end events through the logging facility

use maavarim_core::logging_facility::init_test_capture;
use maavarim_core::{merge_employees, NewEmployee};
use maavarim_core_types::schema::{EVENT_END, EVENT_START};
use maavarim_store::SqliteStore;

#[test]
fn test_merge_logs_employee_mutations() {
    // Given: A capture layer and an empty store
    let capture = init_test_capture();
    let mut store = SqliteStore::open_in_memory().unwrap();
    let dana = NewEmployee::named("Dana", "Levi").with_email("dana.levi@example.com");

    // When: Dana is inserted, then tagged with a second event
    merge_employees(&mut store, &[dana.clone()], "Conf2024").unwrap();
    merge_employees(&mut store, &[dana], "Conf2025").unwrap();

    // Then: Both the insert and the event-list update are logged
    for op in ["add_employee", "set_registered_events"] {
        capture.assert_event_exists(op, EVENT_START);
        capture.assert_event_exists(op, EVENT_END);
    }
}
