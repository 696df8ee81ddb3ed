//! The merge emits start/end events through the logging facility

mod common;

use common::{dana, new_store};
use maavarim_core::logging_facility::init_test_capture;
use maavarim_core::merge_employees;
use maavarim_core_types::schema::{EVENT_END, EVENT_START};

#[test]
fn test_merge_logs_start_and_end() {
    let capture = init_test_capture();
    let mut store = new_store();

    merge_employees(&mut store, &[dana()], "Conf2024").unwrap();

    capture.assert_event_exists("merge_employees", EVENT_START);
    capture.assert_event_exists("merge_employees", EVENT_END);
    let end = capture.find("merge_employees", EVENT_END).unwrap();
    assert_eq!(end.field("processed"), Some("1"));
    assert!(end.duration_ms().is_some());
}
