mod common;

use common::new_store;
use maavarim_core::{ExErrorKind, RecordStore};
use proptest::prelude::*;

// ===== ADD SERVICE TESTS =====

#[test]
fn test_add_duplicate_service_name_fails_and_leaves_table_unchanged() {
    let mut store = new_store();
    assert!(store.add_service("Legal aid", "Law").unwrap());
    let before = store.get_all_services().unwrap();

    let added = store.add_service("Legal aid", "Welfare").unwrap();

    assert!(!added, "Duplicate name must be rejected");
    assert_eq!(store.get_all_services().unwrap(), before);
}

#[test]
fn test_add_unique_service_listed_in_domain_then_name_order() {
    let mut store = new_store();
    store.add_service("Tax help", "Law").unwrap();
    store.add_service("Counselling", "Welfare").unwrap();
    store.add_service("Contracts", "Law").unwrap();

    let services = store.get_all_services().unwrap();
    let ordered: Vec<(&str, &str)> = services
        .iter()
        .map(|s| (s.domain.as_str(), s.name.as_str()))
        .collect();

    assert_eq!(
        ordered,
        vec![
            ("Law", "Contracts"),
            ("Law", "Tax help"),
            ("Welfare", "Counselling"),
        ]
    );
    assert_eq!(store.get_domains().unwrap(), vec!["Law", "Welfare"]);
}

#[test]
fn test_add_service_with_blank_field_is_invalid_input() {
    let mut store = new_store();
    let err = store.add_service("  ", "Law").unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::InvalidInput);
    assert_eq!(store.get_services_count().unwrap(), 0);
}

// ===== UPDATE SERVICE TESTS =====

#[test]
fn test_update_service_to_other_services_name_fails() {
    let mut store = new_store();
    store.add_service("A", "X").unwrap();
    store.add_service("B", "X").unwrap();
    let b_id = store
        .get_all_services()
        .unwrap()
        .into_iter()
        .find(|s| s.name == "B")
        .unwrap()
        .id;

    assert!(!store.update_service(b_id, "A", "Y").unwrap());
    assert!(store
        .get_all_services()
        .unwrap()
        .iter()
        .any(|s| s.id == b_id && s.name == "B" && s.domain == "X"));
}

#[test]
fn test_update_service_keeping_own_name_succeeds() {
    let mut store = new_store();
    store.add_service("A", "X").unwrap();
    let id = store.get_all_services().unwrap()[0].id;

    assert!(store.update_service(id, "A", "Y").unwrap());
    assert_eq!(store.get_all_services().unwrap()[0].domain, "Y");
}

// ===== DELETE / CLEAR TESTS =====

#[test]
fn test_delete_nonexistent_service_is_noop() {
    let mut store = new_store();
    store.add_service("A", "X").unwrap();
    let before = store.get_all_services().unwrap();

    store.delete_service(999).unwrap();

    assert_eq!(store.get_all_services().unwrap(), before);
}

#[test]
fn test_identities_not_reused_after_clear() {
    let mut store = new_store();
    store.add_service("A", "X").unwrap();
    let first_id = store.get_all_services().unwrap()[0].id;
    store.clear_services().unwrap();
    store.add_service("A", "X").unwrap();

    let second_id = store.get_all_services().unwrap()[0].id;
    assert_ne!(first_id, second_id);
    assert_eq!(store.get_services_count().unwrap(), 1);
}

// ===== ROUND-TRIP PROPERTY =====

proptest! {
    #[test]
    fn prop_add_then_get_all_returns_matching_row_with_fresh_id(
        pairs in proptest::collection::btree_map("[a-zA-Z][a-zA-Z0-9 ]{0,15}[a-zA-Z0-9]", "[a-zA-Z]{1,12}", 1..8)
    ) {
        let mut store = new_store();
        for (name, domain) in &pairs {
            prop_assert!(store.add_service(name, domain).unwrap());
        }

        let services = store.get_all_services().unwrap();
        prop_assert_eq!(services.len(), pairs.len());

        let mut ids: Vec<i64> = services.iter().map(|s| s.id).collect();
        ids.sort_unstable();
        ids.dedup();
        prop_assert_eq!(ids.len(), pairs.len(), "identities must be unique");

        for (name, domain) in &pairs {
            prop_assert!(services.iter().any(|s| &s.name == name && &s.domain == domain));
        }
    }
}
