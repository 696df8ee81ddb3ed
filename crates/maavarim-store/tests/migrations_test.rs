// Integration tests for the migration framework

use rusqlite::Connection;

fn setup_test_db() -> Connection {
    Connection::open_in_memory().expect("Failed to create in-memory database")
}

fn get_table_names(conn: &Connection) -> Vec<String> {
    let mut stmt = conn
        .prepare("SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name")
        .unwrap();
    stmt.query_map([], |row| row.get(0))
        .unwrap()
        .collect::<Result<Vec<String>, _>>()
        .unwrap()
}

#[test]
fn test_apply_migrations_on_empty_db() {
    // Given: An empty SQLite database
    let mut conn = setup_test_db();

    // When: Migrations are applied
    let result = maavarim_store::migrations::apply_migrations(&mut conn);

    // Then: All migrations succeed
    assert!(
        result.is_ok(),
        "Migrations should succeed: {:?}",
        result.err()
    );

    let tables = get_table_names(&conn);
    for expected_table in [
        "schema_version",
        "services",
        "employees",
        "events",
        "sqlite_sequence", // Auto-created by SQLite for AUTOINCREMENT columns
    ] {
        assert!(
            tables.contains(&expected_table.to_string()),
            "Missing table: {}",
            expected_table
        );
    }
}

#[test]
fn test_migrations_recorded_once() {
    let mut conn = setup_test_db();
    maavarim_store::migrations::apply_migrations(&mut conn).unwrap();
    maavarim_store::migrations::apply_migrations(&mut conn).unwrap();

    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM schema_version", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn test_checksum_mismatch_detected() {
    // Given: A database whose recorded checksum was tampered with
    let mut conn = setup_test_db();
    maavarim_store::migrations::apply_migrations(&mut conn).unwrap();
    conn.execute(
        "UPDATE schema_version SET checksum = 'deadbeef' WHERE migration_id = '001_initial_schema'",
        [],
    )
    .unwrap();

    // When: Migrations run again
    let err = maavarim_store::migrations::apply_migrations(&mut conn).unwrap_err();

    // Then: The mismatch is reported
    assert_eq!(
        err.kind(),
        maavarim_core::ExErrorKind::ConstraintViolation
    );
    assert!(err.message().contains("001_initial_schema"));
}
