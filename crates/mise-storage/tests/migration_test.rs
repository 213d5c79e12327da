//! Schema migrations: versioning and idempotent re-open.

use mise_storage::migrations::LATEST_VERSION;
use mise_storage::StorageEngine;

#[test]
fn fresh_database_is_at_latest_version() {
    let engine = StorageEngine::open_in_memory().unwrap();
    assert_eq!(engine.schema_version().unwrap(), LATEST_VERSION);
}

#[test]
fn reopen_does_not_reapply_migrations() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("mise.db");

    {
        let engine = StorageEngine::open(&db_path).unwrap();
        assert_eq!(engine.schema_version().unwrap(), LATEST_VERSION);
    }

    let engine = StorageEngine::open(&db_path).unwrap();
    assert_eq!(engine.schema_version().unwrap(), LATEST_VERSION);
    let rows: i64 = engine
        .pool()
        .writer
        .with_conn_sync(|conn| {
            conn.query_row("SELECT COUNT(*) FROM schema_version", [], |row| row.get(0))
                .map_err(|e| mise_core::errors::StorageError::SqliteError {
                    message: e.to_string(),
                }
                .into())
        })
        .unwrap();
    assert_eq!(rows, LATEST_VERSION as i64);
}

#[test]
fn status_check_constraint_rejects_unknown_values() {
    let engine = StorageEngine::open_in_memory().unwrap();
    let result = engine.pool().writer.with_conn_sync(|conn| {
        Ok(conn.execute(
            "INSERT INTO user_progress (user_id, lesson_id, status, created_at, updated_at)
             VALUES (1, 1, 'finished', 'x', 'x')",
            [],
        ))
    });
    assert!(result.unwrap().is_err());
}

#[test]
fn zero_threshold_is_rejected_by_schema() {
    let engine = StorageEngine::open_in_memory().unwrap();
    let result = engine.pool().writer.with_conn_sync(|conn| {
        Ok(conn.execute(
            "INSERT INTO achievements (id, title, cuisine_id, threshold) VALUES (1, 'x', 1, 0)",
            [],
        ))
    });
    assert!(result.unwrap().is_err());
}

#[test]
fn streak_longest_below_current_is_rejected_by_schema() {
    let engine = StorageEngine::open_in_memory().unwrap();
    let result = engine.pool().writer.with_conn_sync(|conn| {
        Ok(conn.execute(
            "INSERT INTO streaks (user_id, current_streak, longest_streak, last_active_date)
             VALUES (1, 3, 2, '2026-03-01')",
            [],
        ))
    });
    assert!(result.unwrap().is_err());
}
