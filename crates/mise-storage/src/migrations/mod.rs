//! Versioned schema migrations, tracked in `schema_version`.
//!
//! Each migration runs in its own transaction together with its version row,
//! so a failed migration leaves the previous version intact.

mod v001_catalog_tables;
mod v002_progress_tables;
mod v003_achievement_tables;
mod v004_streak_tables;

use rusqlite::{params, Connection, OptionalExtension};
use tracing::info;

use mise_core::errors::{MiseResult, StorageError};

use crate::to_storage_err;

type MigrationFn = fn(&Connection) -> MiseResult<()>;

/// All migrations in order. Versions must be strictly increasing.
const MIGRATIONS: &[(u32, &str, MigrationFn)] = &[
    (1, "catalog_tables", v001_catalog_tables::migrate),
    (2, "progress_tables", v002_progress_tables::migrate),
    (3, "achievement_tables", v003_achievement_tables::migrate),
    (4, "streak_tables", v004_streak_tables::migrate),
];

/// Latest schema version known to this build.
pub const LATEST_VERSION: u32 = 4;

/// Bring the database up to `LATEST_VERSION`. Returns the number of migrations applied.
pub fn run_migrations(conn: &Connection) -> MiseResult<usize> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS schema_version (
            version    INTEGER PRIMARY KEY,
            name       TEXT NOT NULL,
            applied_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        );",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;

    let current = current_version(conn)?;
    let mut applied = 0;
    for &(version, name, migrate) in MIGRATIONS.iter().filter(|(v, _, _)| *v > current) {
        apply(conn, version, name, migrate).map_err(|e| StorageError::MigrationFailed {
            version,
            reason: e.to_string(),
        })?;
        info!(version, name, "applied schema migration");
        applied += 1;
    }
    Ok(applied)
}

/// Highest applied migration version, 0 for a fresh database.
pub fn current_version(conn: &Connection) -> MiseResult<u32> {
    let version: Option<u32> = conn
        .query_row("SELECT MAX(version) FROM schema_version", [], |row| {
            row.get::<_, Option<u32>>(0)
        })
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?
        .flatten();
    Ok(version.unwrap_or(0))
}

fn apply(conn: &Connection, version: u32, name: &str, migrate: MigrationFn) -> MiseResult<()> {
    let tx = conn
        .unchecked_transaction()
        .map_err(|e| to_storage_err(format!("migration begin: {e}")))?;
    migrate(&tx)?;
    tx.execute(
        "INSERT INTO schema_version (version, name) VALUES (?1, ?2)",
        params![version, name],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    tx.commit()
        .map_err(|e| to_storage_err(format!("migration commit: {e}")))?;
    Ok(())
}
