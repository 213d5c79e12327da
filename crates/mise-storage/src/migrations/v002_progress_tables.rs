//! v002: user_progress, one row per (user, lesson).

use rusqlite::Connection;

use mise_core::errors::MiseResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> MiseResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS user_progress (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id      INTEGER NOT NULL,
            lesson_id    INTEGER NOT NULL,
            status       TEXT NOT NULL
                         CHECK (status IN ('not_started', 'in_progress', 'completed')),
            score        INTEGER,
            created_at   TEXT NOT NULL,
            updated_at   TEXT NOT NULL,
            completed_at TEXT,
            UNIQUE (user_id, lesson_id)
        );

        CREATE INDEX IF NOT EXISTS idx_progress_user_status ON user_progress(user_id, status);
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
