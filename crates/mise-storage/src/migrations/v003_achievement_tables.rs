//! v003: achievements (definitions + unlock rule) and user_achievements (unlock rows).

use rusqlite::Connection;

use mise_core::errors::MiseResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> MiseResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS achievements (
            id          INTEGER PRIMARY KEY,
            title       TEXT NOT NULL,
            description TEXT NOT NULL DEFAULT '',
            icon        TEXT NOT NULL DEFAULT '',
            cuisine_id  INTEGER NOT NULL,
            threshold   INTEGER NOT NULL CHECK (threshold > 0)
        );

        CREATE TABLE IF NOT EXISTS user_achievements (
            user_id        INTEGER NOT NULL,
            achievement_id INTEGER NOT NULL REFERENCES achievements(id),
            unlocked_at    TEXT NOT NULL,
            PRIMARY KEY (user_id, achievement_id)
        );
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
