//! v004: streaks, one row per user.

use rusqlite::Connection;

use mise_core::errors::MiseResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> MiseResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS streaks (
            user_id          INTEGER PRIMARY KEY,
            current_streak   INTEGER NOT NULL CHECK (current_streak >= 0),
            longest_streak   INTEGER NOT NULL CHECK (longest_streak >= current_streak),
            last_active_date TEXT NOT NULL
        );
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
