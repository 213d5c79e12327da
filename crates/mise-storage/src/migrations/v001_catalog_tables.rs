//! v001: cuisines, skills, lessons, users.
//!
//! Reference tables carry no foreign keys: the curriculum is imported as-is and
//! lessons with a dangling skill are tolerated (they just never count toward a cuisine).

use rusqlite::Connection;

use mise_core::errors::MiseResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> MiseResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS cuisines (
            id          INTEGER PRIMARY KEY,
            name        TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS skills (
            id          INTEGER PRIMARY KEY,
            cuisine_id  INTEGER NOT NULL,
            name        TEXT NOT NULL,
            order_index INTEGER NOT NULL DEFAULT 0
        );

        CREATE INDEX IF NOT EXISTS idx_skills_cuisine ON skills(cuisine_id, order_index);

        CREATE TABLE IF NOT EXISTS lessons (
            id          INTEGER PRIMARY KEY,
            skill_id    INTEGER NOT NULL,
            name        TEXT NOT NULL,
            order_index INTEGER NOT NULL DEFAULT 0,
            xp_reward   INTEGER NOT NULL DEFAULT 0 CHECK (xp_reward >= 0)
        );

        CREATE INDEX IF NOT EXISTS idx_lessons_skill ON lessons(skill_id, order_index);

        CREATE TABLE IF NOT EXISTS users (
            id          INTEGER PRIMARY KEY,
            xp          INTEGER NOT NULL DEFAULT 0 CHECK (xp >= 0),
            created_at  TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        );
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
