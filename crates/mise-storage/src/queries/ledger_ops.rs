//! The XP ledger: one row per user in `users`.

use rusqlite::{params, Connection, OptionalExtension};

use mise_core::errors::MiseResult;
use mise_core::models::UserId;

use crate::to_storage_err;

pub fn get_user_xp(conn: &Connection, user_id: UserId) -> MiseResult<Option<u64>> {
    let xp: Option<i64> = conn
        .query_row("SELECT xp FROM users WHERE id = ?1", params![user_id.0], |row| {
            row.get(0)
        })
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(xp.map(|v| v.max(0) as u64))
}

/// Overwrite a user's XP total. Returns `NotFound` if the user row is missing.
pub fn set_user_xp(conn: &Connection, user_id: UserId, xp: u64) -> MiseResult<()> {
    let stored = i64::try_from(xp)
        .map_err(|_| to_storage_err(format!("xp {xp} exceeds ledger range")))?;
    let rows = conn
        .execute(
            "UPDATE users SET xp = ?2 WHERE id = ?1",
            params![user_id.0, stored],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    if rows == 0 {
        return Err(mise_core::MiseError::not_found(
            mise_core::constants::entities::USER,
            user_id,
        ));
    }
    Ok(())
}

/// Register a user with zero XP. No-op if the user already exists.
pub fn create_user(conn: &Connection, user_id: UserId) -> MiseResult<bool> {
    let rows = conn
        .execute(
            "INSERT OR IGNORE INTO users (id, xp) VALUES (?1, 0)",
            params![user_id.0],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(rows == 1)
}
