//! Unlock rows in `user_achievements`. Insert-only.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};

use mise_core::errors::MiseResult;
use mise_core::models::{AchievementId, UnlockRecord, UserId};

use super::parse_dt;
use crate::to_storage_err;

pub fn list_unlocked(conn: &Connection, user_id: UserId) -> MiseResult<HashSet<AchievementId>> {
    let mut stmt = conn
        .prepare("SELECT achievement_id FROM user_achievements WHERE user_id = ?1")
        .map_err(|e| to_storage_err(e.to_string()))?;
    let ids = stmt
        .query_map(params![user_id.0], |row| row.get::<_, i64>(0))
        .map_err(|e| to_storage_err(e.to_string()))?
        .map(|r| r.map(AchievementId))
        .collect::<Result<HashSet<_>, _>>()
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(ids)
}

pub fn list_unlock_records(conn: &Connection, user_id: UserId) -> MiseResult<Vec<UnlockRecord>> {
    let mut stmt = conn
        .prepare(
            "SELECT achievement_id, unlocked_at FROM user_achievements
             WHERE user_id = ?1 ORDER BY unlocked_at, achievement_id",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map(params![user_id.0], |row| {
            Ok((row.get::<_, i64>(0)?, row.get::<_, String>(1)?))
        })
        .map_err(|e| to_storage_err(e.to_string()))?
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| to_storage_err(e.to_string()))?;

    rows.into_iter()
        .map(|(achievement_id, unlocked_at)| {
            Ok(UnlockRecord {
                user_id,
                achievement_id: AchievementId(achievement_id),
                unlocked_at: parse_dt(&unlocked_at)?,
            })
        })
        .collect()
}

/// Returns `true` when a new row was written; an existing unlock is left untouched.
pub fn insert_unlock(
    conn: &Connection,
    user_id: UserId,
    achievement_id: AchievementId,
    unlocked_at: DateTime<Utc>,
) -> MiseResult<bool> {
    let rows = conn
        .execute(
            "INSERT OR IGNORE INTO user_achievements (user_id, achievement_id, unlocked_at)
             VALUES (?1, ?2, ?3)",
            params![user_id.0, achievement_id.0, unlocked_at.to_rfc3339()],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(rows == 1)
}
