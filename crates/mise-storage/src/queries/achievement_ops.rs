//! Achievement definitions and their unlock rules.

use rusqlite::{params, Connection};

use mise_core::errors::MiseResult;
use mise_core::models::{AchievementDefinition, AchievementId, CuisineId};

use crate::to_storage_err;

pub fn list_achievements(conn: &Connection) -> MiseResult<Vec<AchievementDefinition>> {
    let mut stmt = conn
        .prepare(
            "SELECT id, title, description, icon, cuisine_id, threshold
             FROM achievements ORDER BY id",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    let achievements = stmt
        .query_map([], |row| {
            Ok(AchievementDefinition {
                id: AchievementId(row.get(0)?),
                title: row.get(1)?,
                description: row.get(2)?,
                icon: row.get(3)?,
                cuisine_id: CuisineId(row.get(4)?),
                threshold: row.get(5)?,
            })
        })
        .map_err(|e| to_storage_err(e.to_string()))?
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(achievements)
}

/// Insert or update achievement definitions by id. Unlock rows are untouched,
/// so editing a rule never revokes an achievement already granted.
pub fn install_achievements(
    conn: &Connection,
    achievements: &[AchievementDefinition],
) -> MiseResult<usize> {
    let tx = conn
        .unchecked_transaction()
        .map_err(|e| to_storage_err(format!("install_achievements begin: {e}")))?;

    for achievement in achievements {
        tx.execute(
            "INSERT INTO achievements (id, title, description, icon, cuisine_id, threshold)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)
             ON CONFLICT (id) DO UPDATE SET
                title       = excluded.title,
                description = excluded.description,
                icon        = excluded.icon,
                cuisine_id  = excluded.cuisine_id,
                threshold   = excluded.threshold",
            params![
                achievement.id.0,
                achievement.title,
                achievement.description,
                achievement.icon,
                achievement.cuisine_id.0,
                achievement.threshold,
            ],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    }

    tx.commit()
        .map_err(|e| to_storage_err(format!("install_achievements commit: {e}")))?;
    Ok(achievements.len())
}
