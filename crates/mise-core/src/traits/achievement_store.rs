use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::errors::MiseResult;
use crate::models::{AchievementDefinition, AchievementId, AchievementRule, UnlockRecord, UserId};

/// Unlock rows, keyed by (user, achievement). Rows are never updated or deleted.
pub trait IAchievementStore {
    fn list_unlocked(&self, user_id: UserId) -> MiseResult<HashSet<AchievementId>>;
    fn list_unlock_records(&self, user_id: UserId) -> MiseResult<Vec<UnlockRecord>>;

    /// Returns `true` if a row was created, `false` if it already existed.
    fn insert_unlock(
        &self,
        user_id: UserId,
        achievement_id: AchievementId,
        unlocked_at: DateTime<Utc>,
    ) -> MiseResult<bool>;
}

/// The fixed set of achievement definitions and their unlock rules.
pub trait IAchievementCatalog {
    fn list_achievements(&self) -> MiseResult<Vec<AchievementDefinition>>;

    fn list_achievement_rules(&self) -> MiseResult<Vec<AchievementRule>> {
        Ok(self
            .list_achievements()?
            .iter()
            .map(AchievementDefinition::rule)
            .collect())
    }
}
