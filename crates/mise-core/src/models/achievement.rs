use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::ids::{AchievementId, CuisineId, UserId};

/// Unlock rule: at least `threshold` completed lessons in `cuisine_id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AchievementRule {
    pub achievement_id: AchievementId,
    pub cuisine_id: CuisineId,
    pub threshold: u32,
}

impl AchievementRule {
    pub fn is_met_by(&self, completed_in_cuisine: u32) -> bool {
        completed_in_cuisine >= self.threshold
    }
}

/// Static achievement definition as shipped in the catalog or config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AchievementDefinition {
    pub id: AchievementId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
    pub cuisine_id: CuisineId,
    pub threshold: u32,
}

impl AchievementDefinition {
    pub fn rule(&self) -> AchievementRule {
        AchievementRule {
            achievement_id: self.id,
            cuisine_id: self.cuisine_id,
            threshold: self.threshold,
        }
    }
}

/// The durable fact that `achievement_id` was granted to `user_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UnlockRecord {
    pub user_id: UserId,
    pub achievement_id: AchievementId,
    pub unlocked_at: DateTime<Utc>,
}

/// An achievement as presented to one user: the definition plus whether it is unlocked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AchievementView {
    pub id: AchievementId,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub unlocked: bool,
    pub unlocked_at: Option<DateTime<Utc>>,
}
