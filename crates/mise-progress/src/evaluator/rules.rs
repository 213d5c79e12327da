//! Rule matching against a cuisine tally.

use std::collections::{HashMap, HashSet};

use mise_core::models::{AchievementId, AchievementRule, CuisineId};

/// Ids of rules that are met and not yet unlocked, ascending and deduplicated.
pub fn qualifying_achievements(
    rules: &[AchievementRule],
    counts: &HashMap<CuisineId, u32>,
    unlocked: &HashSet<AchievementId>,
) -> Vec<AchievementId> {
    let mut ids: Vec<AchievementId> = rules
        .iter()
        .filter(|rule| !unlocked.contains(&rule.achievement_id))
        .filter(|rule| rule.is_met_by(counts.get(&rule.cuisine_id).copied().unwrap_or(0)))
        .map(|rule| rule.achievement_id)
        .collect();
    ids.sort();
    ids.dedup();
    ids
}
