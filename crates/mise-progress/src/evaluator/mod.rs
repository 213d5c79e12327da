//! Achievement evaluator: full recompute of a user's per-cuisine completion
//! counts against the rule table, inserting every newly qualifying unlock.

pub mod rules;
pub mod tally;

use chrono::{DateTime, Utc};

use mise_core::errors::MiseResult;
use mise_core::models::{UnlockRecord, UserId};
use mise_core::traits::IStoreTransaction;
use tracing::debug;

pub use rules::qualifying_achievements;
pub use tally::{tally_by_cuisine, CuisineTally};

/// Evaluate every rule for `user_id` and insert the unlocks that are now earned.
/// Returns only the rows this call created; re-running is a no-op.
pub fn evaluate<S>(store: &S, user_id: UserId, now: DateTime<Utc>) -> MiseResult<Vec<UnlockRecord>>
where
    S: IStoreTransaction + ?Sized,
{
    let unlocked = store.list_unlocked(user_id)?;
    let completed = store.list_completed_progress(user_id)?;
    let tally = tally_by_cuisine(store, &completed)?;
    let rules = store.list_achievement_rules()?;

    let qualifying = qualifying_achievements(&rules, &tally.counts, &unlocked);
    debug!(
        user_id = %user_id,
        completed = completed.len(),
        unresolved = tally.unresolved,
        rules = rules.len(),
        qualifying = qualifying.len(),
        "achievement evaluation"
    );

    let mut created = Vec::with_capacity(qualifying.len());
    for achievement_id in qualifying {
        if store.insert_unlock(user_id, achievement_id, now)? {
            created.push(UnlockRecord {
                user_id,
                achievement_id,
                unlocked_at: now,
            });
        }
    }
    Ok(created)
}
