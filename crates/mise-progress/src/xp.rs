//! XP awarder. Runs only on a first-time completion, inside the same unit of
//! work as the reconcile step.

use mise_core::constants::MAX_XP;
use mise_core::errors::MiseResult;
use mise_core::models::{LessonId, UserId, XpAward, XpSkipReason};
use mise_core::traits::{IReferenceCatalog, IUserLedger};

/// Add the lesson's reward to the user's total. An unknown user or lesson skips
/// the award instead of failing the submission.
pub fn award<S>(store: &S, user_id: UserId, lesson_id: LessonId) -> MiseResult<XpAward>
where
    S: IReferenceCatalog + IUserLedger + ?Sized,
{
    let Some(lesson) = store.get_lesson(lesson_id)? else {
        return Ok(XpAward::Skipped {
            reason: XpSkipReason::UnknownLesson(lesson_id),
        });
    };
    let Some(current) = store.get_user_xp(user_id)? else {
        return Ok(XpAward::Skipped {
            reason: XpSkipReason::UnknownUser(user_id),
        });
    };

    let total = add_xp(current, lesson.xp_reward);
    if total != current {
        store.set_user_xp(user_id, total)?;
    }
    Ok(XpAward::Granted {
        lesson_id,
        amount: lesson.xp_reward,
        total,
    })
}

/// Saturating add, capped at what the ledger can store.
pub fn add_xp(current: u64, reward: u32) -> u64 {
    current.saturating_add(u64::from(reward)).min(MAX_XP)
}
