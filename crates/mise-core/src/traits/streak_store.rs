use crate::errors::MiseResult;
use crate::models::{Streak, UserId};

/// Per-user activity streak, written in the same unit of work as the XP step.
pub trait IStreakStore {
    /// `None` until the user's first completion.
    fn get_streak(&self, user_id: UserId) -> MiseResult<Option<Streak>>;
    fn upsert_streak(&self, streak: &Streak) -> MiseResult<()>;
}
