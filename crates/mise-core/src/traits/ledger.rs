use crate::errors::MiseResult;
use crate::models::UserId;

/// Cumulative XP per user. The engine's XP step is the only writer.
pub trait IUserLedger {
    /// `None` when the user does not exist.
    fn get_user_xp(&self, user_id: UserId) -> MiseResult<Option<u64>>;
    fn set_user_xp(&self, user_id: UserId, xp: u64) -> MiseResult<()>;
}
