//! Daily activity streak: consecutive UTC days with at least one lesson completed.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::ids::UserId;

/// One row per user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Streak {
    pub user_id: UserId,
    /// Consecutive active days ending at `last_active_date`.
    pub current_streak: u32,
    /// Never decreases.
    pub longest_streak: u32,
    pub last_active_date: NaiveDate,
}
