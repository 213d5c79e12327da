//! Structured events for every engine state change.
//!
//! Each event carries an `event` field with a stable name so log pipelines can
//! filter on it regardless of the human-readable message.

use mise_core::models::{LessonId, ProgressRecord, Streak, UnlockRecord, UserId, XpSkipReason};
use tracing::{debug, info, warn};

pub mod names {
    pub const COMPLETION_RECORDED: &str = "completion_recorded";
    pub const XP_AWARDED: &str = "xp_awarded";
    pub const XP_AWARD_SKIPPED: &str = "xp_award_skipped";
    pub const ACHIEVEMENT_UNLOCKED: &str = "achievement_unlocked";
    pub const STREAK_UPDATED: &str = "streak_updated";
}

pub fn completion_recorded(record: &ProgressRecord) {
    info!(
        event = names::COMPLETION_RECORDED,
        user_id = %record.user_id,
        lesson_id = %record.lesson_id,
        score = ?record.score,
        "lesson completed"
    );
}

pub fn xp_awarded(user_id: UserId, lesson_id: LessonId, amount: u32, total: u64) {
    info!(
        event = names::XP_AWARDED,
        user_id = %user_id,
        lesson_id = %lesson_id,
        amount,
        total,
        "xp awarded"
    );
}

/// `loud` selects WARN over DEBUG.
pub fn xp_award_skipped(user_id: UserId, lesson_id: LessonId, reason: XpSkipReason, loud: bool) {
    if loud {
        warn!(
            event = names::XP_AWARD_SKIPPED,
            user_id = %user_id,
            lesson_id = %lesson_id,
            reason = ?reason,
            "xp award skipped"
        );
    } else {
        debug!(
            event = names::XP_AWARD_SKIPPED,
            user_id = %user_id,
            lesson_id = %lesson_id,
            reason = ?reason,
            "xp award skipped"
        );
    }
}

pub fn streak_updated(streak: &Streak) {
    info!(
        event = names::STREAK_UPDATED,
        user_id = %streak.user_id,
        current_streak = streak.current_streak,
        longest_streak = streak.longest_streak,
        last_active_date = %streak.last_active_date,
        "streak updated"
    );
}

pub fn achievement_unlocked(unlock: &UnlockRecord) {
    info!(
        event = names::ACHIEVEMENT_UNLOCKED,
        user_id = %unlock.user_id,
        achievement_id = %unlock.achievement_id,
        unlocked_at = %unlock.unlocked_at.to_rfc3339(),
        "achievement unlocked"
    );
}
