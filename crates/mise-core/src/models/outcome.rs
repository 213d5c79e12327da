use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::achievement::UnlockRecord;
use super::ids::{LessonId, UserId};
use super::progress::ProgressRecord;
use super::streak::Streak;

/// Why an XP award was skipped. Skips never fail the submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum XpSkipReason {
    UnknownUser(UserId),
    UnknownLesson(LessonId),
}

/// Result of the XP step for a completion event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum XpAward {
    Granted {
        lesson_id: LessonId,
        amount: u32,
        total: u64,
    },
    Skipped {
        reason: XpSkipReason,
    },
}

impl XpAward {
    /// XP actually added to the ledger.
    pub fn granted_amount(&self) -> u32 {
        match self {
            Self::Granted { amount, .. } => *amount,
            Self::Skipped { .. } => 0,
        }
    }
}

/// Everything a caller learns from one progress submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SubmissionOutcome {
    pub record: ProgressRecord,
    /// True only for the first-ever completion of this (user, lesson).
    pub just_completed: bool,
    /// Present only when `just_completed`.
    pub xp: Option<XpAward>,
    /// Achievements unlocked by this submission.
    pub unlocked: Vec<UnlockRecord>,
    /// The user's streak after this submission, when it moved.
    pub streak: Option<Streak>,
}
