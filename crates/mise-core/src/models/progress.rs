use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::ids::{LessonId, UserId};
use crate::constants::{STATUS_COMPLETED, STATUS_IN_PROGRESS, STATUS_NOT_STARTED};
use crate::errors::MiseError;

/// Where a learner stands on a lesson.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ProgressStatus {
    NotStarted,
    InProgress,
    Completed,
}

impl ProgressStatus {
    pub const ALL: [ProgressStatus; 3] = [Self::NotStarted, Self::InProgress, Self::Completed];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::NotStarted => STATUS_NOT_STARTED,
            Self::InProgress => STATUS_IN_PROGRESS,
            Self::Completed => STATUS_COMPLETED,
        }
    }

    pub fn is_completed(self) -> bool {
        self == Self::Completed
    }
}

impl FromStr for ProgressStatus {
    type Err = MiseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            STATUS_NOT_STARTED => Ok(Self::NotStarted),
            STATUS_IN_PROGRESS => Ok(Self::InProgress),
            STATUS_COMPLETED => Ok(Self::Completed),
            other => Err(MiseError::InvalidStatus {
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for ProgressStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One learner's state on one lesson. Identity is `(user_id, lesson_id)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProgressRecord {
    pub user_id: UserId,
    pub lesson_id: LessonId,
    pub status: ProgressStatus,
    /// Optional quiz/lesson score as reported by the client.
    pub score: Option<i32>,
    /// Set once, when the record is first created.
    pub created_at: DateTime<Utc>,
    /// Refreshed on every write.
    pub updated_at: DateTime<Utc>,
    /// Set on the first completion, never cleared or moved afterwards.
    pub completed_at: Option<DateTime<Utc>>,
}

impl ProgressRecord {
    /// Whether this lesson has ever produced a completion event.
    pub fn has_completed_once(&self) -> bool {
        self.completed_at.is_some()
    }
}
