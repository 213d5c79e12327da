//! Progress reconciler: merge a submitted status into the stored record and
//! decide whether this submission is a first-time completion.

use chrono::{DateTime, Utc};

use mise_core::errors::MiseResult;
use mise_core::models::{LessonId, ProgressRecord, ProgressStatus, UserId};
use mise_core::traits::IProgressStore;

/// Result of reconciling one submission.
#[derive(Debug, Clone, PartialEq)]
pub struct Reconciled {
    pub record: ProgressRecord,
    /// First-ever completion of this lesson. Gates the XP award.
    pub just_completed: bool,
    /// Status moved into `completed` from anything else, including a
    /// re-completion after a regression. Gates streak and evaluation.
    pub entered_completed: bool,
}

/// Pure merge. Status and score are always overwritten.
///
/// A submission is a first completion only when it is `completed` and the lesson
/// has never completed before: a record that completed once keeps its
/// `completed_at`, so moving back to `in_progress` and completing again does not
/// earn XP twice. That re-completion still sets `entered_completed`.
pub fn reconcile(
    existing: Option<&ProgressRecord>,
    user_id: UserId,
    lesson_id: LessonId,
    status: ProgressStatus,
    score: Option<i32>,
    now: DateTime<Utc>,
) -> Reconciled {
    match existing {
        None => {
            let just_completed = status.is_completed();
            Reconciled {
                record: ProgressRecord {
                    user_id,
                    lesson_id,
                    status,
                    score,
                    created_at: now,
                    updated_at: now,
                    completed_at: just_completed.then_some(now),
                },
                just_completed,
                entered_completed: just_completed,
            }
        }
        Some(previous) => {
            let entered_completed = status.is_completed() && !previous.status.is_completed();
            let just_completed = entered_completed && !previous.has_completed_once();
            let completed_at = if just_completed {
                Some(now)
            } else {
                previous.completed_at
            };
            Reconciled {
                record: ProgressRecord {
                    user_id,
                    lesson_id,
                    status,
                    score,
                    created_at: previous.created_at,
                    updated_at: now,
                    completed_at,
                },
                just_completed,
                entered_completed,
            }
        }
    }
}

/// Read, merge, and persist against `store`. Run inside a unit of work so the
/// read and the write observe the same state.
pub fn submit<S>(
    store: &S,
    user_id: UserId,
    lesson_id: LessonId,
    status: ProgressStatus,
    score: Option<i32>,
    now: DateTime<Utc>,
) -> MiseResult<Reconciled>
where
    S: IProgressStore + ?Sized,
{
    let existing = store.get_progress(user_id, lesson_id)?;
    let reconciled = reconcile(existing.as_ref(), user_id, lesson_id, status, score, now);
    store.upsert_progress(&reconciled.record)?;
    Ok(reconciled)
}
