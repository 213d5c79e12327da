use crate::errors::MiseResult;
use crate::models::{LessonId, ProgressRecord, UserId};

/// One progress record per (user, lesson).
pub trait IProgressStore {
    fn get_progress(&self, user_id: UserId, lesson_id: LessonId)
        -> MiseResult<Option<ProgressRecord>>;

    /// Insert or replace the record keyed by `(record.user_id, record.lesson_id)`.
    fn upsert_progress(&self, record: &ProgressRecord) -> MiseResult<()>;

    fn list_progress(&self, user_id: UserId) -> MiseResult<Vec<ProgressRecord>>;
    fn list_completed_progress(&self, user_id: UserId) -> MiseResult<Vec<ProgressRecord>>;
}
