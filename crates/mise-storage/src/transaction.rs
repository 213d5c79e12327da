//! Store contracts over one open SQLite transaction.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use rusqlite::Connection;

use mise_core::errors::MiseResult;
use mise_core::models::{
    AchievementDefinition, AchievementId, CuisineId, Lesson, LessonId, ProgressRecord, Skill,
    SkillId, Streak, UnlockRecord, UserId,
};
use mise_core::traits::{
    IAchievementCatalog, IAchievementStore, IProgressStore, IReferenceCatalog, IStreakStore,
    IUserLedger,
};

use crate::queries::{
    achievement_ops, catalog_ops, ledger_ops, progress_ops, streak_ops, unlock_ops,
};

/// Borrowed view of a connection inside `BEGIN IMMEDIATE … COMMIT`.
/// Reads see the transaction's own uncommitted writes.
pub struct StoreTransaction<'conn> {
    conn: &'conn Connection,
}

impl<'conn> StoreTransaction<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl IProgressStore for StoreTransaction<'_> {
    fn get_progress(
        &self,
        user_id: UserId,
        lesson_id: LessonId,
    ) -> MiseResult<Option<ProgressRecord>> {
        progress_ops::get_progress(self.conn, user_id, lesson_id)
    }

    fn upsert_progress(&self, record: &ProgressRecord) -> MiseResult<()> {
        progress_ops::upsert_progress(self.conn, record)
    }

    fn list_progress(&self, user_id: UserId) -> MiseResult<Vec<ProgressRecord>> {
        progress_ops::list_progress(self.conn, user_id)
    }

    fn list_completed_progress(&self, user_id: UserId) -> MiseResult<Vec<ProgressRecord>> {
        progress_ops::list_completed_progress(self.conn, user_id)
    }
}

impl IUserLedger for StoreTransaction<'_> {
    fn get_user_xp(&self, user_id: UserId) -> MiseResult<Option<u64>> {
        ledger_ops::get_user_xp(self.conn, user_id)
    }

    fn set_user_xp(&self, user_id: UserId, xp: u64) -> MiseResult<()> {
        ledger_ops::set_user_xp(self.conn, user_id, xp)
    }
}

impl IStreakStore for StoreTransaction<'_> {
    fn get_streak(&self, user_id: UserId) -> MiseResult<Option<Streak>> {
        streak_ops::get_streak(self.conn, user_id)
    }

    fn upsert_streak(&self, streak: &Streak) -> MiseResult<()> {
        streak_ops::upsert_streak(self.conn, streak)
    }
}

impl IAchievementStore for StoreTransaction<'_> {
    fn list_unlocked(&self, user_id: UserId) -> MiseResult<HashSet<AchievementId>> {
        unlock_ops::list_unlocked(self.conn, user_id)
    }

    fn list_unlock_records(&self, user_id: UserId) -> MiseResult<Vec<UnlockRecord>> {
        unlock_ops::list_unlock_records(self.conn, user_id)
    }

    fn insert_unlock(
        &self,
        user_id: UserId,
        achievement_id: AchievementId,
        unlocked_at: DateTime<Utc>,
    ) -> MiseResult<bool> {
        unlock_ops::insert_unlock(self.conn, user_id, achievement_id, unlocked_at)
    }
}

impl IReferenceCatalog for StoreTransaction<'_> {
    fn get_lesson(&self, lesson_id: LessonId) -> MiseResult<Option<Lesson>> {
        catalog_ops::get_lesson(self.conn, lesson_id)
    }

    fn get_skill(&self, skill_id: SkillId) -> MiseResult<Option<Skill>> {
        catalog_ops::get_skill(self.conn, skill_id)
    }

    fn lessons_in_skill(&self, skill_id: SkillId) -> MiseResult<Vec<Lesson>> {
        catalog_ops::lessons_in_skill(self.conn, skill_id)
    }

    fn skills_in_cuisine(&self, cuisine_id: CuisineId) -> MiseResult<Vec<Skill>> {
        catalog_ops::skills_in_cuisine(self.conn, cuisine_id)
    }
}

impl IAchievementCatalog for StoreTransaction<'_> {
    fn list_achievements(&self) -> MiseResult<Vec<AchievementDefinition>> {
        achievement_ops::list_achievements(self.conn)
    }
}
