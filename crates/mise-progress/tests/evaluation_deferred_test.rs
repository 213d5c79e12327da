//! Evaluation failure after a committed completion: XP stays, retry is clean.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use mise_core::config::ProgressConfig;
use mise_core::errors::{MiseError, MiseResult, StorageError};
use mise_core::models::{
    AchievementDefinition, AchievementId, CuisineId, Lesson, LessonId, ProgressRecord,
    ProgressStatus, Skill, SkillId, Streak, UnlockRecord, UserId, XpAward,
};
use mise_core::traits::{
    IAchievementCatalog, IAchievementStore, IProgressStore, IReferenceCatalog, IStoreTransaction,
    IStreakStore, ITransactional, IUserLedger,
};
use mise_progress::ProgressEngine;
use mise_storage::StorageEngine;

/// Delegates to a real engine but fails every unit of work after the first
/// `allowed` while `flaky` is set.
struct FlakyStorage {
    inner: StorageEngine,
    allowed: usize,
    started: AtomicUsize,
    flaky: AtomicBool,
}

impl ITransactional for FlakyStorage {
    fn transaction(
        &self,
        work: &mut dyn FnMut(&dyn IStoreTransaction) -> MiseResult<()>,
    ) -> MiseResult<()> {
        let n = self.started.fetch_add(1, Ordering::SeqCst);
        if self.flaky.load(Ordering::SeqCst) && n >= self.allowed {
            return Err(StorageError::SqliteError {
                message: "database is locked".to_string(),
            }
            .into());
        }
        self.inner.transaction(work)
    }
}

impl IProgressStore for FlakyStorage {
    fn get_progress(&self, u: UserId, l: LessonId) -> MiseResult<Option<ProgressRecord>> {
        self.inner.get_progress(u, l)
    }
    fn upsert_progress(&self, r: &ProgressRecord) -> MiseResult<()> {
        self.inner.upsert_progress(r)
    }
    fn list_progress(&self, u: UserId) -> MiseResult<Vec<ProgressRecord>> {
        self.inner.list_progress(u)
    }
    fn list_completed_progress(&self, u: UserId) -> MiseResult<Vec<ProgressRecord>> {
        self.inner.list_completed_progress(u)
    }
}

impl IUserLedger for FlakyStorage {
    fn get_user_xp(&self, u: UserId) -> MiseResult<Option<u64>> {
        self.inner.get_user_xp(u)
    }
    fn set_user_xp(&self, u: UserId, xp: u64) -> MiseResult<()> {
        self.inner.set_user_xp(u, xp)
    }
}

impl IStreakStore for FlakyStorage {
    fn get_streak(&self, u: UserId) -> MiseResult<Option<Streak>> {
        self.inner.get_streak(u)
    }
    fn upsert_streak(&self, s: &Streak) -> MiseResult<()> {
        self.inner.upsert_streak(s)
    }
}

impl IAchievementStore for FlakyStorage {
    fn list_unlocked(&self, u: UserId) -> MiseResult<HashSet<AchievementId>> {
        self.inner.list_unlocked(u)
    }
    fn list_unlock_records(&self, u: UserId) -> MiseResult<Vec<UnlockRecord>> {
        self.inner.list_unlock_records(u)
    }
    fn insert_unlock(&self, u: UserId, a: AchievementId, at: DateTime<Utc>) -> MiseResult<bool> {
        self.inner.insert_unlock(u, a, at)
    }
}

impl IReferenceCatalog for FlakyStorage {
    fn get_lesson(&self, l: LessonId) -> MiseResult<Option<Lesson>> {
        self.inner.get_lesson(l)
    }
    fn get_skill(&self, s: SkillId) -> MiseResult<Option<Skill>> {
        self.inner.get_skill(s)
    }
    fn lessons_in_skill(&self, s: SkillId) -> MiseResult<Vec<Lesson>> {
        self.inner.lessons_in_skill(s)
    }
    fn skills_in_cuisine(&self, c: CuisineId) -> MiseResult<Vec<Skill>> {
        self.inner.skills_in_cuisine(c)
    }
}

impl IAchievementCatalog for FlakyStorage {
    fn list_achievements(&self) -> MiseResult<Vec<AchievementDefinition>> {
        self.inner.list_achievements()
    }
}

fn flaky_engine() -> (Arc<FlakyStorage>, ProgressEngine) {
    let inner = StorageEngine::open_in_memory().unwrap();
    inner
        .install_curriculum(&test_fixtures::italian_french_curriculum())
        .unwrap();
    inner
        .install_achievements(&test_fixtures::cuisine_milestones())
        .unwrap();
    inner.create_user(UserId(7)).unwrap();
    let storage = Arc::new(FlakyStorage {
        inner,
        allowed: 1,
        started: AtomicUsize::new(0),
        flaky: AtomicBool::new(true),
    });
    let engine = ProgressEngine::new(storage.clone(), ProgressConfig::default());
    (storage, engine)
}

#[test]
fn failed_evaluation_keeps_progress_and_xp() {
    let (storage, engine) = flaky_engine();
    let err = engine
        .submit_progress(UserId(7), LessonId(100), ProgressStatus::Completed, None)
        .unwrap_err();

    assert!(err.is_retryable());
    let MiseError::EvaluationDeferred {
        user_id, committed, ..
    } = err
    else {
        panic!("expected EvaluationDeferred");
    };
    assert_eq!(user_id, UserId(7));
    assert!(committed.just_completed);
    assert_eq!(committed.record.lesson_id, LessonId(100));
    assert_eq!(
        committed.xp,
        Some(XpAward::Granted {
            lesson_id: LessonId(100),
            amount: 10,
            total: 10
        })
    );
    assert_eq!(committed.streak.map(|s| s.current_streak), Some(1));
    assert!(committed.unlocked.is_empty());

    assert_eq!(storage.get_user_xp(UserId(7)).unwrap(), Some(10));
    assert_eq!(storage.get_streak(UserId(7)).unwrap().map(|s| s.current_streak), Some(1));
    assert!(storage
        .get_progress(UserId(7), LessonId(100))
        .unwrap()
        .unwrap()
        .has_completed_once());
    assert!(storage.list_unlocked(UserId(7)).unwrap().is_empty());
}

#[test]
fn retry_unlocks_without_reawarding_xp() {
    let (storage, engine) = flaky_engine();
    let _ = engine.submit_progress(UserId(7), LessonId(100), ProgressStatus::Completed, None);
    storage.flaky.store(false, Ordering::SeqCst);

    let unlocked = engine.evaluate_achievements(UserId(7)).unwrap();
    assert_eq!(unlocked.len(), 1);
    assert_eq!(unlocked[0].achievement_id, AchievementId(1));
    assert_eq!(engine.user_xp(UserId(7)).unwrap(), Some(10));

    // Resubmitting the completion does not count as a new completion either.
    let again = engine
        .submit_progress(UserId(7), LessonId(100), ProgressStatus::Completed, None)
        .unwrap();
    assert!(!again.just_completed);
    assert_eq!(engine.user_xp(UserId(7)).unwrap(), Some(10));
}

#[test]
fn failed_first_unit_leaves_nothing_behind() {
    let (storage, engine) = flaky_engine();
    // Burn the one allowed unit of work.
    storage.started.store(1, Ordering::SeqCst);

    let err = engine
        .submit_progress(UserId(7), LessonId(100), ProgressStatus::Completed, None)
        .unwrap_err();
    assert!(matches!(err, MiseError::StorageError(_)));
    assert!(storage.get_progress(UserId(7), LessonId(100)).unwrap().is_none());
    assert_eq!(storage.get_user_xp(UserId(7)).unwrap(), Some(0));
    assert_eq!(storage.get_streak(UserId(7)).unwrap(), None);
}
