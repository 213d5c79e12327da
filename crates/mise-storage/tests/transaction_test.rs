//! Units of work: commit on Ok, rollback on Err, reads see own writes.

use chrono::Utc;
use mise_core::errors::MiseError;
use mise_core::models::{AchievementId, LessonId, ProgressRecord, ProgressStatus, UserId};
use mise_core::traits::{
    in_transaction, IAchievementStore, IProgressStore, ITransactional, IUserLedger,
};
use mise_storage::StorageEngine;

fn completed(user: i64, lesson: i64) -> ProgressRecord {
    let now = Utc::now();
    ProgressRecord {
        user_id: UserId(user),
        lesson_id: LessonId(lesson),
        status: ProgressStatus::Completed,
        score: Some(100),
        created_at: now,
        updated_at: now,
        completed_at: Some(now),
    }
}

fn engine() -> StorageEngine {
    let engine = StorageEngine::open_in_memory().unwrap();
    engine
        .install_achievements(&test_fixtures::cuisine_milestones())
        .unwrap();
    engine.create_user(UserId(7)).unwrap();
    engine
}

#[test]
fn committed_work_is_visible() {
    let engine = engine();
    engine
        .transaction(&mut |tx| {
            tx.upsert_progress(&completed(7, 100))?;
            tx.set_user_xp(UserId(7), 10)?;
            Ok(())
        })
        .unwrap();

    assert!(engine.get_progress(UserId(7), LessonId(100)).unwrap().is_some());
    assert_eq!(engine.get_user_xp(UserId(7)).unwrap(), Some(10));
}

#[test]
fn failed_work_rolls_back_every_write() {
    let engine = engine();
    let result = engine.transaction(&mut |tx| {
        tx.upsert_progress(&completed(7, 100))?;
        tx.set_user_xp(UserId(7), 10)?;
        tx.insert_unlock(UserId(7), AchievementId(1), Utc::now())?;
        Err(MiseError::TransactionAborted {
            reason: "injected".to_string(),
        })
    });

    assert!(matches!(result, Err(MiseError::TransactionAborted { .. })));
    assert!(engine.get_progress(UserId(7), LessonId(100)).unwrap().is_none());
    assert_eq!(engine.get_user_xp(UserId(7)).unwrap(), Some(0));
    assert!(engine.list_unlocked(UserId(7)).unwrap().is_empty());
}

#[test]
fn reads_inside_transaction_see_uncommitted_writes() {
    let engine = engine();
    let seen = in_transaction(&engine, |tx| {
        tx.upsert_progress(&completed(7, 100))?;
        tx.set_user_xp(UserId(7), 10)?;
        Ok((
            tx.list_completed_progress(UserId(7))?.len(),
            tx.get_user_xp(UserId(7))?,
        ))
    })
    .unwrap();
    assert_eq!(seen, (1, Some(10)));
}

#[test]
fn storage_error_inside_work_rolls_back() {
    let engine = engine();
    let result = in_transaction(&engine, |tx| {
        tx.set_user_xp(UserId(7), 10)?;
        // Unknown achievement violates the foreign key.
        tx.insert_unlock(UserId(7), AchievementId(404), Utc::now())
    });
    assert!(result.is_err());
    assert_eq!(engine.get_user_xp(UserId(7)).unwrap(), Some(0));
}

#[test]
fn engine_is_usable_after_rollback() {
    let engine = engine();
    let _ = in_transaction(&engine, |_tx| -> Result<(), MiseError> {
        Err(MiseError::TransactionAborted {
            reason: "first".to_string(),
        })
    });
    in_transaction(&engine, |tx| tx.set_user_xp(UserId(7), 5)).unwrap();
    assert_eq!(engine.get_user_xp(UserId(7)).unwrap(), Some(5));
}
