//! XP ledger rows and achievement unlock rows.

use chrono::Utc;
use mise_core::errors::MiseError;
use mise_core::models::{AchievementId, UserId};
use mise_core::traits::{IAchievementStore, IUserLedger};
use mise_storage::StorageEngine;

fn engine_with_milestones() -> StorageEngine {
    let engine = StorageEngine::open_in_memory().unwrap();
    engine
        .install_achievements(&test_fixtures::cuisine_milestones())
        .unwrap();
    engine
}

#[test]
fn unknown_user_has_no_ledger_row() {
    let engine = StorageEngine::open_in_memory().unwrap();
    assert_eq!(engine.get_user_xp(UserId(7)).unwrap(), None);
}

#[test]
fn create_user_starts_at_zero_and_is_idempotent() {
    let engine = StorageEngine::open_in_memory().unwrap();
    assert!(engine.create_user(UserId(7)).unwrap());
    assert!(!engine.create_user(UserId(7)).unwrap());
    assert_eq!(engine.get_user_xp(UserId(7)).unwrap(), Some(0));
}

#[test]
fn set_user_xp_overwrites_total() {
    let engine = StorageEngine::open_in_memory().unwrap();
    engine.create_user(UserId(7)).unwrap();
    engine.set_user_xp(UserId(7), 25).unwrap();
    engine.set_user_xp(UserId(7), 40).unwrap();
    assert_eq!(engine.get_user_xp(UserId(7)).unwrap(), Some(40));
}

#[test]
fn set_user_xp_on_missing_user_is_not_found() {
    let engine = StorageEngine::open_in_memory().unwrap();
    let err = engine.set_user_xp(UserId(99), 10).unwrap_err();
    assert!(matches!(err, MiseError::NotFound { .. }));
}

#[test]
fn set_user_xp_rejects_values_beyond_storage_range() {
    let engine = StorageEngine::open_in_memory().unwrap();
    engine.create_user(UserId(7)).unwrap();
    let err = engine.set_user_xp(UserId(7), u64::MAX).unwrap_err();
    assert!(matches!(err, MiseError::StorageError(_)));
    assert_eq!(engine.get_user_xp(UserId(7)).unwrap(), Some(0));
}

#[test]
fn insert_unlock_is_idempotent() {
    let engine = engine_with_milestones();
    let first_at = Utc::now();
    assert!(engine.insert_unlock(UserId(7), AchievementId(1), first_at).unwrap());
    assert!(!engine
        .insert_unlock(UserId(7), AchievementId(1), Utc::now())
        .unwrap());

    let records = engine.list_unlock_records(UserId(7)).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].unlocked_at.timestamp(), first_at.timestamp());
}

#[test]
fn list_unlocked_is_per_user() {
    let engine = engine_with_milestones();
    engine.insert_unlock(UserId(7), AchievementId(1), Utc::now()).unwrap();
    engine.insert_unlock(UserId(7), AchievementId(3), Utc::now()).unwrap();
    engine.insert_unlock(UserId(8), AchievementId(2), Utc::now()).unwrap();

    let unlocked = engine.list_unlocked(UserId(7)).unwrap();
    assert_eq!(unlocked.len(), 2);
    assert!(unlocked.contains(&AchievementId(1)));
    assert!(unlocked.contains(&AchievementId(3)));
    assert!(!unlocked.contains(&AchievementId(2)));
}

#[test]
fn unlock_for_undefined_achievement_is_rejected() {
    let engine = engine_with_milestones();
    let result = engine.insert_unlock(UserId(7), AchievementId(404), Utc::now());
    assert!(result.is_err());
    assert!(engine.list_unlocked(UserId(7)).unwrap().is_empty());
}
