//! Parallel submissions against a file-backed store.

use std::sync::{Arc, Barrier};

use mise_core::config::ProgressConfig;
use mise_core::models::{AchievementId, LessonId, ProgressStatus, UserId};
use mise_progress::ProgressEngine;
use mise_storage::StorageEngine;

fn file_backed(dir: &tempfile::TempDir) -> Arc<ProgressEngine> {
    let storage = Arc::new(StorageEngine::open(&dir.path().join("progress.db")).unwrap());
    storage
        .install_curriculum(&test_fixtures::italian_french_curriculum())
        .unwrap();
    storage
        .install_achievements(&test_fixtures::cuisine_milestones())
        .unwrap();
    for user in 1..=4 {
        storage.create_user(UserId(user)).unwrap();
    }
    Arc::new(ProgressEngine::new(storage, ProgressConfig::default()))
}

#[test]
fn same_lesson_from_many_threads_awards_once() {
    let dir = tempfile::tempdir().unwrap();
    let engine = file_backed(&dir);
    let threads = 8;
    let barrier = Arc::new(Barrier::new(threads));

    let handles: Vec<_> = (0..threads)
        .map(|_| {
            let engine = Arc::clone(&engine);
            let barrier = Arc::clone(&barrier);
            std::thread::spawn(move || {
                barrier.wait();
                engine
                    .submit_progress(UserId(1), LessonId(100), ProgressStatus::Completed, Some(99))
                    .unwrap()
            })
        })
        .collect();

    let outcomes: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    let completions = outcomes.iter().filter(|o| o.just_completed).count();
    assert_eq!(completions, 1);
    let unlocks: usize = outcomes.iter().map(|o| o.unlocked.len()).sum();
    assert_eq!(unlocks, 1);
    assert_eq!(engine.user_xp(UserId(1)).unwrap(), Some(10));
}

#[test]
fn different_users_progress_independently() {
    let dir = tempfile::tempdir().unwrap();
    let engine = file_backed(&dir);

    let handles: Vec<_> = (1..=4)
        .map(|user| {
            let engine = Arc::clone(&engine);
            std::thread::spawn(move || {
                for lesson in [100, 101, 103, 200] {
                    engine
                        .submit_progress(
                            UserId(user),
                            LessonId(lesson),
                            ProgressStatus::Completed,
                            None,
                        )
                        .unwrap();
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    for user in 1..=4 {
        assert_eq!(engine.user_xp(UserId(user)).unwrap(), Some(40));
        let unlocked: Vec<_> = engine
            .achievements_for_user(UserId(user))
            .unwrap()
            .into_iter()
            .filter(|a| a.unlocked)
            .map(|a| a.id)
            .collect();
        assert_eq!(
            unlocked,
            vec![AchievementId(1), AchievementId(2), AchievementId(3)]
        );
    }
}
