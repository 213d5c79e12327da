//! Benchmarks: progress upsert, completed-progress listing, unit-of-work overhead.

use chrono::Utc;
use criterion::{criterion_group, criterion_main, Criterion};

use mise_core::models::{LessonId, ProgressRecord, ProgressStatus, UserId};
use mise_core::traits::{in_transaction, IProgressStore, IUserLedger};
use mise_storage::StorageEngine;

fn record(lesson: i64, status: ProgressStatus) -> ProgressRecord {
    let now = Utc::now();
    ProgressRecord {
        user_id: UserId(1),
        lesson_id: LessonId(lesson),
        status,
        score: Some(80),
        created_at: now,
        updated_at: now,
        completed_at: status.is_completed().then_some(now),
    }
}

fn bench_upsert(c: &mut Criterion) {
    let engine = StorageEngine::open_in_memory().unwrap();
    let mut lesson = 0i64;
    c.bench_function("upsert_progress", |b| {
        b.iter(|| {
            lesson = (lesson + 1) % 500;
            engine
                .upsert_progress(&record(lesson, ProgressStatus::InProgress))
                .unwrap();
        })
    });
}

fn bench_list_completed(c: &mut Criterion) {
    let engine = StorageEngine::open_in_memory().unwrap();
    for lesson in 0..500 {
        let status = if lesson % 2 == 0 {
            ProgressStatus::Completed
        } else {
            ProgressStatus::InProgress
        };
        engine.upsert_progress(&record(lesson, status)).unwrap();
    }
    c.bench_function("list_completed_progress_500", |b| {
        b.iter(|| engine.list_completed_progress(UserId(1)).unwrap())
    });
}

fn bench_transaction(c: &mut Criterion) {
    let engine = StorageEngine::open_in_memory().unwrap();
    engine.create_user(UserId(1)).unwrap();
    c.bench_function("xp_read_modify_write_tx", |b| {
        b.iter(|| {
            in_transaction(&engine, |tx| {
                let xp = tx.get_user_xp(UserId(1))?.unwrap_or(0);
                tx.set_user_xp(UserId(1), xp + 1)
            })
            .unwrap()
        })
    });
}

criterion_group!(benches, bench_upsert, bench_list_completed, bench_transaction);
criterion_main!(benches);
