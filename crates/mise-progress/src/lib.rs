//! # mise-progress
//!
//! Lesson progress pipeline: reconcile, then XP award (exactly once per first
//! completion) and daily streak, then cuisine achievement evaluation. Read-side
//! views for progress, achievements, streaks, and completion summaries.

pub mod bootstrap;
pub mod engine;
pub mod evaluator;
pub mod reconciler;
pub mod streak;
pub mod summary;
pub mod xp;

pub use bootstrap::open_from_config;
pub use engine::ProgressEngine;
