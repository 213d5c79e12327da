pub mod achievement;
pub mod catalog;
pub mod ids;
pub mod outcome;
pub mod progress;
pub mod streak;
pub mod summary;

pub use achievement::{AchievementDefinition, AchievementRule, AchievementView, UnlockRecord};
pub use catalog::{Cuisine, Curriculum, Lesson, Skill};
pub use ids::{AchievementId, CuisineId, LessonId, SkillId, UserId};
pub use outcome::{SubmissionOutcome, XpAward, XpSkipReason};
pub use progress::{ProgressRecord, ProgressStatus};
pub use streak::Streak;
pub use summary::CompletionSummary;
