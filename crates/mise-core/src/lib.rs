//! # mise-core
//!
//! Foundation crate for the Mise progress engine.
//! Defines ids, models, store traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::MiseConfig;
pub use errors::{MiseError, MiseResult};
pub use models::{
    AchievementId, CuisineId, LessonId, ProgressRecord, ProgressStatus, SkillId, UserId,
};
