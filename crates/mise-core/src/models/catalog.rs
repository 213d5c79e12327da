//! Read-only curriculum reference data: cuisine → skill → lesson.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::ids::{CuisineId, LessonId, SkillId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Cuisine {
    pub id: CuisineId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Skill {
    pub id: SkillId,
    pub cuisine_id: CuisineId,
    pub name: String,
    #[serde(default)]
    pub order_index: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Lesson {
    pub id: LessonId,
    pub skill_id: SkillId,
    pub name: String,
    #[serde(default)]
    pub order_index: i32,
    /// XP granted on the first completion of this lesson.
    #[serde(default)]
    pub xp_reward: u32,
}

/// A full curriculum snapshot, used to install reference data into a store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Curriculum {
    pub cuisines: Vec<Cuisine>,
    pub skills: Vec<Skill>,
    pub lessons: Vec<Lesson>,
}
