use crate::errors::MiseResult;
use crate::models::{CuisineId, Lesson, LessonId, Skill, SkillId};

/// Read-only curriculum lookups. Never mutated by the engine.
pub trait IReferenceCatalog {
    fn get_lesson(&self, lesson_id: LessonId) -> MiseResult<Option<Lesson>>;
    fn get_skill(&self, skill_id: SkillId) -> MiseResult<Option<Skill>>;

    /// Lessons of one skill, ordered by `order_index`.
    fn lessons_in_skill(&self, skill_id: SkillId) -> MiseResult<Vec<Lesson>>;
    /// Skills of one cuisine, ordered by `order_index`.
    fn skills_in_cuisine(&self, cuisine_id: CuisineId) -> MiseResult<Vec<Skill>>;
}
