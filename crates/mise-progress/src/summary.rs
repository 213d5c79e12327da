//! Completion summaries per skill and per cuisine.

use std::collections::HashSet;

use mise_core::errors::MiseResult;
use mise_core::models::{CompletionSummary, CuisineId, Lesson, LessonId, SkillId, UserId};
use mise_core::traits::{IProgressStore, IReferenceCatalog};

pub fn skill_summary<S>(store: &S, user_id: UserId, skill_id: SkillId) -> MiseResult<CompletionSummary>
where
    S: IProgressStore + IReferenceCatalog + ?Sized,
{
    let lessons = store.lessons_in_skill(skill_id)?;
    let completed = completed_lesson_ids(store, user_id)?;
    Ok(summarize(&lessons, &completed))
}

pub fn cuisine_summary<S>(
    store: &S,
    user_id: UserId,
    cuisine_id: CuisineId,
) -> MiseResult<CompletionSummary>
where
    S: IProgressStore + IReferenceCatalog + ?Sized,
{
    let mut lessons = Vec::new();
    for skill in store.skills_in_cuisine(cuisine_id)? {
        lessons.extend(store.lessons_in_skill(skill.id)?);
    }
    let completed = completed_lesson_ids(store, user_id)?;
    Ok(summarize(&lessons, &completed))
}

fn completed_lesson_ids<S>(store: &S, user_id: UserId) -> MiseResult<HashSet<LessonId>>
where
    S: IProgressStore + ?Sized,
{
    Ok(store
        .list_completed_progress(user_id)?
        .into_iter()
        .map(|r| r.lesson_id)
        .collect())
}

fn summarize(lessons: &[Lesson], completed: &HashSet<LessonId>) -> CompletionSummary {
    let total = lessons.len() as u32;
    let done = lessons.iter().filter(|l| completed.contains(&l.id)).count() as u32;
    CompletionSummary::from_counts(done, total)
}
