//! Completed lessons per cuisine, resolved through lesson → skill → cuisine.

use std::collections::HashMap;

use mise_core::errors::MiseResult;
use mise_core::models::{CuisineId, ProgressRecord, SkillId};
use mise_core::traits::IReferenceCatalog;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CuisineTally {
    pub counts: HashMap<CuisineId, u32>,
    /// Completed lessons whose lesson or skill could not be resolved.
    pub unresolved: u32,
}

/// Unresolvable lessons and skills are dropped from the count, never an error.
pub fn tally_by_cuisine<S>(catalog: &S, completed: &[ProgressRecord]) -> MiseResult<CuisineTally>
where
    S: IReferenceCatalog + ?Sized,
{
    let mut tally = CuisineTally::default();
    let mut skill_cuisine: HashMap<SkillId, Option<CuisineId>> = HashMap::new();

    for record in completed {
        let Some(lesson) = catalog.get_lesson(record.lesson_id)? else {
            debug!(lesson_id = %record.lesson_id, "completed lesson not in catalog");
            tally.unresolved += 1;
            continue;
        };

        let cuisine = match skill_cuisine.get(&lesson.skill_id) {
            Some(cached) => *cached,
            None => {
                let resolved = catalog.get_skill(lesson.skill_id)?.map(|s| s.cuisine_id);
                skill_cuisine.insert(lesson.skill_id, resolved);
                resolved
            }
        };

        match cuisine {
            Some(cuisine_id) => *tally.counts.entry(cuisine_id).or_insert(0) += 1,
            None => {
                debug!(
                    lesson_id = %lesson.id,
                    skill_id = %lesson.skill_id,
                    "lesson skill not in catalog"
                );
                tally.unresolved += 1;
            }
        }
    }
    Ok(tally)
}
