//! Curriculum reference data: lookups used by the engine, plus bulk install.

use rusqlite::{params, Connection, OptionalExtension};

use mise_core::errors::MiseResult;
use mise_core::models::{CuisineId, Curriculum, Lesson, LessonId, Skill, SkillId};

use crate::to_storage_err;

pub fn get_lesson(conn: &Connection, lesson_id: LessonId) -> MiseResult<Option<Lesson>> {
    conn.query_row(
        "SELECT id, skill_id, name, order_index, xp_reward FROM lessons WHERE id = ?1",
        params![lesson_id.0],
        row_to_lesson,
    )
    .optional()
    .map_err(|e| to_storage_err(e.to_string()))
}

pub fn get_skill(conn: &Connection, skill_id: SkillId) -> MiseResult<Option<Skill>> {
    conn.query_row(
        "SELECT id, cuisine_id, name, order_index FROM skills WHERE id = ?1",
        params![skill_id.0],
        row_to_skill,
    )
    .optional()
    .map_err(|e| to_storage_err(e.to_string()))
}

pub fn lessons_in_skill(conn: &Connection, skill_id: SkillId) -> MiseResult<Vec<Lesson>> {
    let mut stmt = conn
        .prepare(
            "SELECT id, skill_id, name, order_index, xp_reward FROM lessons
             WHERE skill_id = ?1 ORDER BY order_index, id",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    let lessons = stmt
        .query_map(params![skill_id.0], row_to_lesson)
        .map_err(|e| to_storage_err(e.to_string()))?
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(lessons)
}

pub fn skills_in_cuisine(conn: &Connection, cuisine_id: CuisineId) -> MiseResult<Vec<Skill>> {
    let mut stmt = conn
        .prepare(
            "SELECT id, cuisine_id, name, order_index FROM skills
             WHERE cuisine_id = ?1 ORDER BY order_index, id",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    let skills = stmt
        .query_map(params![cuisine_id.0], row_to_skill)
        .map_err(|e| to_storage_err(e.to_string()))?
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(skills)
}

/// Insert or replace every cuisine, skill and lesson of `curriculum`.
/// Wrapped in a transaction: the catalog is replaced all-or-nothing.
pub fn install_curriculum(conn: &Connection, curriculum: &Curriculum) -> MiseResult<usize> {
    let tx = conn
        .unchecked_transaction()
        .map_err(|e| to_storage_err(format!("install_curriculum begin: {e}")))?;

    let mut written = 0;
    for cuisine in &curriculum.cuisines {
        written += tx
            .execute(
                "INSERT OR REPLACE INTO cuisines (id, name) VALUES (?1, ?2)",
                params![cuisine.id.0, cuisine.name],
            )
            .map_err(|e| to_storage_err(e.to_string()))?;
    }
    for skill in &curriculum.skills {
        written += tx
            .execute(
                "INSERT OR REPLACE INTO skills (id, cuisine_id, name, order_index)
                 VALUES (?1, ?2, ?3, ?4)",
                params![skill.id.0, skill.cuisine_id.0, skill.name, skill.order_index],
            )
            .map_err(|e| to_storage_err(e.to_string()))?;
    }
    for lesson in &curriculum.lessons {
        written += tx
            .execute(
                "INSERT OR REPLACE INTO lessons (id, skill_id, name, order_index, xp_reward)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    lesson.id.0,
                    lesson.skill_id.0,
                    lesson.name,
                    lesson.order_index,
                    lesson.xp_reward
                ],
            )
            .map_err(|e| to_storage_err(e.to_string()))?;
    }

    tx.commit()
        .map_err(|e| to_storage_err(format!("install_curriculum commit: {e}")))?;
    Ok(written)
}

fn row_to_lesson(row: &rusqlite::Row<'_>) -> rusqlite::Result<Lesson> {
    Ok(Lesson {
        id: LessonId(row.get(0)?),
        skill_id: SkillId(row.get(1)?),
        name: row.get(2)?,
        order_index: row.get(3)?,
        xp_reward: row.get(4)?,
    })
}

fn row_to_skill(row: &rusqlite::Row<'_>) -> rusqlite::Result<Skill> {
    Ok(Skill {
        id: SkillId(row.get(0)?),
        cuisine_id: CuisineId(row.get(1)?),
        name: row.get(2)?,
        order_index: row.get(3)?,
    })
}
