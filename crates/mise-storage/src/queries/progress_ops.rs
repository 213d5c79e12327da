//! Get, upsert, and list progress records.

use std::str::FromStr;

use rusqlite::{params, Connection, OptionalExtension};

use mise_core::errors::MiseResult;
use mise_core::models::{LessonId, ProgressRecord, ProgressStatus, UserId};

use super::parse_dt;
use crate::to_storage_err;

const SELECT_COLUMNS: &str =
    "SELECT user_id, lesson_id, status, score, created_at, updated_at, completed_at
     FROM user_progress";

pub fn get_progress(
    conn: &Connection,
    user_id: UserId,
    lesson_id: LessonId,
) -> MiseResult<Option<ProgressRecord>> {
    let mut stmt = conn
        .prepare(&format!("{SELECT_COLUMNS} WHERE user_id = ?1 AND lesson_id = ?2"))
        .map_err(|e| to_storage_err(e.to_string()))?;

    let result = stmt
        .query_row(params![user_id.0, lesson_id.0], |row| Ok(row_to_record(row)))
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;

    result.transpose()
}

/// Insert or update the row for `(record.user_id, record.lesson_id)`.
///
/// `created_at` is only written on insert. `completed_at` is only written while
/// it is still NULL, so a stored completion time can never be cleared or moved.
pub fn upsert_progress(conn: &Connection, record: &ProgressRecord) -> MiseResult<()> {
    conn.execute(
        "INSERT INTO user_progress
            (user_id, lesson_id, status, score, created_at, updated_at, completed_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
         ON CONFLICT (user_id, lesson_id) DO UPDATE SET
            status       = excluded.status,
            score        = excluded.score,
            updated_at   = excluded.updated_at,
            completed_at = COALESCE(user_progress.completed_at, excluded.completed_at)",
        params![
            record.user_id.0,
            record.lesson_id.0,
            record.status.as_str(),
            record.score,
            record.created_at.to_rfc3339(),
            record.updated_at.to_rfc3339(),
            record.completed_at.map(|t| t.to_rfc3339()),
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// All records for a user, ordered by lesson.
pub fn list_progress(conn: &Connection, user_id: UserId) -> MiseResult<Vec<ProgressRecord>> {
    query_records(
        conn,
        &format!("{SELECT_COLUMNS} WHERE user_id = ?1 ORDER BY lesson_id"),
        user_id,
    )
}

/// Records for a user whose current status is `completed`.
pub fn list_completed_progress(
    conn: &Connection,
    user_id: UserId,
) -> MiseResult<Vec<ProgressRecord>> {
    query_records(
        conn,
        &format!("{SELECT_COLUMNS} WHERE user_id = ?1 AND status = 'completed' ORDER BY lesson_id"),
        user_id,
    )
}

/// Number of progress rows across all users.
pub fn count_progress(conn: &Connection) -> MiseResult<u64> {
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM user_progress", [], |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(count as u64)
}

fn query_records(conn: &Connection, sql: &str, user_id: UserId) -> MiseResult<Vec<ProgressRecord>> {
    let mut stmt = conn
        .prepare(sql)
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map(params![user_id.0], |row| Ok(row_to_record(row)))
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut records = Vec::new();
    for row in rows {
        records.push(row.map_err(|e| to_storage_err(e.to_string()))??);
    }
    Ok(records)
}

fn row_to_record(row: &rusqlite::Row<'_>) -> MiseResult<ProgressRecord> {
    let status_str: String = row.get(2).map_err(|e| to_storage_err(e.to_string()))?;
    let created_at: String = row.get(4).map_err(|e| to_storage_err(e.to_string()))?;
    let updated_at: String = row.get(5).map_err(|e| to_storage_err(e.to_string()))?;
    let completed_at: Option<String> = row.get(6).map_err(|e| to_storage_err(e.to_string()))?;

    Ok(ProgressRecord {
        user_id: UserId(row.get(0).map_err(|e| to_storage_err(e.to_string()))?),
        lesson_id: LessonId(row.get(1).map_err(|e| to_storage_err(e.to_string()))?),
        status: ProgressStatus::from_str(&status_str)?,
        score: row.get(3).map_err(|e| to_storage_err(e.to_string()))?,
        created_at: parse_dt(&created_at)?,
        updated_at: parse_dt(&updated_at)?,
        completed_at: completed_at.as_deref().map(parse_dt).transpose()?,
    })
}
