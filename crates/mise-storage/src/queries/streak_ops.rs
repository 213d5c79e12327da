//! Daily activity streaks in `streaks`. Dates are stored as `YYYY-MM-DD`.

use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension};

use mise_core::errors::MiseResult;
use mise_core::models::{Streak, UserId};

use crate::to_storage_err;

const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn get_streak(conn: &Connection, user_id: UserId) -> MiseResult<Option<Streak>> {
    let row: Option<(u32, u32, String)> = conn
        .query_row(
            "SELECT current_streak, longest_streak, last_active_date
             FROM streaks WHERE user_id = ?1",
            params![user_id.0],
            |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
        )
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;

    row.map(|(current_streak, longest_streak, date)| {
        let last_active_date = NaiveDate::parse_from_str(&date, DATE_FORMAT)
            .map_err(|e| to_storage_err(format!("parse date '{date}': {e}")))?;
        Ok(Streak {
            user_id,
            current_streak,
            longest_streak,
            last_active_date,
        })
    })
    .transpose()
}

pub fn upsert_streak(conn: &Connection, streak: &Streak) -> MiseResult<()> {
    conn.execute(
        "INSERT INTO streaks (user_id, current_streak, longest_streak, last_active_date)
         VALUES (?1, ?2, ?3, ?4)
         ON CONFLICT (user_id) DO UPDATE SET
             current_streak   = excluded.current_streak,
             longest_streak   = excluded.longest_streak,
             last_active_date = excluded.last_active_date",
        params![
            streak.user_id.0,
            streak.current_streak,
            streak.longest_streak,
            streak.last_active_date.format(DATE_FORMAT).to_string(),
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
