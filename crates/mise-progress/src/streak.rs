//! Daily activity streak, advanced on each lesson completion.
//!
//! Days are UTC calendar dates. Completing on the day after `last_active_date`
//! extends the streak; any longer gap restarts it at 1.

use chrono::{DateTime, NaiveDate, Utc};

use mise_core::errors::MiseResult;
use mise_core::models::{Streak, UserId};
use mise_core::traits::IStreakStore;

/// Pure step. `None` means the stored streak is already current for `day`.
pub fn advance(existing: Option<&Streak>, user_id: UserId, day: NaiveDate) -> Option<Streak> {
    let Some(previous) = existing else {
        return Some(Streak {
            user_id,
            current_streak: 1,
            longest_streak: 1,
            last_active_date: day,
        });
    };

    if day <= previous.last_active_date {
        return None;
    }

    let current_streak = if previous.last_active_date.succ_opt() == Some(day) {
        previous.current_streak.saturating_add(1)
    } else {
        1
    };
    Some(Streak {
        user_id,
        current_streak,
        longest_streak: previous.longest_streak.max(current_streak),
        last_active_date: day,
    })
}

/// Read, advance, and persist. Returns the new streak only when it changed.
pub fn record_activity<S>(
    store: &S,
    user_id: UserId,
    now: DateTime<Utc>,
) -> MiseResult<Option<Streak>>
where
    S: IStreakStore + ?Sized,
{
    let existing = store.get_streak(user_id)?;
    let Some(next) = advance(existing.as_ref(), user_id, now.date_naive()) else {
        return Ok(None);
    };
    store.upsert_streak(&next)?;
    Ok(Some(next))
}

#[cfg(test)]
mod tests {
    use super::*;

    const USER: UserId = UserId(1);

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, d).unwrap()
    }

    fn streak(current: u32, longest: u32, last: u32) -> Streak {
        Streak {
            user_id: USER,
            current_streak: current,
            longest_streak: longest,
            last_active_date: day(last),
        }
    }

    #[test]
    fn first_activity_starts_at_one() {
        assert_eq!(advance(None, USER, day(1)), Some(streak(1, 1, 1)));
    }

    #[test]
    fn same_day_leaves_streak_unchanged() {
        assert_eq!(advance(Some(&streak(3, 4, 5)), USER, day(5)), None);
    }

    #[test]
    fn next_day_extends_and_raises_longest() {
        assert_eq!(
            advance(Some(&streak(4, 4, 5)), USER, day(6)),
            Some(streak(5, 5, 6))
        );
    }

    #[test]
    fn next_day_below_longest_keeps_longest() {
        assert_eq!(
            advance(Some(&streak(2, 7, 5)), USER, day(6)),
            Some(streak(3, 7, 6))
        );
    }

    #[test]
    fn gap_restarts_at_one_and_keeps_longest() {
        assert_eq!(
            advance(Some(&streak(6, 6, 5)), USER, day(8)),
            Some(streak(1, 6, 8))
        );
    }

    #[test]
    fn earlier_day_is_ignored() {
        assert_eq!(advance(Some(&streak(2, 2, 5)), USER, day(3)), None);
    }

    #[test]
    fn month_boundary_counts_as_consecutive() {
        let last = Streak {
            user_id: USER,
            current_streak: 1,
            longest_streak: 1,
            last_active_date: NaiveDate::from_ymd_opt(2026, 2, 28).unwrap(),
        };
        let next = advance(Some(&last), USER, day(1)).unwrap();
        assert_eq!(next.current_streak, 2);
    }
}
