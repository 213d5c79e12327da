//! ProgressEngine: orchestrates reconcile, XP award and streak, then
//! achievement evaluation, and serves the read-side views.

use std::collections::HashMap;
use std::str::FromStr;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use mise_core::config::ProgressConfig;
use mise_core::errors::{MiseError, MiseResult};
use mise_core::models::{
    AchievementView, CompletionSummary, CuisineId, LessonId, ProgressRecord, ProgressStatus,
    SkillId, Streak, SubmissionOutcome, UnlockRecord, UserId, XpAward,
};
use mise_core::traits::{in_transaction, IProgressStorage};
use mise_observability::events;
use mise_observability::{evaluation_span, submission_span};

use crate::{evaluator, reconciler, streak, summary, xp};

/// The main progress engine.
///
/// Holds no per-user state: XP totals and unlock sets live behind the store
/// contracts and are only mutated inside units of work.
pub struct ProgressEngine {
    storage: Arc<dyn IProgressStorage>,
    config: ProgressConfig,
}

impl ProgressEngine {
    pub fn new(storage: Arc<dyn IProgressStorage>, config: ProgressConfig) -> Self {
        Self { storage, config }
    }

    pub fn config(&self) -> &ProgressConfig {
        &self.config
    }

    /// Record a progress update for `(user_id, lesson_id)`.
    ///
    /// Reconcile, XP award and streak commit together. Whenever the status moves
    /// into `completed` the achievement evaluation then runs in its own unit of
    /// work; if that fails the committed progress, XP and streak stay, and the
    /// error is [`MiseError::EvaluationDeferred`] carrying the committed outcome.
    /// Retry with [`Self::evaluate_achievements`].
    pub fn submit_progress(
        &self,
        user_id: UserId,
        lesson_id: LessonId,
        status: ProgressStatus,
        score: Option<i32>,
    ) -> MiseResult<SubmissionOutcome> {
        self.submit_progress_at(user_id, lesson_id, status, score, Utc::now())
    }

    /// [`Self::submit_progress`] with an explicit clock. `now` stamps the record,
    /// picks the streak day, and stamps any unlocks.
    pub fn submit_progress_at(
        &self,
        user_id: UserId,
        lesson_id: LessonId,
        status: ProgressStatus,
        score: Option<i32>,
        now: DateTime<Utc>,
    ) -> MiseResult<SubmissionOutcome> {
        let span = submission_span!(user_id, lesson_id, status);
        let _guard = span.enter();

        let (reconciled, xp, streak) = in_transaction(self.storage.as_ref(), |tx| {
            let reconciled = reconciler::submit(tx, user_id, lesson_id, status, score, now)?;
            let xp = if reconciled.just_completed {
                Some(xp::award(tx, user_id, lesson_id)?)
            } else {
                None
            };
            let streak = if reconciled.entered_completed {
                streak::record_activity(tx, user_id, now)?
            } else {
                None
            };
            Ok((reconciled, xp, streak))
        })?;

        let mut outcome = SubmissionOutcome {
            record: reconciled.record,
            just_completed: reconciled.just_completed,
            xp,
            unlocked: Vec::new(),
            streak,
        };
        if !reconciled.entered_completed {
            return Ok(outcome);
        }

        if outcome.just_completed {
            events::completion_recorded(&outcome.record);
        }
        match xp {
            Some(XpAward::Granted {
                lesson_id,
                amount,
                total,
            }) => events::xp_awarded(user_id, lesson_id, amount, total),
            Some(XpAward::Skipped { reason }) => events::xp_award_skipped(
                user_id,
                lesson_id,
                reason,
                self.config.warn_on_skipped_award,
            ),
            None => {}
        }
        if let Some(streak) = &outcome.streak {
            events::streak_updated(streak);
        }

        match self.evaluate_at(user_id, now) {
            Ok(unlocked) => outcome.unlocked = unlocked,
            Err(e) => {
                warn!(user_id = %user_id, error = %e, "achievement evaluation deferred");
                return Err(MiseError::EvaluationDeferred {
                    user_id,
                    reason: e.to_string(),
                    committed: Box::new(outcome),
                });
            }
        }
        Ok(outcome)
    }

    /// Same as [`Self::submit_progress`] with a wire-format status. An unknown
    /// status is rejected before anything is read or written.
    pub fn submit_progress_str(
        &self,
        user_id: UserId,
        lesson_id: LessonId,
        status: &str,
        score: Option<i32>,
    ) -> MiseResult<SubmissionOutcome> {
        let status = ProgressStatus::from_str(status)?;
        self.submit_progress(user_id, lesson_id, status, score)
    }

    /// Re-run achievement evaluation for a user. Idempotent: returns only the
    /// unlocks this call created and never touches XP.
    pub fn evaluate_achievements(&self, user_id: UserId) -> MiseResult<Vec<UnlockRecord>> {
        self.evaluate_at(user_id, Utc::now())
    }

    fn evaluate_at(&self, user_id: UserId, now: DateTime<Utc>) -> MiseResult<Vec<UnlockRecord>> {
        let span = evaluation_span!(user_id);
        let _guard = span.enter();

        let unlocked = in_transaction(self.storage.as_ref(), |tx| {
            evaluator::evaluate(tx, user_id, now)
        })?;
        for unlock in &unlocked {
            events::achievement_unlocked(unlock);
        }
        if !unlocked.is_empty() {
            info!(user_id = %user_id, count = unlocked.len(), "achievements unlocked");
        }
        Ok(unlocked)
    }

    pub fn progress_for_user(&self, user_id: UserId) -> MiseResult<Vec<ProgressRecord>> {
        self.storage.list_progress(user_id)
    }

    pub fn progress_for_lesson(
        &self,
        user_id: UserId,
        lesson_id: LessonId,
    ) -> MiseResult<Option<ProgressRecord>> {
        self.storage.get_progress(user_id, lesson_id)
    }

    pub fn completed_progress(&self, user_id: UserId) -> MiseResult<Vec<ProgressRecord>> {
        self.storage.list_completed_progress(user_id)
    }

    /// Every catalog achievement, flagged with whether `user_id` has unlocked it.
    pub fn achievements_for_user(&self, user_id: UserId) -> MiseResult<Vec<AchievementView>> {
        let unlocked: HashMap<_, _> = self
            .storage
            .list_unlock_records(user_id)?
            .into_iter()
            .map(|u| (u.achievement_id, u.unlocked_at))
            .collect();

        Ok(self
            .storage
            .list_achievements()?
            .into_iter()
            .map(|def| {
                let unlocked_at = unlocked.get(&def.id).copied();
                AchievementView {
                    id: def.id,
                    title: def.title,
                    description: def.description,
                    icon: def.icon,
                    unlocked: unlocked_at.is_some(),
                    unlocked_at,
                }
            })
            .collect())
    }

    pub fn skill_summary(&self, user_id: UserId, skill_id: SkillId) -> MiseResult<CompletionSummary> {
        summary::skill_summary(self.storage.as_ref(), user_id, skill_id)
    }

    pub fn cuisine_summary(
        &self,
        user_id: UserId,
        cuisine_id: CuisineId,
    ) -> MiseResult<CompletionSummary> {
        summary::cuisine_summary(self.storage.as_ref(), user_id, cuisine_id)
    }

    /// `None` until the user's first completion.
    pub fn streak_for_user(&self, user_id: UserId) -> MiseResult<Option<Streak>> {
        self.storage.get_streak(user_id)
    }

    /// `None` when the user has no ledger row.
    pub fn user_xp(&self, user_id: UserId) -> MiseResult<Option<u64>> {
        self.storage.get_user_xp(user_id)
    }
}
