use crate::models::{SubmissionOutcome, UserId};

use super::StorageError;

/// Convenience alias used across every crate in the workspace.
pub type MiseResult<T> = Result<T, MiseError>;

/// Top-level error for the progress engine.
#[derive(Debug, thiserror::Error)]
pub enum MiseError {
    /// A referenced user, lesson, skill or achievement does not exist.
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// A status value outside `not_started | in_progress | completed`.
    #[error("invalid progress status: '{value}'")]
    InvalidStatus { value: String },

    #[error("storage error: {0}")]
    StorageError(#[from] StorageError),

    #[error("configuration error: {reason}")]
    ConfigError { reason: String },

    /// The completion was committed (XP included) but achievement evaluation
    /// failed. `committed` is what was persisted, with no unlocks. Re-run
    /// evaluation for the user; XP is not awarded again.
    #[error("achievement evaluation deferred for user {user_id}: {reason}")]
    EvaluationDeferred {
        user_id: UserId,
        reason: String,
        committed: Box<SubmissionOutcome>,
    },

    #[error("transaction aborted: {reason}")]
    TransactionAborted { reason: String },
}

impl MiseError {
    pub fn not_found(entity: &str, id: impl ToString) -> Self {
        Self::NotFound {
            entity: entity.to_string(),
            id: id.to_string(),
        }
    }

    /// Whether the failed request can be retried as-is.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::StorageError(_) | Self::EvaluationDeferred { .. } | Self::TransactionAborted { .. }
        )
    }
}
