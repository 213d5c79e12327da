//! Span definitions per operation: submission, evaluation.

/// Create a submission span.
#[macro_export]
macro_rules! submission_span {
    ($user_id:expr, $lesson_id:expr, $status:expr) => {
        tracing::info_span!(
            "mise.submission",
            user_id = %$user_id,
            lesson_id = %$lesson_id,
            status = %$status
        )
    };
}

/// Create an evaluation span.
#[macro_export]
macro_rules! evaluation_span {
    ($user_id:expr) => {
        tracing::info_span!("mise.evaluation", user_id = %$user_id)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const SUBMISSION: &str = "mise.submission";
    pub const EVALUATION: &str = "mise.evaluation";
}
