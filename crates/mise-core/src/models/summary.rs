use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Completed-vs-total lesson counts for a skill or a cuisine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CompletionSummary {
    pub completed: u32,
    pub total: u32,
    /// 0.0–100.0; 0.0 when there are no lessons.
    pub percentage: f64,
}

impl CompletionSummary {
    pub fn from_counts(completed: u32, total: u32) -> Self {
        let percentage = if total > 0 {
            f64::from(completed) / f64::from(total) * 100.0
        } else {
            0.0
        };
        Self {
            completed,
            total,
            percentage,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.completed >= self.total
    }
}
