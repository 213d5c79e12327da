use serde::{Deserialize, Serialize};

use super::defaults;

/// Progress engine behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressConfig {
    /// Log skipped XP awards (unknown user or lesson) at WARN instead of DEBUG.
    pub warn_on_skipped_award: bool,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            warn_on_skipped_award: defaults::DEFAULT_WARN_ON_SKIPPED_AWARD,
        }
    }
}
