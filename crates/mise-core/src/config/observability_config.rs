use serde::{Deserialize, Serialize};

use super::defaults;

/// Structured logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// `tracing-subscriber` env-filter directive, e.g. `"mise_progress=debug,info"`.
    pub log_filter: String,
    /// Emit JSON lines instead of the human-readable format.
    pub json: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_filter: defaults::DEFAULT_LOG_FILTER.to_string(),
            json: false,
        }
    }
}
