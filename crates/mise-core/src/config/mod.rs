//! Layered configuration: TOML file → `MiseConfig`, every section defaulted.

pub mod defaults;
mod observability_config;
mod progress_config;
mod storage_config;

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{MiseError, MiseResult};
use crate::models::AchievementDefinition;

pub use observability_config::ObservabilityConfig;
pub use progress_config::ProgressConfig;
pub use storage_config::StorageConfig;

/// Top-level configuration for a Mise deployment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MiseConfig {
    pub storage: StorageConfig,
    pub progress: ProgressConfig,
    pub observability: ObservabilityConfig,
    /// Achievement rule table. Installed into the achievement catalog at startup.
    pub achievements: Vec<AchievementDefinition>,
}

impl MiseConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> MiseResult<Self> {
        let config: Self = toml::from_str(source).map_err(|e| MiseError::ConfigError {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn from_file(path: &Path) -> MiseResult<Self> {
        let source = std::fs::read_to_string(path).map_err(|e| MiseError::ConfigError {
            reason: format!("read {}: {e}", path.display()),
        })?;
        Self::from_toml_str(&source)
    }

    /// Reject rule tables and pool sizes the engine cannot honor.
    pub fn validate(&self) -> MiseResult<()> {
        self.storage.validate()?;

        let mut seen = HashSet::new();
        for achievement in &self.achievements {
            if !seen.insert(achievement.id) {
                return Err(MiseError::ConfigError {
                    reason: format!("duplicate achievement id {}", achievement.id),
                });
            }
            if achievement.threshold == 0 {
                return Err(MiseError::ConfigError {
                    reason: format!(
                        "achievement {} has threshold 0; thresholds start at 1",
                        achievement.id
                    ),
                });
            }
        }
        Ok(())
    }
}
