use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants::MAX_READ_POOL_SIZE;
use crate::errors::{MiseError, MiseResult};

/// Storage backend configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Database file. `None` opens an in-memory database.
    pub db_path: Option<PathBuf>,
    /// Number of read-only connections (file-backed mode only).
    pub read_pool_size: usize,
    /// SQLite busy timeout (ms) applied to every connection.
    pub busy_timeout_ms: u64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            db_path: None,
            read_pool_size: defaults::DEFAULT_READ_POOL_SIZE,
            busy_timeout_ms: defaults::DEFAULT_BUSY_TIMEOUT_MS,
        }
    }
}

impl StorageConfig {
    pub(crate) fn validate(&self) -> MiseResult<()> {
        if self.read_pool_size == 0 || self.read_pool_size > MAX_READ_POOL_SIZE {
            return Err(MiseError::ConfigError {
                reason: format!(
                    "read_pool_size must be between 1 and {MAX_READ_POOL_SIZE}, got {}",
                    self.read_pool_size
                ),
            });
        }
        Ok(())
    }
}
