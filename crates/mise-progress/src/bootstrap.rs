//! Wire storage and engine from a `MiseConfig`.

use std::sync::Arc;

use mise_core::config::MiseConfig;
use mise_core::errors::MiseResult;
use mise_storage::StorageEngine;
use tracing::info;

use crate::engine::ProgressEngine;

/// Open storage per `[storage]`, install the `[[achievements]]` rule table, and
/// build the engine. The returned `StorageEngine` is the same instance the
/// engine writes through, for reference-data setup.
pub fn open_from_config(config: &MiseConfig) -> MiseResult<(Arc<StorageEngine>, ProgressEngine)> {
    config.validate()?;
    let storage = Arc::new(StorageEngine::open_with_config(&config.storage)?);
    if !config.achievements.is_empty() {
        let installed = storage.install_achievements(&config.achievements)?;
        info!(installed, "achievement rules installed from config");
    }
    let engine = ProgressEngine::new(storage.clone(), config.progress.clone());
    Ok((storage, engine))
}
