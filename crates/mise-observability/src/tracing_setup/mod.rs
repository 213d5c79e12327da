//! Global subscriber installation from `ObservabilityConfig`.

pub mod spans;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use mise_core::config::ObservabilityConfig;
use mise_core::errors::{MiseError, MiseResult};

/// `RUST_LOG` wins over the configured directive when set.
pub fn build_filter(config: &ObservabilityConfig) -> MiseResult<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(&config.log_filter).map_err(|e| MiseError::ConfigError {
        reason: format!("invalid log filter '{}': {e}", config.log_filter),
    })
}

/// Install the global subscriber. Returns `false` if one was already installed
/// (tests, embedding hosts), which is not an error.
pub fn init_tracing(config: &ObservabilityConfig) -> MiseResult<bool> {
    let filter = build_filter(config)?;
    let registry = tracing_subscriber::registry().with(filter);

    let installed = if config.json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_current_span(true),
            )
            .try_init()
            .is_ok()
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(false).compact())
            .try_init()
            .is_ok()
    };

    if installed {
        tracing::debug!(filter = %config.log_filter, json = config.json, "tracing initialized");
    }
    Ok(installed)
}
