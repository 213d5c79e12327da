//! Default values shared by the config sections.

/// Read connections opened for a file-backed store.
pub const DEFAULT_READ_POOL_SIZE: usize = 4;

/// SQLite busy timeout in milliseconds.
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

/// `tracing-subscriber` env-filter directive.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Skipped XP awards are logged at WARN unless turned off.
pub const DEFAULT_WARN_ON_SKIPPED_AWARD: bool = true;
