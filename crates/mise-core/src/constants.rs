/// Mise system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Status strings as stored in the progress table.
pub const STATUS_NOT_STARTED: &str = "not_started";
pub const STATUS_IN_PROGRESS: &str = "in_progress";
pub const STATUS_COMPLETED: &str = "completed";

/// Maximum number of read connections in the storage pool.
pub const MAX_READ_POOL_SIZE: usize = 8;

/// Entity names used in `MiseError::NotFound`.
pub mod entities {
    pub const USER: &str = "user";
}

/// Ceiling for a user's XP total (the ledger stores a signed 64-bit integer).
pub const MAX_XP: u64 = i64::MAX as u64;
