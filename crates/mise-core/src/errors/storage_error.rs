/// Storage-layer errors for SQLite operations.
///
/// All variants are transient from the engine's point of view: the unit of
/// work that hit them was rolled back and can be retried.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("SQLite error: {message}")]
    SqliteError { message: String },

    #[error("migration failed at version {version}: {reason}")]
    MigrationFailed { version: u32, reason: String },

    #[error("connection lock poisoned: {details}")]
    LockPoisoned { details: String },
}
