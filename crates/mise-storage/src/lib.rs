//! # mise-storage
//!
//! SQLite implementation of every store contract in `mise_core::traits`:
//! progress records, the XP ledger, unlock rows, and the read-only curriculum
//! and achievement catalogs. One writer connection, a read pool, versioned
//! migrations, and `BEGIN IMMEDIATE` units of work.

pub mod engine;
pub mod migrations;
pub mod pool;
pub mod queries;
pub mod transaction;

pub use engine::StorageEngine;
pub use transaction::StoreTransaction;

use mise_core::errors::StorageError;
use mise_core::MiseError;

/// Wrap a low-level failure message as a transient storage error.
pub(crate) fn to_storage_err(message: String) -> MiseError {
    MiseError::StorageError(StorageError::SqliteError { message })
}
