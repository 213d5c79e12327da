//! The single write connection. Every mutation, and every unit of work,
//! is serialized through its mutex.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::Connection;

use mise_core::errors::{MiseResult, StorageError};

use super::pragmas::apply_pragmas;
use crate::to_storage_err;

pub struct WriteConnection {
    conn: Mutex<Connection>,
}

impl WriteConnection {
    pub fn open(path: &Path, busy_timeout_ms: u64) -> MiseResult<Self> {
        let conn = Connection::open(path).map_err(|e| to_storage_err(e.to_string()))?;
        apply_pragmas(&conn, busy_timeout_ms)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    pub fn open_in_memory(busy_timeout_ms: u64) -> MiseResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| to_storage_err(e.to_string()))?;
        apply_pragmas(&conn, busy_timeout_ms)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Run `f` with exclusive access to the writer.
    pub fn with_conn_sync<F, T>(&self, f: F) -> MiseResult<T>
    where
        F: FnOnce(&Connection) -> MiseResult<T>,
    {
        let guard = self.conn.lock().map_err(|e| StorageError::LockPoisoned {
            details: format!("writer: {e}"),
        })?;
        f(&guard)
    }

    /// Run `f` with mutable access to the writer (needed for `Connection::transaction_with_behavior`).
    pub fn with_conn_mut<F, T>(&self, f: F) -> MiseResult<T>
    where
        F: FnOnce(&mut Connection) -> MiseResult<T>,
    {
        let mut guard = self.conn.lock().map_err(|e| StorageError::LockPoisoned {
            details: format!("writer: {e}"),
        })?;
        f(&mut guard)
    }
}
