//! Connection pool managing the write connection and read connections.

pub mod pragmas;
pub mod read_pool;
pub mod write_connection;

use std::path::{Path, PathBuf};

use mise_core::errors::MiseResult;

pub use read_pool::ReadPool;
pub use write_connection::WriteConnection;

/// Manages the single write connection and the read connection pool.
pub struct ConnectionPool {
    pub writer: WriteConnection,
    pub readers: ReadPool,
    pub db_path: Option<PathBuf>,
}

impl ConnectionPool {
    /// Open a connection pool for the given database file.
    pub fn open(path: &Path, read_pool_size: usize, busy_timeout_ms: u64) -> MiseResult<Self> {
        let writer = WriteConnection::open(path, busy_timeout_ms)?;
        let readers = ReadPool::open(path, read_pool_size, busy_timeout_ms)?;
        Ok(Self {
            writer,
            readers,
            db_path: Some(path.to_path_buf()),
        })
    }

    /// Open an in-memory pool. Readers are never used in this mode: each
    /// in-memory connection is its own database, so all reads go through the writer.
    pub fn open_in_memory(busy_timeout_ms: u64) -> MiseResult<Self> {
        let writer = WriteConnection::open_in_memory(busy_timeout_ms)?;
        Ok(Self {
            writer,
            readers: ReadPool::empty(),
            db_path: None,
        })
    }
}
