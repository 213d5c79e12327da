//! Error taxonomy: a top-level `MiseError` plus the storage sub-error it wraps.

mod mise_error;
mod storage_error;

pub use mise_error::{MiseError, MiseResult};
pub use storage_error::StorageError;
