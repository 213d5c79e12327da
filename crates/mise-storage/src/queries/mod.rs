//! Plain SQL functions over a `&Connection`. Callers decide the connection:
//! the writer, a pooled reader, or an open transaction.

pub mod achievement_ops;
pub mod catalog_ops;
pub mod ledger_ops;
pub mod progress_ops;
pub mod streak_ops;
pub mod unlock_ops;

use chrono::{DateTime, Utc};

use mise_core::errors::MiseResult;

use crate::to_storage_err;

/// Timestamps are stored as RFC 3339 text.
pub(crate) fn parse_dt(s: &str) -> MiseResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| to_storage_err(format!("parse datetime '{s}': {e}")))
}
