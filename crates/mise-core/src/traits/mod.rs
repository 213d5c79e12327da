//! Store contracts consumed by the progress engine.
//!
//! The engine only ever talks to these traits; `mise-storage` provides the
//! SQLite implementation.

mod achievement_store;
mod catalog;
mod ledger;
mod progress_store;
mod streak_store;
mod transaction;

pub use achievement_store::{IAchievementCatalog, IAchievementStore};
pub use catalog::IReferenceCatalog;
pub use ledger::IUserLedger;
pub use progress_store::IProgressStore;
pub use streak_store::IStreakStore;
pub use transaction::{in_transaction, IProgressStorage, IStoreTransaction, ITransactional};
