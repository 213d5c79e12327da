use crate::errors::{MiseError, MiseResult};

use super::{
    IAchievementCatalog, IAchievementStore, IProgressStore, IReferenceCatalog, IStreakStore,
    IUserLedger,
};

/// Every store contract, viewed through one open transaction.
pub trait IStoreTransaction:
    IProgressStore
    + IUserLedger
    + IStreakStore
    + IAchievementStore
    + IReferenceCatalog
    + IAchievementCatalog
{
}

impl<T> IStoreTransaction for T where
    T: IProgressStore
        + IUserLedger
        + IStreakStore
        + IAchievementStore
        + IReferenceCatalog
        + IAchievementCatalog
{
}

/// A backend that can run a unit of work atomically.
pub trait ITransactional: Send + Sync {
    /// Run `work` exactly once against a transactional view of the stores.
    /// Commits when `work` returns `Ok`, rolls back otherwise.
    fn transaction(
        &self,
        work: &mut dyn FnMut(&dyn IStoreTransaction) -> MiseResult<()>,
    ) -> MiseResult<()>;
}

/// Full backend required by the engine: transactional writes plus direct reads.
pub trait IProgressStorage: ITransactional + IStoreTransaction {}

impl<T> IProgressStorage for T where T: ITransactional + IStoreTransaction {}

/// Run a value-returning unit of work through [`ITransactional::transaction`].
pub fn in_transaction<S, T, F>(store: &S, work: F) -> MiseResult<T>
where
    S: ITransactional + ?Sized,
    F: FnOnce(&dyn IStoreTransaction) -> MiseResult<T>,
{
    let mut work = Some(work);
    let mut output = None;
    store.transaction(&mut |tx| {
        let work = work.take().ok_or_else(|| MiseError::TransactionAborted {
            reason: "unit of work invoked more than once".to_string(),
        })?;
        output = Some(work(tx)?);
        Ok(())
    })?;
    output.ok_or_else(|| MiseError::TransactionAborted {
        reason: "unit of work was never invoked".to_string(),
    })
}
