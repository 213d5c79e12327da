//! StorageEngine: owns the ConnectionPool, runs migrations, and implements
//! every store contract plus `ITransactional`.

use std::collections::HashSet;
use std::path::Path;

use chrono::{DateTime, Utc};
use rusqlite::TransactionBehavior;
use tracing::{debug, warn};

use mise_core::config::{defaults, StorageConfig};
use mise_core::errors::MiseResult;
use mise_core::models::{
    AchievementDefinition, AchievementId, CuisineId, Curriculum, Lesson, LessonId,
    ProgressRecord, Skill, SkillId, Streak, UnlockRecord, UserId,
};
use mise_core::traits::{
    IAchievementCatalog, IAchievementStore, IProgressStore, IReferenceCatalog, IStoreTransaction,
    IStreakStore, ITransactional, IUserLedger,
};

use crate::migrations;
use crate::pool::ConnectionPool;
use crate::queries::{
    achievement_ops, catalog_ops, ledger_ops, progress_ops, streak_ops, unlock_ops,
};
use crate::to_storage_err;
use crate::transaction::StoreTransaction;

/// The main storage engine.
pub struct StorageEngine {
    pool: ConnectionPool,
    /// When true, reads go to the read pool (file-backed mode).
    /// When false, all reads go through the writer (in-memory mode).
    use_read_pool: bool,
}

impl StorageEngine {
    /// Open a storage engine backed by a file on disk, with default pool settings.
    pub fn open(path: &Path) -> MiseResult<Self> {
        let pool = ConnectionPool::open(
            path,
            defaults::DEFAULT_READ_POOL_SIZE,
            defaults::DEFAULT_BUSY_TIMEOUT_MS,
        )?;
        Self::initialize(pool, true)
    }

    /// Open an in-memory storage engine (for testing).
    pub fn open_in_memory() -> MiseResult<Self> {
        let pool = ConnectionPool::open_in_memory(defaults::DEFAULT_BUSY_TIMEOUT_MS)?;
        Self::initialize(pool, false)
    }

    /// Open according to a `[storage]` config section.
    pub fn open_with_config(config: &StorageConfig) -> MiseResult<Self> {
        match &config.db_path {
            Some(path) => {
                let pool =
                    ConnectionPool::open(path, config.read_pool_size, config.busy_timeout_ms)?;
                Self::initialize(pool, true)
            }
            None => {
                let pool = ConnectionPool::open_in_memory(config.busy_timeout_ms)?;
                Self::initialize(pool, false)
            }
        }
    }

    fn initialize(pool: ConnectionPool, use_read_pool: bool) -> MiseResult<Self> {
        let applied = pool.writer.with_conn_sync(migrations::run_migrations)?;
        debug!(
            db_path = ?pool.db_path,
            applied,
            read_pool = pool.readers.size(),
            "storage engine opened"
        );
        Ok(Self {
            pool,
            use_read_pool,
        })
    }

    /// Get a reference to the connection pool (for advanced operations).
    pub fn pool(&self) -> &ConnectionPool {
        &self.pool
    }

    /// Current schema version.
    pub fn schema_version(&self) -> MiseResult<u32> {
        self.pool.writer.with_conn_sync(migrations::current_version)
    }

    /// Install curriculum reference data (cuisines, skills, lessons).
    pub fn install_curriculum(&self, curriculum: &Curriculum) -> MiseResult<usize> {
        self.pool
            .writer
            .with_conn_sync(|conn| catalog_ops::install_curriculum(conn, curriculum))
    }

    /// Install or update achievement definitions (the rule table).
    pub fn install_achievements(&self, achievements: &[AchievementDefinition]) -> MiseResult<usize> {
        self.pool
            .writer
            .with_conn_sync(|conn| achievement_ops::install_achievements(conn, achievements))
    }

    /// Register a user in the XP ledger with zero XP. Returns false if already present.
    pub fn create_user(&self, user_id: UserId) -> MiseResult<bool> {
        self.pool
            .writer
            .with_conn_sync(|conn| ledger_ops::create_user(conn, user_id))
    }

    /// Total number of progress rows.
    pub fn progress_count(&self) -> MiseResult<u64> {
        self.with_reader(progress_ops::count_progress)
    }

    /// Execute a read-only query on the best available connection.
    fn with_reader<F, T>(&self, f: F) -> MiseResult<T>
    where
        F: FnOnce(&rusqlite::Connection) -> MiseResult<T>,
    {
        if self.use_read_pool {
            self.pool.readers.with_conn(f)
        } else {
            self.pool.writer.with_conn_sync(f)
        }
    }
}

impl ITransactional for StorageEngine {
    fn transaction(
        &self,
        work: &mut dyn FnMut(&dyn IStoreTransaction) -> MiseResult<()>,
    ) -> MiseResult<()> {
        self.pool.writer.with_conn_mut(|conn| {
            let tx = conn
                .transaction_with_behavior(TransactionBehavior::Immediate)
                .map_err(|e| to_storage_err(format!("transaction begin: {e}")))?;

            let result = {
                let view = StoreTransaction::new(&tx);
                work(&view)
            };

            match result {
                Ok(()) => tx
                    .commit()
                    .map_err(|e| to_storage_err(format!("transaction commit: {e}"))),
                Err(e) => {
                    if let Err(rollback_err) = tx.rollback() {
                        warn!(error = %rollback_err, "transaction rollback failed");
                    }
                    Err(e)
                }
            }
        })
    }
}

impl IProgressStore for StorageEngine {
    fn get_progress(
        &self,
        user_id: UserId,
        lesson_id: LessonId,
    ) -> MiseResult<Option<ProgressRecord>> {
        self.with_reader(|conn| progress_ops::get_progress(conn, user_id, lesson_id))
    }

    fn upsert_progress(&self, record: &ProgressRecord) -> MiseResult<()> {
        self.pool
            .writer
            .with_conn_sync(|conn| progress_ops::upsert_progress(conn, record))
    }

    fn list_progress(&self, user_id: UserId) -> MiseResult<Vec<ProgressRecord>> {
        self.with_reader(|conn| progress_ops::list_progress(conn, user_id))
    }

    fn list_completed_progress(&self, user_id: UserId) -> MiseResult<Vec<ProgressRecord>> {
        self.with_reader(|conn| progress_ops::list_completed_progress(conn, user_id))
    }
}

impl IUserLedger for StorageEngine {
    fn get_user_xp(&self, user_id: UserId) -> MiseResult<Option<u64>> {
        self.with_reader(|conn| ledger_ops::get_user_xp(conn, user_id))
    }

    fn set_user_xp(&self, user_id: UserId, xp: u64) -> MiseResult<()> {
        self.pool
            .writer
            .with_conn_sync(|conn| ledger_ops::set_user_xp(conn, user_id, xp))
    }
}

impl IStreakStore for StorageEngine {
    fn get_streak(&self, user_id: UserId) -> MiseResult<Option<Streak>> {
        self.with_reader(|conn| streak_ops::get_streak(conn, user_id))
    }

    fn upsert_streak(&self, streak: &Streak) -> MiseResult<()> {
        self.pool
            .writer
            .with_conn_sync(|conn| streak_ops::upsert_streak(conn, streak))
    }
}

impl IAchievementStore for StorageEngine {
    fn list_unlocked(&self, user_id: UserId) -> MiseResult<HashSet<AchievementId>> {
        self.with_reader(|conn| unlock_ops::list_unlocked(conn, user_id))
    }

    fn list_unlock_records(&self, user_id: UserId) -> MiseResult<Vec<UnlockRecord>> {
        self.with_reader(|conn| unlock_ops::list_unlock_records(conn, user_id))
    }

    fn insert_unlock(
        &self,
        user_id: UserId,
        achievement_id: AchievementId,
        unlocked_at: DateTime<Utc>,
    ) -> MiseResult<bool> {
        self.pool.writer.with_conn_sync(|conn| {
            unlock_ops::insert_unlock(conn, user_id, achievement_id, unlocked_at)
        })
    }
}

impl IReferenceCatalog for StorageEngine {
    fn get_lesson(&self, lesson_id: LessonId) -> MiseResult<Option<Lesson>> {
        self.with_reader(|conn| catalog_ops::get_lesson(conn, lesson_id))
    }

    fn get_skill(&self, skill_id: SkillId) -> MiseResult<Option<Skill>> {
        self.with_reader(|conn| catalog_ops::get_skill(conn, skill_id))
    }

    fn lessons_in_skill(&self, skill_id: SkillId) -> MiseResult<Vec<Lesson>> {
        self.with_reader(|conn| catalog_ops::lessons_in_skill(conn, skill_id))
    }

    fn skills_in_cuisine(&self, cuisine_id: CuisineId) -> MiseResult<Vec<Skill>> {
        self.with_reader(|conn| catalog_ops::skills_in_cuisine(conn, cuisine_id))
    }
}

impl IAchievementCatalog for StorageEngine {
    fn list_achievements(&self) -> MiseResult<Vec<AchievementDefinition>> {
        self.with_reader(achievement_ops::list_achievements)
    }
}
