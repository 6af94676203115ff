//! The punch-clock service: employee store, its file, the punch ledger, the
//! timestamp source and the activity log, wired together.

use super::store::EmployeeStore;
use crate::config::Config;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::storage::seed::sample_employees;
use crate::storage::{EmployeeFile, PunchLedger};
use crate::ui::messages::warning;
use crate::utils::time::{Clock, LocalClock};

pub struct TimeClock {
    pub(crate) store: EmployeeStore,
    employees: EmployeeFile,
    ledger: PunchLedger,
    clock: Box<dyn Clock>,
    activity: Option<DbPool>,
    seed_on_first_run: bool,
}

impl TimeClock {
    /// Unloaded service over the given files. Call `reload` before use.
    pub fn new(employees: EmployeeFile, ledger: PunchLedger, clock: Box<dyn Clock>) -> Self {
        Self {
            store: EmployeeStore::new(),
            employees,
            ledger,
            clock,
            activity: None,
            seed_on_first_run: true,
        }
    }

    /// Build from configuration and load the store.
    pub fn open(cfg: &Config) -> AppResult<Self> {
        let mut tc = Self::new(
            EmployeeFile::new(cfg.employees_path()),
            PunchLedger::new(cfg.punch_path()),
            Box::new(LocalClock::new(cfg.timestamp_format.clone())),
        )
        .with_activity_log(DbPool::new(cfg.activity_db_path())?)
        .seed_on_first_run(cfg.seed_on_first_run);
        tc.reload()?;
        Ok(tc)
    }

    pub fn with_activity_log(mut self, pool: DbPool) -> Self {
        self.activity = Some(pool);
        self
    }

    pub fn seed_on_first_run(mut self, enabled: bool) -> Self {
        self.seed_on_first_run = enabled;
        self
    }

    /// Replace the in-memory store with the file contents. An empty file on
    /// first run is populated with the sample records. Returns whether
    /// seeding happened.
    pub fn reload(&mut self) -> AppResult<bool> {
        self.store = EmployeeStore::from_records(self.employees.load()?);
        if !self.store.is_empty() || !self.seed_on_first_run {
            return Ok(false);
        }

        let snapshot = std::mem::take(&mut self.store);
        self.store = EmployeeStore::from_records(sample_employees()?);
        self.commit(snapshot)?;
        self.record("seed", "", &format!("{} sample employees created", self.store.len()));
        Ok(true)
    }

    pub fn store(&self) -> &EmployeeStore {
        &self.store
    }

    pub fn ledger(&self) -> &PunchLedger {
        &self.ledger
    }

    pub fn now(&self) -> String {
        self.clock.now()
    }

    pub fn activity_log(&self) -> Option<&DbPool> {
        self.activity.as_ref()
    }

    /// Persist the current store. If the write fails, `snapshot` becomes the
    /// store again so memory and file stay in step.
    pub(crate) fn commit(&mut self, snapshot: EmployeeStore) -> AppResult<()> {
        if let Err(e) = self.employees.save(self.store.iter()) {
            self.store = snapshot;
            return Err(e);
        }
        Ok(())
    }

    /// Undo a committed store after a later step failed, in memory and on
    /// disk.
    pub(crate) fn rollback(&mut self, snapshot: EmployeeStore) {
        self.store = snapshot;
        if let Err(e) = self.employees.save(self.store.iter()) {
            warning(format!(
                "Failed to restore {}: {}",
                self.employees.path().display(),
                e
            ));
        }
    }

    /// Activity log line. Never fails the operation that produced it.
    pub(crate) fn record(&self, operation: &str, target: &str, message: &str) {
        if let Some(pool) = &self.activity
            && let Err(e) = ttlog(&pool.conn, operation, target, message)
        {
            warning(format!("Failed to write activity log: {}", e));
        }
    }
}
