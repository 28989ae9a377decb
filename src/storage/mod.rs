//! Storage layer for LootLock
//!
//! Flat-file storage under a single root: one text file per budget ledger,
//! a salary file, an append-only income log, and a JSON snapshot list.
//! Every call opens, reads or writes, and closes its file; nothing is cached.

pub mod file_io;
pub mod income;
pub mod ledgers;
pub mod records;
pub mod salary;
pub mod snapshots;

pub use income::IncomeRepository;
pub use ledgers::LedgerRepository;
pub use salary::SalaryRepository;
pub use snapshots::SnapshotRepository;

use serde::Serialize;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::paths::LootLockPaths;
use crate::error::TrackerError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: LootLockPaths,
    pub ledgers: LedgerRepository,
    pub salary: SalaryRepository,
    pub income: IncomeRepository,
    pub snapshots: SnapshotRepository,
    audit: AuditLogger,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: LootLockPaths) -> Result<Self, TrackerError> {
        paths.ensure_directories()?;

        Ok(Self {
            ledgers: LedgerRepository::new(paths.budgets_dir()),
            salary: SalaryRepository::new(paths.salary_file()),
            income: IncomeRepository::new(paths.income_log_file()),
            snapshots: SnapshotRepository::new(paths.snapshots_file()),
            audit: AuditLogger::new(paths.audit_log()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &LootLockPaths {
        &self.paths
    }

    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Record a creation in the audit log
    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), TrackerError> {
        let entry = AuditEntry::create(entity_type, entity_id, entity_name, entity);
        self.audit.log(&entry)
    }

    /// Record an overwrite in the audit log
    pub fn log_update<B: Serialize, A: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        before: Option<&B>,
        after: &A,
        diff_summary: Option<String>,
    ) -> Result<(), TrackerError> {
        let entry = AuditEntry::update(entity_type, entity_id, None, before, after, diff_summary);
        self.audit.log(&entry)
    }
}
