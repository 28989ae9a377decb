//! Audit logging system for LootLock
//!
//! Records every persisted mutation (budget creation, expense and income
//! appends, salary overwrites, snapshots) in an append-only JSONL log.
//!
//! # Example
//!
//! ```rust,ignore
//! use lootlock::audit::{AuditEntry, AuditLogger, EntityType};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! let entry = AuditEntry::create(EntityType::Budget, "groceries", None, &limit);
//! logger.log(&entry)?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
