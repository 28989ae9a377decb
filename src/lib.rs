//! LootLock - Personal budget tracker
//!
//! This library provides the core of the LootLock budget tracker: named
//! budgets with spending limits, a base salary, a side income log, category
//! summaries, and a monthly overview.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Storage root resolution and user settings
//! - `error`: Custom error types
//! - `models`: Core data models (money, ledgers, income, snapshots)
//! - `storage`: Flat-file storage layer
//! - `services`: Operations on top of storage
//! - `audit`: Audit logging system
//! - `export`: CSV export of the monthly overview
//! - `display` and `cli`: Terminal front end
//!
//! # Example
//!
//! ```rust,ignore
//! use lootlock::config::paths::LootLockPaths;
//! use lootlock::services::BudgetService;
//! use lootlock::storage::Storage;
//!
//! let storage = Storage::new(LootLockPaths::new()?)?;
//! let outcome = BudgetService::new(&storage).add_expense("groceries", "Food", "12.50")?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::TrackerError;
