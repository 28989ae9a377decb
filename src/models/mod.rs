//! Core data models for LootLock
//!
//! This module contains the data structures that represent the budgeting
//! domain: money, budget ledgers, income records, and monthly snapshots.

pub mod income;
pub mod ledger;
pub mod money;
pub mod snapshot;
pub mod summary;

pub use income::{IncomeEntry, IncomeSummary};
pub use ledger::{BudgetName, ExpenseEntry, Ledger, LedgerRecord, LimitStatus};
pub use money::Money;
pub use snapshot::{CategoryAmount, MonthlySnapshot};
pub use summary::CategoryTotals;
