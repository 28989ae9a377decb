//! Display formatting for terminal output
//!
//! Provides utilities for formatting budgets, summaries, and the monthly
//! overview for terminal display.

pub mod budget;
pub mod income;
pub mod report;
pub mod snapshot;
pub mod summary;

pub use budget::{
    format_budget_list, format_expense_outcome, format_ledger, format_limit_warning,
    format_unreadable_warnings,
};
pub use income::format_income_list;
pub use snapshot::format_snapshot_table;
pub use summary::{format_category_totals, format_income_summary};
