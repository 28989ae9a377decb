//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod budget;
pub mod expense;
pub mod income;
pub mod salary;
pub mod snapshot;
pub mod summary;

pub use budget::{handle_budget_command, BudgetCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use income::{handle_income_command, IncomeCommands};
pub use salary::{handle_salary_command, SalaryCommands};
pub use snapshot::{handle_snapshot_command, SnapshotCommands};
pub use summary::handle_summary_command;

use chrono::{Local, NaiveDate};

use crate::error::{TrackerError, TrackerResult};

/// Parse an optional `YYYY-MM-DD` argument, defaulting to today
pub(crate) fn parse_date_or_today(date: Option<&str>) -> TrackerResult<NaiveDate> {
    match date {
        Some(text) => parse_date(text),
        None => Ok(Local::now().date_naive()),
    }
}

pub(crate) fn parse_date(text: &str) -> TrackerResult<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d").map_err(|_| {
        TrackerError::Validation(format!("Invalid date '{}', expected YYYY-MM-DD", text))
    })
}
