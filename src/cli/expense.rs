//! Expense CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_expense_outcome, format_limit_warning};
use crate::error::TrackerResult;
use crate::services::BudgetService;
use crate::storage::Storage;

use super::parse_date_or_today;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Add an expense to a budget
    Add {
        /// Budget name
        budget: String,
        /// Category (e.g., "Food")
        category: String,
        /// Amount (e.g., "12.50")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Expense date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> TrackerResult<()> {
    let service = BudgetService::new(storage);

    match cmd {
        ExpenseCommands::Add {
            budget,
            category,
            amount,
            date,
        } => {
            let date = parse_date_or_today(date.as_deref())?;
            let outcome = service.add_expense_on(&budget, &category, &amount, date)?;
            let symbol = settings.currency_symbol.as_str();
            println!("{}", format_expense_outcome(&outcome, symbol));
            if let Some(warning) = format_limit_warning(&outcome, symbol) {
                eprintln!("{}", warning);
            }
        }
    }

    Ok(())
}
