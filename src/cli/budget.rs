//! Budget CLI commands
//!
//! Implements CLI commands for creating and inspecting budget ledgers.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{
    format_budget_list, format_category_totals, format_ledger, format_unreadable_warnings,
};
use crate::error::TrackerResult;
use crate::services::BudgetService;
use crate::storage::Storage;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Create a new budget with a spending limit
    Create {
        /// Budget name (case-insensitive)
        name: String,
        /// Spending limit (e.g., "500" or "1 200.50")
        limit: String,
    },

    /// List all budgets
    #[command(alias = "ls")]
    List,

    /// Show a budget and its expenses
    Show {
        /// Budget name
        name: String,
    },

    /// Show spending per category for one budget
    Summary {
        /// Budget name
        name: String,
    },
}

/// Handle a budget command
pub fn handle_budget_command(
    storage: &Storage,
    settings: &Settings,
    cmd: BudgetCommands,
) -> TrackerResult<()> {
    let service = BudgetService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        BudgetCommands::Create { name, limit } => {
            let ledger = service.create(&name, &limit)?;
            println!(
                "Created budget '{}' with a limit of {}",
                ledger.name,
                ledger.limit.format_with_symbol(symbol)
            );
        }

        BudgetCommands::List => {
            let listing = service.list()?;
            println!("{}", format_budget_list(&listing, symbol));
            for warning in format_unreadable_warnings(&listing) {
                eprintln!("{}", warning);
            }
        }

        BudgetCommands::Show { name } => {
            let ledger = service.get(&name)?;
            print!("{}", format_ledger(&ledger, symbol, &settings.date_format));
        }

        BudgetCommands::Summary { name } => {
            let totals = service.category_totals(&name)?;
            let title = format!("Spending in '{}'", name.trim().to_lowercase());
            print!("{}", format_category_totals(&title, &totals, symbol));
        }
    }

    Ok(())
}
