//! Salary CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::error::TrackerResult;
use crate::models::Money;
use crate::services::SalaryService;
use crate::storage::Storage;

/// Salary subcommands
#[derive(Subcommand)]
pub enum SalaryCommands {
    /// Set the base salary, replacing any previous value
    Set {
        /// Salary amount (e.g., "3000" or "3 000")
        amount: String,
    },

    /// Show the base salary
    Show,
}

/// Handle a salary command
pub fn handle_salary_command(
    storage: &Storage,
    settings: &Settings,
    cmd: SalaryCommands,
) -> TrackerResult<()> {
    let service = SalaryService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        SalaryCommands::Set { amount } => {
            let amount = Money::parse(&amount)?;
            service.set(amount)?;
            println!("Base salary set to {}", amount.format_with_symbol(symbol));
        }

        SalaryCommands::Show => {
            let amount = service.get()?;
            println!("Base salary: {}", amount.format_with_symbol(symbol));
        }
    }

    Ok(())
}
