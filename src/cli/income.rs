//! Income CLI commands
//!
//! Implements CLI commands for logging side income on top of the base salary.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::report::format_entry_date;
use crate::display::{format_income_list, format_income_summary};
use crate::error::TrackerResult;
use crate::models::Money;
use crate::services::IncomeService;
use crate::storage::Storage;

use super::{parse_date, parse_date_or_today};

/// Income subcommands
#[derive(Subcommand)]
pub enum IncomeCommands {
    /// Log side income
    Log {
        /// Where the money came from (e.g., "freelance")
        source: String,
        /// Amount (e.g., "250" or "250.00")
        amount: String,
        /// Date received (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List logged side income
    #[command(alias = "ls")]
    List,

    /// Show salary, side income, and their total
    Total {
        /// Only count side income on or after this date (YYYY-MM-DD)
        #[arg(short, long)]
        since: Option<String>,
    },
}

/// Handle an income command
pub fn handle_income_command(
    storage: &Storage,
    settings: &Settings,
    cmd: IncomeCommands,
) -> TrackerResult<()> {
    let service = IncomeService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        IncomeCommands::Log {
            source,
            amount,
            date,
        } => {
            let date = parse_date_or_today(date.as_deref())?;
            let amount = Money::parse(&amount)?;
            let entry = service.log_on(date, &source, amount)?;
            println!(
                "Logged {} from '{}' on {}",
                entry.amount.format_with_symbol(symbol),
                entry.source,
                format_entry_date(entry.date, &settings.date_format)
            );
        }

        IncomeCommands::List => {
            let entries = service.entries()?;
            println!(
                "{}",
                format_income_list(&entries, symbol, &settings.date_format)
            );
        }

        IncomeCommands::Total { since } => {
            let summary = service.summary()?;
            print!("{}", format_income_summary(&summary, symbol));

            if let Some(since) = since {
                let since = parse_date(&since)?;
                let total = service.total_since(Some(since))?;
                println!(
                    "  Side income since {}: {}",
                    since.format(&settings.date_format),
                    total.format_with_symbol(symbol)
                );
            }
        }
    }

    Ok(())
}
