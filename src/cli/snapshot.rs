//! Monthly snapshot CLI commands
//!
//! Records monthly overview rows and exports them as CSV.

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use chrono::{Datelike, Local};
use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::format_snapshot_table;
use crate::error::{TrackerError, TrackerResult};
use crate::export::export_snapshots_csv;
use crate::models::snapshot::{month_bounds, parse_year_month};
use crate::models::{Money, MonthlySnapshot};
use crate::services::SnapshotService;
use crate::storage::Storage;

/// Snapshot subcommands
#[derive(Subcommand)]
pub enum SnapshotCommands {
    /// Record a month from explicit figures
    Record {
        /// Month (YYYY-MM, defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,
        /// Income for the month
        #[arg(short, long)]
        income: String,
        /// Spending per category, repeatable (e.g., --expense Food=420)
        #[arg(short, long = "expense", value_name = "CATEGORY=AMOUNT")]
        expenses: Vec<String>,
    },

    /// Record a month from the ledgers and income log
    Capture {
        /// Month (YYYY-MM, defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Show recorded months
    #[command(alias = "ls")]
    List,

    /// Export recorded months as CSV
    Export {
        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle a snapshot command
pub fn handle_snapshot_command(
    storage: &Storage,
    settings: &Settings,
    cmd: SnapshotCommands,
) -> TrackerResult<()> {
    let service = SnapshotService::new(storage, settings);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        SnapshotCommands::Record {
            month,
            income,
            expenses,
        } => {
            let (year, month) = parse_month_or_current(month.as_deref())?;
            let (start, _) = month_bounds(year, month)
                .ok_or_else(|| TrackerError::Validation("Invalid month".into()))?;
            let income = Money::parse(&income)?;
            let expenses = expenses
                .iter()
                .map(|e| parse_category_amount(e))
                .collect::<TrackerResult<Vec<_>>>()?;

            let snapshot = service.record(start, income, expenses)?;
            print_recorded(&snapshot, symbol);
        }

        SnapshotCommands::Capture { month } => {
            let (year, month) = parse_month_or_current(month.as_deref())?;
            let snapshot = service.capture(year, month)?;
            print_recorded(&snapshot, symbol);
        }

        SnapshotCommands::List => {
            let snapshots = service.list()?;
            println!(
                "{}",
                format_snapshot_table(&snapshots, &settings.snapshot_categories, symbol)
            );
        }

        SnapshotCommands::Export { output } => {
            let snapshots = service.list()?;
            match output {
                Some(path) => {
                    let file = File::create(&path).map_err(|e| {
                        TrackerError::Export(format!("Failed to create {}: {}", path.display(), e))
                    })?;
                    export_snapshots_csv(
                        &snapshots,
                        &settings.snapshot_categories,
                        BufWriter::new(file),
                    )?;
                    println!(
                        "Exported {} month(s) to {}",
                        snapshots.len(),
                        path.display()
                    );
                }
                None => {
                    export_snapshots_csv(&snapshots, &settings.snapshot_categories, io::stdout())?;
                }
            }
        }
    }

    Ok(())
}

fn print_recorded(snapshot: &MonthlySnapshot, symbol: &str) {
    println!("Recorded {}", snapshot.month);
    println!("  Income:   {}", snapshot.income.format_with_symbol(symbol));
    println!(
        "  Expenses: {}",
        snapshot.total_expenses().format_with_symbol(symbol)
    );
    println!("  Savings:  {}", snapshot.savings().format_with_symbol(symbol));
}

fn parse_month_or_current(month: Option<&str>) -> TrackerResult<(i32, u32)> {
    match month {
        Some(text) => parse_year_month(text).ok_or_else(|| {
            TrackerError::Validation(format!("Invalid month '{}', expected YYYY-MM", text))
        }),
        None => {
            let today = Local::now().date_naive();
            Ok((today.year(), today.month()))
        }
    }
}

/// Split `Category=amount`; the last `=` separates the amount
fn parse_category_amount(text: &str) -> TrackerResult<(String, Money)> {
    let (category, amount) = text.rsplit_once('=').ok_or_else(|| {
        TrackerError::Validation(format!("Expected CATEGORY=AMOUNT, got '{}'", text))
    })?;

    let category = category.trim();
    if category.is_empty() {
        return Err(TrackerError::Validation(
            "Category cannot be empty".to_string(),
        ));
    }

    Ok((category.to_string(), Money::parse(amount)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_category_amount() {
        assert_eq!(
            parse_category_amount("Food=420.50").unwrap(),
            ("Food".to_string(), Money::from_cents(42050))
        );
        assert_eq!(
            parse_category_amount("A=B=1").unwrap(),
            ("A=B".to_string(), Money::from_cents(100))
        );
        assert!(parse_category_amount("Food").unwrap_err().is_validation());
        assert!(parse_category_amount("=5").unwrap_err().is_validation());
        assert!(matches!(
            parse_category_amount("Food=lots"),
            Err(TrackerError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_parse_month_or_current() {
        assert_eq!(parse_month_or_current(Some("2026-02")).unwrap(), (2026, 2));
        assert!(parse_month_or_current(Some("Feb")).is_err());
        assert!(parse_month_or_current(None).is_ok());
    }
}
