//! Budget display formatting
//!
//! Formats the budget listing and a single ledger for terminal output.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::models::{Ledger, LimitStatus};

use super::report::format_entry_date;
use crate::services::budget::{BudgetListing, ExpenseOutcome};

#[derive(Tabled)]
struct BudgetRow {
    #[tabled(rename = "Budget")]
    name: String,
    #[tabled(rename = "Limit")]
    limit: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Remaining")]
    remaining: String,
    #[tabled(rename = "Entries")]
    entries: usize,
}

#[derive(Tabled)]
struct EntryRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format every budget as a table
pub fn format_budget_list(listing: &BudgetListing, symbol: &str) -> String {
    if listing.budgets.is_empty() && listing.unreadable.is_empty() {
        return "No budgets found.".to_string();
    }

    let mut output = String::new();

    if !listing.budgets.is_empty() {
        let rows = listing.budgets.iter().map(|b| BudgetRow {
            name: b.name.to_string(),
            limit: b.limit.format_with_symbol(symbol),
            spent: b.spent.format_with_symbol(symbol),
            remaining: b.remaining.format_with_symbol(symbol),
            entries: b.entry_count,
        });

        let table = Table::new(rows)
            .with(Style::rounded())
            .with(Modify::new(Columns::new(1..)).with(Alignment::right()))
            .to_string();
        output.push_str(&table);
        output.push('\n');
    }

    output
}

/// One warning per ledger whose limit line could not be read
pub fn format_unreadable_warnings(listing: &BudgetListing) -> Vec<String> {
    listing
        .unreadable
        .iter()
        .map(|name| format!("Warning: could not read the limit of budget '{}'", name))
        .collect()
}

/// Format a single ledger with its entries
pub fn format_ledger(ledger: &Ledger, symbol: &str, date_format: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Budget: {}\n", ledger.name));
    output.push_str(&format!(
        "  Limit:     {}\n",
        ledger.limit.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  Spent:     {}\n",
        ledger.total_spent().format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  Remaining: {}\n",
        ledger.remaining().format_with_symbol(symbol)
    ));

    if ledger.entries.is_empty() {
        output.push_str("\nNo expenses recorded.\n");
    } else {
        let rows = ledger.entries.iter().map(|e| EntryRow {
            date: format_entry_date(e.date, date_format),
            category: e.category.clone(),
            amount: e.amount.format_with_symbol(symbol),
        });
        let table = Table::new(rows)
            .with(Style::rounded())
            .with(Modify::new(Columns::single(2)).with(Alignment::right()))
            .to_string();
        output.push('\n');
        output.push_str(&table);
        output.push('\n');
    }

    if ledger.skipped_records > 0 {
        output.push_str(&format!(
            "\nNote: {} unreadable record(s) were skipped.\n",
            ledger.skipped_records
        ));
    }

    output
}

/// Confirmation for an appended expense
pub fn format_expense_outcome(outcome: &ExpenseOutcome, symbol: &str) -> String {
    let mut output = format!(
        "Added {} for '{}' to budget '{}'.",
        outcome.entry.amount.format_with_symbol(symbol),
        outcome.entry.category,
        outcome.budget
    );

    if let LimitStatus::WithinLimit { remaining } = outcome.status {
        output.push_str(&format!(
            "\n{} remaining of {}.",
            remaining.format_with_symbol(symbol),
            outcome.limit.format_with_symbol(symbol)
        ));
    }

    output
}

/// Warning for an expense that pushed its budget over the limit
pub fn format_limit_warning(outcome: &ExpenseOutcome, symbol: &str) -> Option<String> {
    match outcome.status {
        LimitStatus::OverLimit { overage } => Some(format!(
            "Warning: budget '{}' is over its limit of {} by {}.",
            outcome.budget,
            outcome.limit.format_with_symbol(symbol),
            overage.format_with_symbol(symbol)
        )),
        LimitStatus::WithinLimit { .. } => None,
    }
}
