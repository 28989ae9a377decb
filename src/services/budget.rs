//! Budget ledger service
//!
//! Creates budgets, appends expenses with an advisory over-limit check,
//! and totals a single ledger by category.

use chrono::{Local, NaiveDate};
use serde::Serialize;

use crate::audit::EntityType;
use crate::error::{TrackerError, TrackerResult};
use crate::models::{
    BudgetName, CategoryTotals, ExpenseEntry, Ledger, LedgerRecord, LimitStatus, Money,
};
use crate::storage::Storage;

/// Result of appending an expense
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseOutcome {
    pub budget: BudgetName,
    pub entry: ExpenseEntry,
    pub limit: Money,
    /// Total of the ledger including the new entry
    pub running_total: Money,
    /// Advisory only; the entry has been written either way
    pub status: LimitStatus,
}

/// One row of the budget listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetOverview {
    pub name: BudgetName,
    pub limit: Money,
    pub spent: Money,
    pub remaining: Money,
    pub entry_count: usize,
}

/// Every budget on disk, split into readable and unreadable ledgers
#[derive(Debug, Clone, Default)]
pub struct BudgetListing {
    pub budgets: Vec<BudgetOverview>,
    /// Ledgers whose limit line could not be read
    pub unreadable: Vec<BudgetName>,
}

#[derive(Serialize)]
struct BudgetCreated<'a> {
    name: &'a str,
    limit: Money,
}

/// Service for budget ledgers
pub struct BudgetService<'a> {
    storage: &'a Storage,
}

impl<'a> BudgetService<'a> {
    /// Create a new budget service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new budget with a fixed spending limit
    ///
    /// Fails with `AlreadyExists` when a budget with the same name
    /// (ignoring case) exists, and with `InvalidLimit` when the limit is
    /// unparsable or not positive.
    pub fn create(&self, name: &str, limit: &str) -> TrackerResult<Ledger> {
        let name = parse_name(name)?;

        if self.storage.ledgers.exists(&name) {
            return Err(TrackerError::budget_exists(name.as_str()));
        }

        let limit = match Money::parse(limit) {
            Ok(parsed) if parsed.is_positive() => parsed,
            Ok(parsed) if parsed.is_zero() && is_positive_number(limit) => {
                return Err(TrackerError::InvalidLimit(format!(
                    "{} (must be at least 0.01)",
                    limit.trim()
                )))
            }
            Ok(_) => {
                return Err(TrackerError::InvalidLimit(format!(
                    "{} (must be greater than zero)",
                    limit.trim()
                )))
            }
            Err(_) => return Err(TrackerError::InvalidLimit(limit.trim().to_string())),
        };

        self.storage.ledgers.create(&name, limit)?;

        self.storage.log_create(
            EntityType::Budget,
            name.as_str(),
            None,
            &BudgetCreated {
                name: name.as_str(),
                limit,
            },
        )?;

        Ok(Ledger::new(name, limit))
    }

    /// Append an expense dated today
    pub fn add_expense(
        &self,
        name: &str,
        category: &str,
        amount: &str,
    ) -> TrackerResult<ExpenseOutcome> {
        self.add_expense_on(name, category, amount, Local::now().date_naive())
    }

    /// Append an expense with an explicit date
    ///
    /// The over-limit classification is computed before the write and
    /// returned to the caller; it never prevents the write.
    pub fn add_expense_on(
        &self,
        name: &str,
        category: &str,
        amount: &str,
        date: NaiveDate,
    ) -> TrackerResult<ExpenseOutcome> {
        let name = parse_name(name)?;

        if !self.storage.ledgers.exists(&name) {
            return Err(TrackerError::budget_not_found(name.as_str()));
        }

        let amount = Money::parse(amount)?;
        let entry = ExpenseEntry::new(date, category, amount)
            .map_err(|e| TrackerError::Validation(e.to_string()))?;

        let ledger = self.storage.ledgers.load(&name)?;
        let running_total = ledger
            .checked_total()
            .and_then(|total| total.checked_add(amount))
            .ok_or_else(|| {
                TrackerError::InvalidAmount(format!(
                    "{} (budget total would be out of range)",
                    amount.to_decimal_string()
                ))
            })?;
        let status = LimitStatus::classify(running_total, ledger.limit);

        self.storage.ledgers.append(&name, &entry)?;

        self.storage.log_create(
            EntityType::Expense,
            name.as_str(),
            Some(entry.category.clone()),
            &entry,
        )?;

        Ok(ExpenseOutcome {
            budget: name,
            entry,
            limit: ledger.limit,
            running_total,
            status,
        })
    }

    /// Per-category totals for one budget
    ///
    /// Fails with `NotFound` if the budget does not exist and with
    /// `NoExpenses` if it exists but has no entries. The limit line is not
    /// needed, so a ledger with an unreadable limit still sums its entries.
    pub fn category_totals(&self, name: &str) -> TrackerResult<CategoryTotals> {
        let name = parse_name(name)?;
        let (records, skipped) = self.storage.ledgers.load_records(&name)?;

        let mut totals: CategoryTotals = records
            .iter()
            .filter_map(|record| match record {
                LedgerRecord::Expense(entry) => Some(entry),
                LedgerRecord::Limit(_) => None,
            })
            .collect();

        if totals.is_empty() {
            return Err(TrackerError::no_expenses_in(name.as_str()));
        }

        totals.skipped_records = skipped;
        Ok(totals)
    }

    /// Load a single budget
    pub fn get(&self, name: &str) -> TrackerResult<Ledger> {
        let name = parse_name(name)?;
        self.storage.ledgers.load(&name)
    }

    /// List every budget with its spending so far
    pub fn list(&self) -> TrackerResult<BudgetListing> {
        let mut listing = BudgetListing::default();

        for name in self.storage.ledgers.list_names()? {
            match self.storage.ledgers.load(&name) {
                Ok(ledger) => listing.budgets.push(BudgetOverview {
                    limit: ledger.limit,
                    spent: ledger.total_spent(),
                    remaining: ledger.remaining(),
                    entry_count: ledger.entries.len(),
                    name,
                }),
                Err(TrackerError::Storage(_)) => listing.unreadable.push(name),
                Err(e) => return Err(e),
            }
        }

        Ok(listing)
    }
}

/// True for text that parses as a number above zero, even below one cent
fn is_positive_number(text: &str) -> bool {
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    compact.parse::<f64>().map_or(false, |value| value > 0.0)
}

fn parse_name(name: &str) -> TrackerResult<BudgetName> {
    BudgetName::parse(name).map_err(|e| TrackerError::Validation(e.to_string()))
}
