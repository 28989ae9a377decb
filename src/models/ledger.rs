//! Budget ledger model
//!
//! A ledger is one named budget: a spending limit fixed at creation plus an
//! append-only list of dated, categorized expense entries.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// Validation errors for budget names and expense input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerValidationError {
    EmptyName,
    InvalidNameCharacter(char),
    LeadingDot,
    EmptyCategory,
}

impl fmt::Display for LedgerValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Budget name cannot be empty"),
            Self::InvalidNameCharacter(c) => {
                write!(f, "Budget name cannot contain '{}'", c.escape_default())
            }
            Self::LeadingDot => write!(f, "Budget name cannot start with '.'"),
            Self::EmptyCategory => write!(f, "Expense category cannot be empty"),
        }
    }
}

impl std::error::Error for LedgerValidationError {}

/// Case-insensitive budget identity
///
/// Names are trimmed and lower-cased, so "Groceries" and " groceries "
/// refer to the same ledger. The name doubles as the ledger's file stem.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BudgetName(String);

impl BudgetName {
    pub fn parse(raw: &str) -> Result<Self, LedgerValidationError> {
        let name = raw.trim().to_lowercase();

        if name.is_empty() {
            return Err(LedgerValidationError::EmptyName);
        }
        if name.starts_with('.') {
            return Err(LedgerValidationError::LeadingDot);
        }
        if let Some(c) = name
            .chars()
            .find(|c| matches!(c, '/' | '\\' | ':') || c.is_control())
        {
            return Err(LedgerValidationError::InvalidNameCharacter(c));
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BudgetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

/// One expense appended to a ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseEntry {
    /// `None` for lines whose date could not be read
    pub date: Option<NaiveDate>,
    pub category: String,
    pub amount: Money,
}

impl ExpenseEntry {
    pub fn new(
        date: impl Into<Option<NaiveDate>>,
        category: &str,
        amount: Money,
    ) -> Result<Self, LedgerValidationError> {
        let category = category.trim();
        if category.is_empty() {
            return Err(LedgerValidationError::EmptyCategory);
        }
        Ok(Self {
            date: date.into(),
            category: category.to_string(),
            amount,
        })
    }
}

/// A decoded line of a ledger file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerRecord {
    /// The spending limit declared when the ledger was created
    Limit(Money),
    Expense(ExpenseEntry),
}

/// Advisory classification of a ledger's running total against its limit
///
/// This never blocks a write; it only tells the caller how the new total
/// compares to the limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LimitStatus {
    WithinLimit { remaining: Money },
    OverLimit { overage: Money },
}

impl LimitStatus {
    pub fn classify(running_total: Money, limit: Money) -> Self {
        if running_total > limit {
            Self::OverLimit {
                overage: running_total - limit,
            }
        } else {
            Self::WithinLimit {
                remaining: limit - running_total,
            }
        }
    }

    pub fn is_over_limit(&self) -> bool {
        matches!(self, Self::OverLimit { .. })
    }
}

/// A budget ledger decoded from storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ledger {
    pub name: BudgetName,
    pub limit: Money,
    pub entries: Vec<ExpenseEntry>,
    /// Lines that could not be decoded and were left out of `entries`
    pub skipped_records: usize,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new(name: BudgetName, limit: Money) -> Self {
        Self {
            name,
            limit,
            entries: Vec::new(),
            skipped_records: 0,
        }
    }

    /// Sum of every entry's amount
    pub fn total_spent(&self) -> Money {
        self.entries.iter().map(|e| e.amount).sum()
    }

    /// Sum of every entry's amount, `None` if it does not fit in cents
    pub fn checked_total(&self) -> Option<Money> {
        Money::checked_sum(self.entries.iter().map(|e| e.amount))
    }

    /// Limit minus total spent (negative when over the limit)
    pub fn remaining(&self) -> Money {
        self.limit - self.total_spent()
    }

    /// Classify what the running total would be after adding `amount`
    pub fn classify_addition(&self, amount: Money) -> LimitStatus {
        LimitStatus::classify(self.total_spent() + amount, self.limit)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
