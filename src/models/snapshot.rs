//! Monthly snapshot model
//!
//! A snapshot is one row of the monthly overview table: income for the month,
//! what was spent per category, and what was left over.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::money::Money;

/// Spending for one category inside a snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryAmount {
    pub category: String,
    pub amount: Money,
}

/// One recorded month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlySnapshot {
    /// Display label, e.g. "October 2026"
    pub month: String,
    pub income: Money,
    #[serde(default)]
    pub expenses: Vec<CategoryAmount>,
    pub recorded_at: DateTime<Utc>,
}

impl MonthlySnapshot {
    /// Create a snapshot for the month containing `date`
    ///
    /// Expenses for a repeated category are merged into the first occurrence.
    pub fn new(date: NaiveDate, income: Money, expenses: Vec<(String, Money)>) -> Self {
        let mut merged: Vec<CategoryAmount> = Vec::new();
        for (category, amount) in expenses {
            match merged.iter_mut().find(|c| c.category == category) {
                Some(existing) => existing.amount += amount,
                None => merged.push(CategoryAmount { category, amount }),
            }
        }

        Self {
            month: month_label(date),
            income,
            expenses: merged,
            recorded_at: Utc::now(),
        }
    }

    pub fn total_expenses(&self) -> Money {
        self.expenses.iter().map(|c| c.amount).sum()
    }

    /// Income minus total expenses
    pub fn savings(&self) -> Money {
        self.income - self.total_expenses()
    }

    /// Amount recorded for a category, zero when absent
    pub fn amount_for(&self, category: &str) -> Money {
        self.expenses
            .iter()
            .find(|c| c.category == category)
            .map(|c| c.amount)
            .unwrap_or_default()
    }
}

/// Month label used in the overview table
pub fn month_label(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

/// First and last day of a calendar month
pub fn month_bounds(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let start = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some((start, next.pred_opt()?))
}

/// Parse "YYYY-MM" into (year, month)
pub fn parse_year_month(s: &str) -> Option<(i32, u32)> {
    let date = NaiveDate::parse_from_str(&format!("{}-01", s.trim()), "%Y-%m-%d").ok()?;
    Some((date.year(), date.month()))
}
