//! Side income model
//!
//! Side income (tutoring, freelance work, ...) is logged one record at a time
//! alongside the single base salary figure.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::money::Money;

/// Validation errors for income records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IncomeValidationError {
    EmptySource,
    NegativeSalary,
}

impl std::fmt::Display for IncomeValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptySource => write!(f, "Income source cannot be empty"),
            Self::NegativeSalary => write!(f, "Base salary cannot be negative"),
        }
    }
}

impl std::error::Error for IncomeValidationError {}

/// One logged side-income record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeEntry {
    /// `None` for lines whose date could not be read
    pub date: Option<NaiveDate>,
    pub source: String,
    pub amount: Money,
}

impl IncomeEntry {
    pub fn new(
        date: impl Into<Option<NaiveDate>>,
        source: &str,
        amount: Money,
    ) -> Result<Self, IncomeValidationError> {
        let source = source.trim();
        if source.is_empty() {
            return Err(IncomeValidationError::EmptySource);
        }
        Ok(Self {
            date: date.into(),
            source: source.to_string(),
            amount,
        })
    }
}

/// Base salary plus side income
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IncomeSummary {
    /// `None` when no salary has been recorded
    pub base_salary: Option<Money>,
    pub side_income: Money,
}

impl IncomeSummary {
    pub fn total(&self) -> Money {
        self.base_salary.unwrap_or_default() + self.side_income
    }
}

/// Reject salaries below zero
pub fn validate_salary(amount: Money) -> Result<(), IncomeValidationError> {
    if amount.is_negative() {
        return Err(IncomeValidationError::NegativeSalary);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_income_entry() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 2).unwrap();
        let entry = IncomeEntry::new(date, " tutoring ", Money::from_cents(4000)).unwrap();
        assert_eq!(entry.source, "tutoring");
        assert_eq!(entry.amount.cents(), 4000);

        assert_eq!(
            IncomeEntry::new(date, "", Money::from_cents(1)),
            Err(IncomeValidationError::EmptySource)
        );
    }

    #[test]
    fn test_summary_total_without_salary() {
        let summary = IncomeSummary {
            base_salary: None,
            side_income: Money::from_cents(4000),
        };
        assert_eq!(summary.total().cents(), 4000);
    }

    #[test]
    fn test_summary_total_with_salary() {
        let summary = IncomeSummary {
            base_salary: Some(Money::from_cents(300000)),
            side_income: Money::from_cents(4000),
        };
        assert_eq!(summary.total().cents(), 304000);
    }

    #[test]
    fn test_validate_salary() {
        assert!(validate_salary(Money::zero()).is_ok());
        assert_eq!(
            validate_salary(Money::from_cents(-1)),
            Err(IncomeValidationError::NegativeSalary)
        );
    }
}
