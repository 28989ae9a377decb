//! Income service
//!
//! Logs side income and sums it together with the base salary.

use chrono::{Local, NaiveDate};

use crate::audit::EntityType;
use crate::error::{TrackerError, TrackerResult};
use crate::models::{IncomeEntry, IncomeSummary, Money};
use crate::services::SalaryService;
use crate::storage::Storage;

/// Service for side income
pub struct IncomeService<'a> {
    storage: &'a Storage,
}

impl<'a> IncomeService<'a> {
    /// Create a new income service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Log side income dated today
    pub fn log(&self, source: &str, amount: Money) -> TrackerResult<IncomeEntry> {
        self.log_on(Local::now().date_naive(), source, amount)
    }

    /// Log side income with an explicit date; duplicates are never rejected
    pub fn log_on(&self, date: NaiveDate, source: &str, amount: Money) -> TrackerResult<IncomeEntry> {
        let entry = IncomeEntry::new(date, source, amount)
            .map_err(|e| TrackerError::Validation(e.to_string()))?;

        self.storage.income.append(&entry)?;
        self.storage
            .log_create(EntityType::Income, entry.source.as_str(), None, &entry)?;

        Ok(entry)
    }

    /// Every readable record, in the order it was logged
    pub fn entries(&self) -> TrackerResult<Vec<IncomeEntry>> {
        Ok(self.storage.income.load()?.entries)
    }

    /// Sum of side income dated on or after `since` (`None` sums everything)
    ///
    /// Records with an unparsable amount are skipped. Undated records only
    /// count when `since` is `None`.
    pub fn total_since(&self, since: Option<NaiveDate>) -> TrackerResult<Money> {
        self.sum_where(|entry| match since {
            Some(start) => entry.date.is_some_and(|d| d >= start),
            None => true,
        })
    }

    /// Sum of side income dated within `start..=end`
    pub fn total_between(&self, start: NaiveDate, end: NaiveDate) -> TrackerResult<Money> {
        self.sum_where(|entry| entry.date.is_some_and(|d| d >= start && d <= end))
    }

    /// Base salary plus all side income
    pub fn summary(&self) -> TrackerResult<IncomeSummary> {
        Ok(IncomeSummary {
            base_salary: SalaryService::new(self.storage).get_optional()?,
            side_income: self.total_since(None)?,
        })
    }

    fn sum_where<F>(&self, include: F) -> TrackerResult<Money>
    where
        F: Fn(&IncomeEntry) -> bool,
    {
        let log = self.storage.income.load()?;
        Ok(log.entries.iter().filter(|e| include(e)).map(|e| e.amount).sum())
    }
}
