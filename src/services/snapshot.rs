//! Monthly snapshot service
//!
//! Records one overview row per month, either from explicit figures or by
//! capturing the ledgers and income log for that month.

use chrono::NaiveDate;

use crate::audit::EntityType;
use crate::config::Settings;
use crate::error::{TrackerError, TrackerResult};
use crate::models::snapshot::month_bounds;
use crate::models::{Money, MonthlySnapshot};
use crate::services::{AggregationService, IncomeService, SalaryService};
use crate::storage::Storage;

pub struct SnapshotService<'a> {
    storage: &'a Storage,
    categories: &'a [String],
}

impl<'a> SnapshotService<'a> {
    pub fn new(storage: &'a Storage, settings: &'a Settings) -> Self {
        Self {
            storage,
            categories: &settings.snapshot_categories,
        }
    }

    /// Record a snapshot from explicit figures
    pub fn record(
        &self,
        date: NaiveDate,
        income: Money,
        expenses: Vec<(String, Money)>,
    ) -> TrackerResult<MonthlySnapshot> {
        let snapshot = MonthlySnapshot::new(date, income, expenses);
        self.save(snapshot)
    }

    /// Build and record a snapshot from what is on disk for a calendar month
    ///
    /// Income is the base salary (zero when unset) plus side income dated in
    /// the month. Configured categories come first, then any other category
    /// spent in that month.
    pub fn capture(&self, year: i32, month: u32) -> TrackerResult<MonthlySnapshot> {
        let (start, end) = month_bounds(year, month).ok_or_else(|| {
            TrackerError::Validation(format!("Invalid month: {}-{:02}", year, month))
        })?;

        let salary = SalaryService::new(self.storage)
            .get_optional()?
            .unwrap_or_default();
        let side_income = IncomeService::new(self.storage).total_between(start, end)?;

        let totals = match AggregationService::new(self.storage).overall_summary_between(start, end)
        {
            Ok(totals) => totals,
            Err(TrackerError::NoExpenses { .. }) => Default::default(),
            Err(e) => return Err(e),
        };

        let mut expenses: Vec<(String, Money)> = self
            .categories
            .iter()
            .filter_map(|c| totals.get(c).map(|amount| (c.clone(), amount)))
            .collect();
        expenses.extend(
            totals
                .iter()
                .filter(|(category, _)| !self.categories.iter().any(|c| c == *category))
                .map(|(category, amount)| (category.to_string(), amount)),
        );

        self.save(MonthlySnapshot::new(start, salary + side_income, expenses))
    }

    /// Every recorded snapshot, oldest first
    pub fn list(&self) -> TrackerResult<Vec<MonthlySnapshot>> {
        self.storage.snapshots.get_all()
    }

    fn save(&self, snapshot: MonthlySnapshot) -> TrackerResult<MonthlySnapshot> {
        self.storage.snapshots.append(snapshot.clone())?;
        self.storage.log_create(
            EntityType::Snapshot,
            snapshot.month.as_str(),
            None,
            &snapshot,
        )?;
        Ok(snapshot)
    }
}
