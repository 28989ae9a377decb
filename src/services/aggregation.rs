//! Aggregation service
//!
//! Produces category → total mappings for one budget or across every
//! budget on disk. Undecodable lines are skipped and counted, never fatal.

use chrono::NaiveDate;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{CategoryTotals, LedgerRecord};
use crate::services::BudgetService;
use crate::storage::Storage;

pub struct AggregationService<'a> {
    storage: &'a Storage,
}

impl<'a> AggregationService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Totals for a single budget
    pub fn summary_for(&self, name: &str) -> TrackerResult<CategoryTotals> {
        BudgetService::new(self.storage).category_totals(name)
    }

    /// Totals across every budget
    ///
    /// Returns `NoExpenses` when no budget holds any expense.
    /// Expenses whose date could not be read still count here.
    pub fn overall_summary(&self) -> TrackerResult<CategoryTotals> {
        self.accumulate(|_| true)
    }

    /// Totals across every budget for expenses dated within `start..=end`
    ///
    /// Undated expenses are left out.
    pub fn overall_summary_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> TrackerResult<CategoryTotals> {
        self.accumulate(|date| date.is_some_and(|d| d >= start && d <= end))
    }

    fn accumulate<F>(&self, include: F) -> TrackerResult<CategoryTotals>
    where
        F: Fn(Option<NaiveDate>) -> bool,
    {
        let mut totals = CategoryTotals::new();

        for name in self.storage.ledgers.list_names()? {
            let (records, skipped) = self.storage.ledgers.load_records(&name)?;
            totals.skipped_records += skipped;

            for record in records {
                if let LedgerRecord::Expense(entry) = record {
                    if include(entry.date) {
                        totals.add_entry(&entry);
                    }
                }
            }
        }

        if totals.is_empty() {
            return Err(TrackerError::no_expenses_anywhere());
        }

        Ok(totals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::LootLockPaths;
    use crate::models::Money;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = LootLockPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        (temp_dir, storage)
    }

    fn day(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, m, d).unwrap()
    }

    #[test]
    fn test_no_ledgers_is_no_expenses() {
        let (_temp_dir, storage) = create_test_storage();
        let service = AggregationService::new(&storage);

        assert!(matches!(
            service.overall_summary(),
            Err(TrackerError::NoExpenses { .. })
        ));
    }

    #[test]
    fn test_empty_ledgers_is_no_expenses() {
        let (_temp_dir, storage) = create_test_storage();
        BudgetService::new(&storage).create("idle", "10").unwrap();

        assert!(matches!(
            AggregationService::new(&storage).overall_summary(),
            Err(TrackerError::NoExpenses { .. })
        ));
    }

    #[test]
    fn test_overall_merges_ledgers() {
        let (_temp_dir, storage) = create_test_storage();
        let budgets = BudgetService::new(&storage);
        budgets.create("one", "100").unwrap();
        budgets.create("two", "100").unwrap();
        budgets.add_expense_on("one", "Food", "10", day(1, 1)).unwrap();
        budgets.add_expense_on("two", "Food", "5", day(1, 2)).unwrap();
        budgets
            .add_expense_on("two", "Transport", "2", day(1, 3))
            .unwrap();

        let totals = AggregationService::new(&storage).overall_summary().unwrap();
        assert_eq!(totals.len(), 2);
        assert_eq!(totals.get("Food"), Some(Money::from_cents(1500)));
        assert_eq!(totals.get("Transport"), Some(Money::from_cents(200)));
    }

    #[test]
    fn test_overall_skips_corrupt_lines() {
        let (temp_dir, storage) = create_test_storage();
        std::fs::write(
            temp_dir.path().join("budgets").join("old.txt"),
            "#LIMIT:50.0\n2025-01-01,Food,abc\n2025-01-02,Food,4.5\nbroken line\n",
        )
        .unwrap();
        // Missing limit does not stop its entries from being counted
        std::fs::write(
            temp_dir.path().join("budgets").join("nolimit.txt"),
            "2025-01-03,Food,0.5\n",
        )
        .unwrap();

        let totals = AggregationService::new(&storage).overall_summary().unwrap();
        assert_eq!(totals.get("Food"), Some(Money::from_cents(500)));
        assert_eq!(totals.skipped_records, 2);
    }

    #[test]
    fn test_summary_for_matches_overall_without_limit_line() {
        let (temp_dir, storage) = create_test_storage();
        std::fs::write(
            temp_dir.path().join("budgets").join("nolimit.txt"),
            "2024-01-01,Food,10\n",
        )
        .unwrap();

        let service = AggregationService::new(&storage);
        let single = service.summary_for("nolimit").unwrap();
        assert_eq!(single.get("Food"), Some(Money::from_cents(1000)));
        assert_eq!(single, service.overall_summary().unwrap());
    }

    #[test]
    fn test_undated_expense_counts_in_unbounded_totals() {
        let (temp_dir, storage) = create_test_storage();
        std::fs::write(
            temp_dir.path().join("budgets").join("old.txt"),
            "#LIMIT:100.0\n01/02/2024,Food,10.0\n",
        )
        .unwrap();

        let service = AggregationService::new(&storage);
        let overall = service.overall_summary().unwrap();
        assert_eq!(overall.get("Food"), Some(Money::from_cents(1000)));
        assert_eq!(overall.skipped_records, 0);

        let single = BudgetService::new(&storage).category_totals("old").unwrap();
        assert_eq!(single, overall);

        assert!(matches!(
            service.overall_summary_between(day(1, 1), day(12, 31)),
            Err(TrackerError::NoExpenses { .. })
        ));
    }

    #[test]
    fn test_summary_between_filters_dates() {
        let (_temp_dir, storage) = create_test_storage();
        let budgets = BudgetService::new(&storage);
        budgets.create("misc", "1000").unwrap();
        budgets.add_expense_on("misc", "Food", "10", day(1, 31)).unwrap();
        budgets.add_expense_on("misc", "Food", "20", day(2, 1)).unwrap();
        budgets.add_expense_on("misc", "Fuel", "30", day(2, 28)).unwrap();
        budgets.add_expense_on("misc", "Food", "40", day(3, 1)).unwrap();

        let service = AggregationService::new(&storage);
        let feb = service
            .overall_summary_between(day(2, 1), day(2, 28))
            .unwrap();
        assert_eq!(feb.get("Food"), Some(Money::from_cents(2000)));
        assert_eq!(feb.get("Fuel"), Some(Money::from_cents(3000)));

        assert!(service
            .overall_summary_between(day(6, 1), day(6, 30))
            .is_err());
    }

    #[test]
    fn test_summary_for_delegates() {
        let (_temp_dir, storage) = create_test_storage();
        let budgets = BudgetService::new(&storage);
        budgets.create("misc", "1000").unwrap();
        budgets.add_expense_on("misc", "Food", "10", day(1, 1)).unwrap();

        let service = AggregationService::new(&storage);
        assert_eq!(
            service.summary_for("Misc").unwrap(),
            budgets.category_totals("misc").unwrap()
        );
        assert!(service.summary_for("other").unwrap_err().is_not_found());
    }
}
