//! Category totals produced by ledger scans

use std::collections::BTreeMap;

use serde::Serialize;

use super::ledger::ExpenseEntry;
use super::money::Money;

/// Category → summed amount, in category order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CategoryTotals {
    totals: BTreeMap<String, Money>,
    /// Records left out of the sums because they could not be decoded
    pub skipped_records: usize,
}

impl CategoryTotals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one amount to a category's running sum
    pub fn add(&mut self, category: &str, amount: Money) {
        *self.totals.entry(category.to_string()).or_default() += amount;
    }

    pub fn add_entry(&mut self, entry: &ExpenseEntry) {
        self.add(&entry.category, entry.amount);
    }

    pub fn get(&self, category: &str) -> Option<Money> {
        self.totals.get(category).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Money)> {
        self.totals.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    /// Sum across every category
    pub fn grand_total(&self) -> Money {
        self.totals.values().sum()
    }
}

impl<'a> FromIterator<&'a ExpenseEntry> for CategoryTotals {
    fn from_iter<I: IntoIterator<Item = &'a ExpenseEntry>>(iter: I) -> Self {
        let mut totals = Self::new();
        for entry in iter {
            totals.add_entry(entry);
        }
        totals
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn entry(category: &str, cents: i64) -> ExpenseEntry {
        ExpenseEntry::new(
            NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            category,
            Money::from_cents(cents),
        )
        .unwrap()
    }

    #[test]
    fn test_groups_by_category() {
        let entries = [entry("Food", 500), entry("Transport", 200), entry("Food", 1000)];
        let totals: CategoryTotals = entries.iter().collect();

        assert_eq!(totals.len(), 2);
        assert_eq!(totals.get("Food"), Some(Money::from_cents(1500)));
        assert_eq!(totals.get("Transport"), Some(Money::from_cents(200)));
        assert_eq!(totals.grand_total().cents(), 1700);
    }

    #[test]
    fn test_order_independent() {
        let forward = [entry("A", 1), entry("B", 2), entry("A", 3)];
        let mut backward = forward.clone();
        backward.reverse();

        let a: CategoryTotals = forward.iter().collect();
        let b: CategoryTotals = backward.iter().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_categories_are_case_sensitive() {
        let entries = [entry("food", 1), entry("Food", 2)];
        let totals: CategoryTotals = entries.iter().collect();
        assert_eq!(totals.len(), 2);
    }
}
