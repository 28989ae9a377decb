//! Budget ledger repository
//!
//! Each budget lives in its own `budgets/<name>.txt` file. The first line
//! declares the limit (`#LIMIT:<decimal>`); every following line is an
//! expense. Files are decoded into tagged `LedgerRecord`s once per load.

use std::fs;
use std::path::PathBuf;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{BudgetName, ExpenseEntry, Ledger, LedgerRecord, Money};

use super::file_io::{open_append, read_text_optional, write_text_atomic};
use super::records::{decode_records, write_record};

/// Marker that introduces the limit metadata line
pub const LIMIT_MARKER: &str = "#LIMIT:";

/// Repository for per-budget ledger files
pub struct LedgerRepository {
    dir: PathBuf,
}

impl LedgerRepository {
    /// Create a new repository rooted at the budgets directory
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn path_for(&self, name: &BudgetName) -> PathBuf {
        self.dir.join(format!("{}.txt", name.as_str()))
    }

    /// Check whether a ledger exists
    pub fn exists(&self, name: &BudgetName) -> bool {
        self.path_for(name).is_file()
    }

    /// Create a new, empty ledger holding only its limit
    ///
    /// Fails with `AlreadyExists` if the file is already present. The ledger
    /// only appears once its limit line is fully written.
    pub fn create(&self, name: &BudgetName, limit: Money) -> TrackerResult<()> {
        let path = self.path_for(name);
        if path.exists() {
            return Err(TrackerError::budget_exists(name.as_str()));
        }

        let contents = format!("{}{}\n", LIMIT_MARKER, limit.to_decimal_string());
        write_text_atomic(&path, &contents)
    }

    /// Load and decode a ledger
    pub fn load(&self, name: &BudgetName) -> TrackerResult<Ledger> {
        let (records, skipped) = self.load_records(name)?;
        fold_records(name.clone(), records, skipped)
    }

    /// Decode a ledger's records without requiring a readable limit
    pub fn load_records(&self, name: &BudgetName) -> TrackerResult<(Vec<LedgerRecord>, usize)> {
        let path = self.path_for(name);
        let contents = read_text_optional(&path)?
            .ok_or_else(|| TrackerError::budget_not_found(name.as_str()))?;

        Ok(decode_ledger(&contents))
    }

    /// Append an expense to an existing ledger
    pub fn append(&self, name: &BudgetName, entry: &ExpenseEntry) -> TrackerResult<()> {
        if !self.exists(name) {
            return Err(TrackerError::budget_not_found(name.as_str()));
        }

        let file = open_append(self.path_for(name))?;
        write_record(file, entry.date, &entry.category, entry.amount)
    }

    /// Names of every ledger on disk, sorted
    pub fn list_names(&self) -> TrackerResult<Vec<BudgetName>> {
        let read_dir = match fs::read_dir(&self.dir) {
            Ok(read_dir) => read_dir,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(TrackerError::Storage(format!(
                    "Failed to list {}: {}",
                    self.dir.display(),
                    e
                )))
            }
        };

        let mut names = Vec::new();
        for dir_entry in read_dir {
            let path = dir_entry?.path();
            if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some("txt") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                if let Ok(name) = BudgetName::parse(stem) {
                    names.push(name);
                }
            }
        }

        names.sort();
        names.dedup();
        Ok(names)
    }
}

/// Decode a ledger file into tagged records plus a count of skipped lines
pub fn decode_ledger(contents: &str) -> (Vec<LedgerRecord>, usize) {
    let mut records = Vec::new();
    let mut skipped = 0;

    if let Some(line) = contents.lines().find(|l| l.starts_with(LIMIT_MARKER)) {
        match Money::parse(&line[LIMIT_MARKER.len()..]) {
            Ok(limit) => records.push(LedgerRecord::Limit(limit)),
            Err(_) => skipped += 1,
        }
    }

    let decoded = decode_records(contents);
    skipped += decoded.skipped;

    records.extend(decoded.records.into_iter().map(|record| {
        LedgerRecord::Expense(ExpenseEntry {
            date: record.date,
            category: record.label,
            amount: record.amount,
        })
    }));

    (records, skipped)
}

fn fold_records(
    name: BudgetName,
    records: Vec<LedgerRecord>,
    skipped: usize,
) -> TrackerResult<Ledger> {
    let mut limit = None;
    let mut entries = Vec::new();

    for record in records {
        match record {
            LedgerRecord::Limit(value) if limit.is_none() => limit = Some(value),
            LedgerRecord::Limit(_) => {}
            LedgerRecord::Expense(entry) => entries.push(entry),
        }
    }

    let limit = limit.ok_or_else(|| {
        TrackerError::Storage(format!("Could not read budget limit for '{}'", name))
    })?;

    Ok(Ledger {
        name,
        limit,
        entries,
        skipped_records: skipped,
    })
}
