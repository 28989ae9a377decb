//! Side income log repository
//!
//! Append-only `YYYY-MM-DD,source,amount` lines.

use std::path::PathBuf;

use crate::error::TrackerResult;
use crate::models::IncomeEntry;

use super::file_io::{open_append, read_text_optional};
use super::records::{decode_records, write_record};

/// Decoded income log contents
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IncomeLogContents {
    pub entries: Vec<IncomeEntry>,
    pub skipped_records: usize,
}

/// Repository for the side income log
pub struct IncomeRepository {
    path: PathBuf,
}

impl IncomeRepository {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Append one record; duplicates are allowed
    pub fn append(&self, entry: &IncomeEntry) -> TrackerResult<()> {
        let file = open_append(&self.path)?;
        write_record(file, entry.date, &entry.source, entry.amount)
    }

    /// Read every decodable record in file order
    pub fn load(&self) -> TrackerResult<IncomeLogContents> {
        let Some(contents) = read_text_optional(&self.path)? else {
            return Ok(IncomeLogContents::default());
        };

        let decoded = decode_records(&contents);
        let entries = decoded
            .records
            .into_iter()
            .map(|record| IncomeEntry {
                date: record.date,
                source: record.label,
                amount: record.amount,
            })
            .collect();

        Ok(IncomeLogContents {
            entries,
            skipped_records: decoded.skipped,
        })
    }
}
