//! Line codec shared by the flat-file logs
//!
//! Ledgers and the income log both store `YYYY-MM-DD,label,amount` lines.
//! Fields are written with CSV quoting, so a label containing a comma is
//! quoted instead of splitting the line. Lines starting with `#` are metadata
//! and are never returned as records. Only the amount decides whether a line
//! counts: a date in another format is kept as an unknown date.

use std::io::Write;

use chrono::NaiveDate;
use csv::{ReaderBuilder, WriterBuilder};

use crate::error::TrackerResult;
use crate::models::Money;

/// Date format used on disk
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One decoded `date,label,amount` line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatedRecord {
    /// `None` when the date field is not `YYYY-MM-DD`
    pub date: Option<NaiveDate>,
    pub label: String,
    pub amount: Money,
}

/// Records decoded from a file plus how many lines had to be skipped
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Decoded {
    pub records: Vec<DatedRecord>,
    pub skipped: usize,
}

/// Append one record to `writer`; an unknown date is written as an empty field
pub fn write_record<W: Write>(
    writer: W,
    date: Option<NaiveDate>,
    label: &str,
    amount: Money,
) -> TrackerResult<()> {
    let mut csv_writer = WriterBuilder::new().has_headers(false).from_writer(writer);

    let date = date
        .map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_default();
    let amount = amount.to_decimal_string();
    csv_writer.write_record([date.as_str(), label, amount.as_str()])?;
    csv_writer.flush()?;

    Ok(())
}

/// Decode every record in `contents`
///
/// A line with the wrong field count or an unparsable amount is counted in
/// `skipped` and otherwise ignored, so one corrupt line never aborts a scan.
pub fn decode_records(contents: &str) -> Decoded {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .comment(Some(b'#'))
        .from_reader(contents.as_bytes());

    let mut decoded = Decoded::default();

    for result in reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(_) => {
                decoded.skipped += 1;
                continue;
            }
        };

        if record.iter().all(|field| field.trim().is_empty()) {
            continue;
        }

        if record.len() != 3 {
            decoded.skipped += 1;
            continue;
        }

        match Money::parse(&record[2]) {
            Ok(amount) => decoded.records.push(DatedRecord {
                date: NaiveDate::parse_from_str(record[0].trim(), DATE_FORMAT).ok(),
                label: record[1].trim().to_string(),
                amount,
            }),
            Err(_) => decoded.skipped += 1,
        }
    }

    decoded
}
