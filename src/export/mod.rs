//! Export module for LootLock
//!
//! Writes the monthly overview as spreadsheet-compatible CSV.

pub mod csv;

pub use csv::{export_snapshots_csv, overview_columns};
