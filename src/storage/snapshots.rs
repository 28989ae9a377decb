//! Monthly snapshot repository
//!
//! Handles persistence of the monthly overview rows to a JSON file.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::TrackerResult;
use crate::models::MonthlySnapshot;

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct SnapshotData {
    #[serde(default)]
    snapshots: Vec<MonthlySnapshot>,
}

/// Repository for monthly snapshots
pub struct SnapshotRepository {
    path: PathBuf,
}

impl SnapshotRepository {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// All snapshots in the order they were recorded
    pub fn get_all(&self) -> TrackerResult<Vec<MonthlySnapshot>> {
        let data: SnapshotData = read_json(&self.path)?;
        Ok(data.snapshots)
    }

    /// Append a snapshot and rewrite the file
    pub fn append(&self, snapshot: MonthlySnapshot) -> TrackerResult<()> {
        let mut data: SnapshotData = read_json(&self.path)?;
        data.snapshots.push(snapshot);
        write_json_atomic(&self.path, &data)
    }
}
