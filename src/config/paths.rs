//! Path management for LootLock
//!
//! Every component receives its file locations from a `LootLockPaths` value
//! built once at startup; nothing reads paths from global state afterwards.
//!
//! ## Path Resolution Order
//!
//! 1. `LOOTLOCK_DATA_DIR` environment variable (if set)
//! 2. The platform config directory (`~/.config/lootlock` on Linux)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::TrackerError;

/// Environment variable that overrides the storage root
pub const DATA_DIR_ENV: &str = "LOOTLOCK_DATA_DIR";

/// Manages all paths used by LootLock
#[derive(Debug, Clone)]
pub struct LootLockPaths {
    /// Storage root for all LootLock data
    base_dir: PathBuf,
}

impl LootLockPaths {
    /// Resolve the storage root from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, TrackerError> {
        let base_dir = match std::env::var_os(DATA_DIR_ENV) {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create LootLockPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Directory holding one `<name>.txt` file per budget
    pub fn budgets_dir(&self) -> PathBuf {
        self.base_dir.join("budgets")
    }

    pub fn salary_file(&self) -> PathBuf {
        self.base_dir.join("salary.txt")
    }

    pub fn income_log_file(&self) -> PathBuf {
        self.base_dir.join("income_log.txt")
    }

    /// Get the path to snapshots.json (monthly overview rows)
    pub fn snapshots_file(&self) -> PathBuf {
        self.base_dir.join("snapshots.json")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), TrackerError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| TrackerError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.budgets_dir())
            .map_err(|e| TrackerError::Io(format!("Failed to create budgets directory: {}", e)))?;

        Ok(())
    }

    /// Check if LootLock has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, TrackerError> {
    ProjectDirs::from("", "", "lootlock")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| TrackerError::Config("Could not determine home directory".into()))
}
