//! Base salary repository
//!
//! The salary is a single decimal line that is overwritten wholesale.

use std::path::PathBuf;

use crate::error::{TrackerError, TrackerResult};
use crate::models::Money;

use super::file_io::{read_text_optional, write_text_atomic};

pub struct SalaryRepository {
    path: PathBuf,
}

impl SalaryRepository {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Overwrite the stored salary
    pub fn set(&self, amount: Money) -> TrackerResult<()> {
        write_text_atomic(&self.path, &format!("{}\n", amount.to_decimal_string()))
    }

    /// Read the stored salary
    ///
    /// A missing or unparsable file yields `NotSet`.
    pub fn get(&self) -> TrackerResult<Money> {
        let contents = read_text_optional(&self.path)?.ok_or(TrackerError::NotSet)?;
        Money::parse(&contents).map_err(|_| TrackerError::NotSet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn repo() -> (TempDir, SalaryRepository) {
        let temp_dir = TempDir::new().unwrap();
        let repo = SalaryRepository::new(temp_dir.path().join("salary.txt"));
        (temp_dir, repo)
    }

    #[test]
    fn test_get_before_set() {
        let (_temp_dir, repo) = repo();
        assert!(matches!(repo.get(), Err(TrackerError::NotSet)));
    }

    #[test]
    fn test_set_overwrites() {
        let (temp_dir, repo) = repo();
        repo.set(Money::from_cents(300000)).unwrap();
        repo.set(Money::from_cents(320000)).unwrap();

        assert_eq!(repo.get().unwrap().cents(), 320000);
        assert_eq!(
            std::fs::read_to_string(temp_dir.path().join("salary.txt")).unwrap(),
            "3200.00\n"
        );
    }

    #[test]
    fn test_corrupt_file_is_not_set() {
        let (temp_dir, repo) = repo();
        std::fs::write(temp_dir.path().join("salary.txt"), "lots").unwrap();
        assert!(matches!(repo.get(), Err(TrackerError::NotSet)));
    }

    #[test]
    fn test_reads_float_text() {
        let (temp_dir, repo) = repo();
        std::fs::write(temp_dir.path().join("salary.txt"), "3000.0").unwrap();
        assert_eq!(repo.get().unwrap().cents(), 300000);
    }
}
