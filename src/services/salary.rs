//! Salary service
//!
//! Keeps the single base salary figure.

use crate::audit::EntityType;
use crate::error::{TrackerError, TrackerResult};
use crate::models::income::validate_salary;
use crate::models::Money;
use crate::storage::Storage;

pub struct SalaryService<'a> {
    storage: &'a Storage,
}

impl<'a> SalaryService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Overwrite the base salary
    pub fn set(&self, amount: Money) -> TrackerResult<()> {
        validate_salary(amount).map_err(|e| TrackerError::Validation(e.to_string()))?;

        let before = self.get_optional()?;
        self.storage.salary.set(amount)?;

        let diff = match before {
            Some(previous) => format!("{} -> {}", previous, amount),
            None => format!("set to {}", amount),
        };
        self.storage.log_update(
            EntityType::Salary,
            "salary",
            before.as_ref(),
            &amount,
            Some(diff),
        )?;

        Ok(())
    }

    /// The base salary, or `NotSet` when none has been recorded
    pub fn get(&self) -> TrackerResult<Money> {
        self.storage.salary.get()
    }

    /// The base salary, with `NotSet` mapped to `None`
    pub fn get_optional(&self) -> TrackerResult<Option<Money>> {
        match self.get() {
            Ok(amount) => Ok(Some(amount)),
            Err(TrackerError::NotSet) => Ok(None),
            Err(e) => Err(e),
        }
    }
}
