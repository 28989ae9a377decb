//! Service layer for LootLock
//!
//! The service layer provides the tracker's operations on top of the storage
//! layer, handling validation, advisory limit checks, and aggregation.

pub mod aggregation;
pub mod budget;
pub mod income;
pub mod salary;
pub mod snapshot;

pub use aggregation::AggregationService;
pub use budget::BudgetService;
pub use income::IncomeService;
pub use salary::SalaryService;
pub use snapshot::SnapshotService;
