//! Business logic layer
//!
//! Services operate on the in-memory ledger: transaction management,
//! report aggregation, and CSV seeding.

pub mod import;
pub mod ledger;
pub mod report;

pub use import::import_csv;
pub use ledger::{Ledger, LedgerFilter, LedgerTotals};
pub use report::{expenses_by_category, monthly_flows, CategorySpend, MonthlyFlow};
