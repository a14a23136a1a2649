//! Core data models for StudyLedger
//!
//! Contains the data structures for the finance side of the application:
//! money amounts and transactions.

pub mod ids;
pub mod money;
pub mod transaction;

pub use ids::TransactionId;
pub use money::Money;
pub use transaction::{Transaction, TransactionKind};
