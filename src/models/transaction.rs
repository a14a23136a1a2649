//! Transaction model
//!
//! A transaction is either an income or an expense, with a free-form category
//! label. Amounts are always stored positive; the direction is carried by the
//! kind.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::TransactionId;
use super::money::Money;

use crate::error::{LedgerError, LedgerResult};

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money coming in
    #[default]
    Income,
    /// Money going out
    Expense,
}

impl TransactionKind {
    /// Parse a kind from a string (case-insensitive)
    pub fn parse(s: &str) -> LedgerResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(LedgerError::Validation(format!(
                "unknown transaction kind '{}' (expected income or expense)",
                other
            ))),
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

/// A financial transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Income or expense
    pub kind: TransactionKind,

    /// Amount (always positive; direction is in `kind`)
    pub amount: Money,

    /// What this transaction was for
    pub description: String,

    /// Free-form category label (e.g. "Housing", "Groceries")
    pub category: String,

    /// Transaction date
    pub date: NaiveDate,
}

impl Transaction {
    /// Create a new transaction with a fresh ID
    pub fn new(
        kind: TransactionKind,
        amount: Money,
        description: impl Into<String>,
        category: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            kind,
            amount,
            description: description.into(),
            category: category.into(),
            date,
        }
    }

    /// Validate the transaction
    ///
    /// Amounts must be positive and the description and category non-empty.
    pub fn validate(&self) -> LedgerResult<()> {
        if !self.amount.is_positive() {
            return Err(LedgerError::Validation(
                "amount must be greater than zero".into(),
            ));
        }
        if self.description.trim().is_empty() {
            return Err(LedgerError::Validation("description is required".into()));
        }
        if self.category.trim().is_empty() {
            return Err(LedgerError::Validation("category is required".into()));
        }
        Ok(())
    }

    /// The amount with its direction applied: positive for income, negative
    /// for expenses
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(kind: TransactionKind, cents: i64) -> Transaction {
        Transaction::new(
            kind,
            Money::from_cents(cents),
            "Rent",
            "Housing",
            NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
        )
    }

    #[test]
    fn test_valid_transaction() {
        assert!(sample(TransactionKind::Expense, 80000).validate().is_ok());
    }

    #[test]
    fn test_rejects_non_positive_amount() {
        assert!(sample(TransactionKind::Expense, 0).validate().is_err());
        assert!(sample(TransactionKind::Income, -100).validate().is_err());
    }

    #[test]
    fn test_rejects_blank_fields() {
        let mut txn = sample(TransactionKind::Income, 100);
        txn.description = "   ".into();
        assert!(txn.validate().is_err());

        let mut txn = sample(TransactionKind::Income, 100);
        txn.category = String::new();
        assert!(txn.validate().is_err());
    }

    #[test]
    fn test_signed_amount() {
        assert_eq!(
            sample(TransactionKind::Income, 100).signed_amount().cents(),
            100
        );
        assert_eq!(
            sample(TransactionKind::Expense, 100).signed_amount().cents(),
            -100
        );
    }

    #[test]
    fn test_kind_parse() {
        assert_eq!(
            TransactionKind::parse("Income").unwrap(),
            TransactionKind::Income
        );
        assert_eq!(
            TransactionKind::parse(" expense ").unwrap(),
            TransactionKind::Expense
        );
        assert!(TransactionKind::parse("transfer").is_err());
    }
}
