//! In-memory transaction ledger
//!
//! Holds every transaction for the lifetime of the process, in insertion
//! order. There is no storage layer behind this: dropping the ledger is the
//! end of the data.

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Money, Transaction, TransactionId, TransactionKind};

/// Options for filtering the register
#[derive(Debug, Clone, Default)]
pub struct LedgerFilter {
    /// Filter by direction
    pub kind: Option<TransactionKind>,
    /// Filter by exact category label
    pub category: Option<String>,
    /// Case-insensitive substring match over description and category
    pub search: Option<String>,
}

impl LedgerFilter {
    /// Create a new empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by direction
    pub fn kind(mut self, kind: TransactionKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Filter by category label
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Filter by search term
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// Check whether a transaction passes this filter
    pub fn matches(&self, txn: &Transaction) -> bool {
        if let Some(kind) = self.kind {
            if txn.kind != kind {
                return false;
            }
        }
        if let Some(ref category) = self.category {
            if &txn.category != category {
                return false;
            }
        }
        if let Some(ref term) = self.search {
            let term = term.to_lowercase();
            let haystack = format!(
                "{} {}",
                txn.description.to_lowercase(),
                txn.category.to_lowercase()
            );
            if !haystack.contains(&term) {
                return false;
            }
        }
        true
    }
}

/// Aggregate totals over the ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedgerTotals {
    /// Sum of all income amounts
    pub income: Money,
    /// Sum of all expense amounts
    pub expenses: Money,
    /// Income minus expenses
    pub balance: Money,
}

/// The in-memory transaction book
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    transactions: Vec<Transaction>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a ledger pre-populated with transactions
    ///
    /// Each transaction is validated on the way in.
    pub fn with_transactions(transactions: Vec<Transaction>) -> LedgerResult<Self> {
        let mut ledger = Self::new();
        for txn in transactions {
            ledger.add(txn)?;
        }
        Ok(ledger)
    }

    /// Add a transaction after validating it
    pub fn add(&mut self, txn: Transaction) -> LedgerResult<TransactionId> {
        txn.validate()?;
        let id = txn.id;
        self.transactions.push(txn);
        Ok(id)
    }

    /// Remove a transaction by id
    pub fn remove(&mut self, id: TransactionId) -> LedgerResult<Transaction> {
        let pos = self
            .transactions
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| LedgerError::transaction_not_found(id.to_string()))?;
        Ok(self.transactions.remove(pos))
    }

    /// All transactions in insertion order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Number of transactions
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Whether the ledger is empty
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Transactions passing the given filter, in insertion order
    pub fn filtered(&self, filter: &LedgerFilter) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .filter(|t| filter.matches(t))
            .collect()
    }

    /// The last `n` transactions, newest first
    pub fn recent(&self, n: usize) -> Vec<&Transaction> {
        self.transactions.iter().rev().take(n).collect()
    }

    /// Income, expense, and balance totals
    pub fn totals(&self) -> LedgerTotals {
        let income = self
            .transactions
            .iter()
            .filter(|t| t.kind == TransactionKind::Income)
            .map(|t| t.amount)
            .sum();
        let expenses = self
            .transactions
            .iter()
            .filter(|t| t.kind == TransactionKind::Expense)
            .map(|t| t.amount)
            .sum::<Money>();
        let balance = self.transactions.iter().map(|t| t.signed_amount()).sum();

        LedgerTotals {
            income,
            expenses,
            balance,
        }
    }

    /// Distinct category labels in first-seen order
    pub fn categories(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for txn in &self.transactions {
            if !seen.contains(&txn.category) {
                seen.push(txn.category.clone());
            }
        }
        seen
    }

    /// The sample book the TUI starts with when nothing is imported,
    /// mirroring a typical first month
    pub fn sample() -> Self {
        let today = chrono::Local::now().date_naive();
        let mut ledger = Self::new();
        // Seeding with fixed data cannot fail validation
        let _ = ledger.add(Transaction::new(
            TransactionKind::Income,
            Money::from_cents(350_000),
            "Salary",
            "Work",
            today,
        ));
        let _ = ledger.add(Transaction::new(
            TransactionKind::Expense,
            Money::from_cents(80_000),
            "Rent",
            "Housing",
            today,
        ));
        let _ = ledger.add(Transaction::new(
            TransactionKind::Expense,
            Money::from_cents(25_000),
            "Groceries",
            "Food",
            today,
        ));
        ledger
    }
}
