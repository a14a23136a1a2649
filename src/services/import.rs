//! CSV seeding
//!
//! Loads transactions from a CSV file into a fresh in-memory ledger at
//! startup. This is input, not persistence: nothing is ever written back.
//!
//! Expected header: `date,kind,amount,description,category` with ISO dates
//! (`YYYY-MM-DD`), kind `income`/`expense`, and decimal amounts.

use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Money, Transaction, TransactionKind};
use crate::services::Ledger;

/// One CSV row as read from disk
#[derive(Debug, Deserialize)]
struct CsvRow {
    date: String,
    kind: String,
    amount: String,
    description: String,
    category: String,
}

/// Read a CSV file into a new ledger
///
/// # Errors
///
/// Any unreadable or invalid row aborts the import with a line-numbered
/// error; a partially seeded ledger is never returned.
pub fn import_csv(path: &Path) -> LedgerResult<Ledger> {
    let file = std::fs::File::open(path)
        .map_err(|e| LedgerError::Import(format!("cannot open {}: {}", path.display(), e)))?;
    import_reader(file)
}

/// Read CSV data from any reader into a new ledger
pub fn import_reader(reader: impl Read) -> LedgerResult<Ledger> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut ledger = Ledger::new();

    for (index, row) in csv_reader.deserialize::<CsvRow>().enumerate() {
        // Line 1 is the header
        let line = index + 2;
        let row = row.map_err(|e| LedgerError::Import(format!("line {}: {}", line, e)))?;
        let txn = parse_row(&row).map_err(|e| LedgerError::Import(format!("line {}: {}", line, e)))?;
        ledger
            .add(txn)
            .map_err(|e| LedgerError::Import(format!("line {}: {}", line, e)))?;
    }

    Ok(ledger)
}

fn parse_row(row: &CsvRow) -> LedgerResult<Transaction> {
    let date = NaiveDate::parse_from_str(row.date.trim(), "%Y-%m-%d")
        .map_err(|_| LedgerError::Import(format!("invalid date '{}'", row.date)))?;
    let kind = TransactionKind::parse(&row.kind)?;
    let amount = Money::parse(&row.amount)
        .map_err(|_| LedgerError::Import(format!("invalid amount '{}'", row.amount)))?;

    Ok(Transaction::new(
        kind,
        amount,
        row.description.trim(),
        row.category.trim(),
        date,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOOD: &str = "\
date,kind,amount,description,category
2025-06-01,income,3500.00,Salary,Work
2025-06-03,expense,800.00,Rent,Housing
2025-06-05,expense,250.00,Groceries,Food
";

    #[test]
    fn test_import_good_file() {
        let ledger = import_reader(GOOD.as_bytes()).unwrap();
        assert_eq!(ledger.len(), 3);
        let totals = ledger.totals();
        assert_eq!(totals.income.cents(), 350_000);
        assert_eq!(totals.expenses.cents(), 105_000);
    }

    #[test]
    fn test_import_preserves_fields() {
        let ledger = import_reader(GOOD.as_bytes()).unwrap();
        let rent = &ledger.transactions()[1];
        assert_eq!(rent.kind, TransactionKind::Expense);
        assert_eq!(rent.description, "Rent");
        assert_eq!(rent.category, "Housing");
        assert_eq!(rent.date.to_string(), "2025-06-03");
    }

    #[test]
    fn test_bad_date_reports_line() {
        let data = "date,kind,amount,description,category\n06/01/2025,income,10,x,y\n";
        let err = import_reader(data.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_bad_kind_aborts() {
        let data = "date,kind,amount,description,category\n2025-06-01,transfer,10,x,y\n";
        assert!(import_reader(data.as_bytes()).is_err());
    }

    #[test]
    fn test_bad_amount_aborts() {
        let data = "date,kind,amount,description,category\n2025-06-01,income,ten,x,y\n";
        assert!(import_reader(data.as_bytes()).is_err());
    }

    #[test]
    fn test_amount_with_currency_suffix_reports_line() {
        let data = "date,kind,amount,description,category\n2025-06-01,income,10.5€,x,y\n";
        let err = import_reader(data.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_blank_description_rejected_by_validation() {
        let data = "date,kind,amount,description,category\n2025-06-01,income,10, ,y\n";
        let err = import_reader(data.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_empty_file_gives_empty_ledger() {
        let data = "date,kind,amount,description,category\n";
        let ledger = import_reader(data.as_bytes()).unwrap();
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_import_csv_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seed.csv");
        std::fs::write(&path, GOOD).unwrap();
        let ledger = import_csv(&path).unwrap();
        assert_eq!(ledger.len(), 3);
    }

    #[test]
    fn test_missing_file() {
        let err = import_csv(Path::new("/nonexistent/seed.csv")).unwrap_err();
        assert!(matches!(err, LedgerError::Import(_)));
    }
}
