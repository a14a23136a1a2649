//! Transaction register formatting
//!
//! Renders a list of transactions as a table for the `transactions` CLI
//! command.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{Transaction, TransactionKind};

/// One register row
#[derive(Tabled)]
struct RegisterRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Kind")]
    kind: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format a list of transactions as a register table
pub fn format_register(
    transactions: &[&Transaction],
    currency_symbol: &str,
    date_format: &str,
) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let rows: Vec<RegisterRow> = transactions
        .iter()
        .map(|txn| {
            let sign = match txn.kind {
                TransactionKind::Income => "+",
                TransactionKind::Expense => "-",
            };
            RegisterRow {
                date: txn.date.format(date_format).to_string(),
                kind: txn.kind.to_string(),
                description: txn.description.clone(),
                category: txn.category.clone(),
                amount: format!("{}{}", sign, txn.amount.format_with_symbol(currency_symbol)),
            }
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{}\n", table)
}
