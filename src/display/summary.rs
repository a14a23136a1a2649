//! Summary formatting
//!
//! Renders the ledger totals and the expenses-by-category breakdown for the
//! `summary` CLI command.

use crate::services::{expenses_by_category, Ledger};

/// Create a simple bar representation of a share
fn format_bar(percentage: u32, width: usize) -> String {
    let filled = (percentage as usize * width / 100).min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format the ledger summary: totals plus category breakdown
pub fn format_summary(ledger: &Ledger, currency_symbol: &str) -> String {
    let totals = ledger.totals();
    let mut output = String::new();

    output.push_str(&format!(
        "Balance:      {}\n",
        totals.balance.format_with_symbol(currency_symbol)
    ));
    output.push_str(&format!(
        "Income:       {}\n",
        totals.income.format_with_symbol(currency_symbol)
    ));
    output.push_str(&format!(
        "Expenses:     {}\n",
        totals.expenses.format_with_symbol(currency_symbol)
    ));
    output.push_str(&format!("Transactions: {}\n", ledger.len()));

    let spends = expenses_by_category(ledger);
    if !spends.is_empty() {
        output.push('\n');
        output.push_str("Expenses by category\n");
        for spend in spends {
            output.push_str(&format!(
                "  {:<16} {} {:>3}%  {}\n",
                spend.category,
                format_bar(spend.percentage, 20),
                spend.percentage,
                spend.amount.format_with_symbol(currency_symbol)
            ));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_width() {
        assert_eq!(format_bar(0, 10), "░".repeat(10));
        assert_eq!(format_bar(100, 10), "█".repeat(10));
        assert_eq!(format_bar(50, 10), format!("{}{}", "█".repeat(5), "░".repeat(5)));
    }

    #[test]
    fn test_summary_totals() {
        let output = format_summary(&Ledger::sample(), "$");
        assert!(output.contains("Balance:      $2450.00"));
        assert!(output.contains("Income:       $3500.00"));
        assert!(output.contains("Expenses:     $1050.00"));
        assert!(output.contains("Transactions: 3"));
    }

    #[test]
    fn test_summary_category_breakdown() {
        let output = format_summary(&Ledger::sample(), "$");
        assert!(output.contains("Housing"));
        assert!(output.contains("Food"));
    }

    #[test]
    fn test_empty_ledger_has_no_breakdown() {
        let output = format_summary(&Ledger::new(), "$");
        assert!(!output.contains("Expenses by category"));
        assert!(output.contains("Transactions: 0"));
    }
}
