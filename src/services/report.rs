//! Report aggregation
//!
//! Groupings consumed by the dashboard chart and the reports view. Everything
//! here is a linear scan over the ledger; there is no precomputation.

use chrono::Datelike;

use crate::models::{Money, TransactionKind};
use crate::services::Ledger;

/// Income and expense totals for one calendar month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyFlow {
    /// Year of the month
    pub year: i32,
    /// Month number (1-12)
    pub month: u32,
    /// Display label, e.g. "Jun 2025"
    pub label: String,
    /// Total income in the month
    pub income: Money,
    /// Total expenses in the month
    pub expenses: Money,
}

/// Total spent in one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySpend {
    /// Category label
    pub category: String,
    /// Total expense amount
    pub amount: Money,
    /// Share of all expenses, rounded to the nearest percent
    pub percentage: u32,
}

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Group the ledger's transactions by calendar month, chronologically
pub fn monthly_flows(ledger: &Ledger) -> Vec<MonthlyFlow> {
    let mut flows: Vec<MonthlyFlow> = Vec::new();

    for txn in ledger.transactions() {
        let (year, month) = (txn.date.year(), txn.date.month());
        let flow = match flows.iter_mut().find(|f| f.year == year && f.month == month) {
            Some(flow) => flow,
            None => {
                flows.push(MonthlyFlow {
                    year,
                    month,
                    label: format!("{} {}", MONTH_NAMES[month as usize - 1], year),
                    income: Money::zero(),
                    expenses: Money::zero(),
                });
                flows.last_mut().unwrap()
            }
        };

        match txn.kind {
            TransactionKind::Income => flow.income += txn.amount,
            TransactionKind::Expense => flow.expenses += txn.amount,
        }
    }

    flows.sort_by_key(|f| (f.year, f.month));
    flows
}

/// Group expense totals by category, largest first, with share-of-total
/// percentages for bar rendering
pub fn expenses_by_category(ledger: &Ledger) -> Vec<CategorySpend> {
    let mut spends: Vec<CategorySpend> = Vec::new();

    for txn in ledger.transactions() {
        if txn.kind != TransactionKind::Expense {
            continue;
        }
        match spends.iter_mut().find(|s| s.category == txn.category) {
            Some(spend) => spend.amount += txn.amount,
            None => spends.push(CategorySpend {
                category: txn.category.clone(),
                amount: txn.amount,
                percentage: 0,
            }),
        }
    }

    let total: i64 = spends.iter().map(|s| s.amount.cents()).sum();
    if total > 0 {
        for spend in &mut spends {
            spend.percentage = (spend.amount.cents() as f64 / total as f64 * 100.0).round() as u32;
        }
    }

    spends.sort_by(|a, b| b.amount.cmp(&a.amount));
    spends
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Transaction;
    use chrono::NaiveDate;

    fn txn(kind: TransactionKind, cents: i64, cat: &str, y: i32, m: u32, d: u32) -> Transaction {
        Transaction::new(
            kind,
            Money::from_cents(cents),
            "item",
            cat,
            NaiveDate::from_ymd_opt(y, m, d).unwrap(),
        )
    }

    fn ledger() -> Ledger {
        Ledger::with_transactions(vec![
            txn(TransactionKind::Income, 300_000, "Work", 2025, 5, 1),
            txn(TransactionKind::Expense, 50_000, "Housing", 2025, 5, 3),
            txn(TransactionKind::Expense, 20_000, "Food", 2025, 6, 2),
            txn(TransactionKind::Income, 310_000, "Work", 2025, 6, 1),
            txn(TransactionKind::Expense, 30_000, "Housing", 2025, 6, 10),
        ])
        .unwrap()
    }

    #[test]
    fn test_monthly_flows_grouping() {
        let flows = monthly_flows(&ledger());
        assert_eq!(flows.len(), 2);

        assert_eq!(flows[0].label, "May 2025");
        assert_eq!(flows[0].income.cents(), 300_000);
        assert_eq!(flows[0].expenses.cents(), 50_000);

        assert_eq!(flows[1].label, "Jun 2025");
        assert_eq!(flows[1].income.cents(), 310_000);
        assert_eq!(flows[1].expenses.cents(), 50_000);
    }

    #[test]
    fn test_monthly_flows_chronological_even_if_inserted_out_of_order() {
        let ledger = Ledger::with_transactions(vec![
            txn(TransactionKind::Expense, 100, "A", 2025, 7, 1),
            txn(TransactionKind::Expense, 100, "A", 2024, 12, 1),
        ])
        .unwrap();
        let flows = monthly_flows(&ledger);
        assert_eq!(flows[0].label, "Dec 2024");
        assert_eq!(flows[1].label, "Jul 2025");
    }

    #[test]
    fn test_expenses_by_category_sorted_descending() {
        let spends = expenses_by_category(&ledger());
        assert_eq!(spends.len(), 2);
        assert_eq!(spends[0].category, "Housing");
        assert_eq!(spends[0].amount.cents(), 80_000);
        assert_eq!(spends[1].category, "Food");
        assert_eq!(spends[1].amount.cents(), 20_000);
    }

    #[test]
    fn test_category_percentages() {
        let spends = expenses_by_category(&ledger());
        assert_eq!(spends[0].percentage, 80);
        assert_eq!(spends[1].percentage, 20);
    }

    #[test]
    fn test_income_excluded_from_category_spend() {
        let spends = expenses_by_category(&ledger());
        assert!(spends.iter().all(|s| s.category != "Work"));
    }

    #[test]
    fn test_empty_ledger() {
        let ledger = Ledger::new();
        assert!(monthly_flows(&ledger).is_empty());
        assert!(expenses_by_category(&ledger).is_empty());
    }
}
