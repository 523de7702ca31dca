//! Monthly Overview
//!
//! One row per month in the ledger with income, expenses, and net.

use serde::Serialize;

use crate::error::FinanceResult;
use crate::models::{Money, MonthKey};
use crate::storage::Storage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthSummary {
    pub month: MonthKey,
    pub income: Money,
    pub expenses: Money,
    pub net: Money,
    pub expense_count: usize,
}

/// Overview across every month in the ledger, oldest first
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyOverview {
    pub months: Vec<MonthSummary>,
}

impl MonthlyOverview {
    pub fn generate(storage: &Storage) -> FinanceResult<Self> {
        let months = storage
            .ledger
            .months()?
            .into_iter()
            .map(|(month, bucket)| {
                let income = bucket.total_income();
                let expenses = bucket.total_expenses();
                MonthSummary {
                    month,
                    income,
                    expenses,
                    net: income - expenses,
                    expense_count: bucket.expenses.len(),
                }
            })
            .collect();

        Ok(Self { months })
    }

    pub fn format_terminal(&self, symbol: &str) -> String {
        if self.months.is_empty() {
            return "No months in the ledger.".to_string();
        }

        let mut output = String::new();
        output.push_str(&format!(
            "{:<10} {:>14} {:>14} {:>14} {:>8}\n",
            "Month", "Income", "Expenses", "Net", "Count"
        ));
        output.push_str(&"-".repeat(64));
        output.push('\n');

        for row in &self.months {
            output.push_str(&format!(
                "{:<10} {:>14} {:>14} {:>14} {:>8}\n",
                row.month.to_string(),
                row.income.format_with_symbol(symbol),
                row.expenses.format_with_symbol(symbol),
                row.net.format_with_symbol(symbol),
                row.expense_count
            ));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseRecord, IncomeRecord, Ledger};

    #[test]
    fn test_overview_rows() {
        let jan = MonthKey::parse("2024-01").unwrap();
        let feb = MonthKey::parse("2024-02").unwrap();

        let mut ledger = Ledger::new();
        ledger.push_income(feb, IncomeRecord::new("Salary", Money::from_cents(300000))).unwrap();
        ledger.push_income(jan, IncomeRecord::new("Salary", Money::from_cents(300000))).unwrap();
        ledger.push_expense(
            jan,
            ExpenseRecord {
                category: "Food".into(),
                amount: Money::from_cents(12550),
                source: "Costco".into(),
                date: "2024-01-04".into(),
                description: "Groceries".into(),
            },
        ).unwrap();
        let storage = Storage::with_ledger(ledger, Money::zero());

        let overview = MonthlyOverview::generate(&storage).unwrap();
        assert_eq!(overview.months.len(), 2);
        assert_eq!(overview.months[0].month, jan);
        assert_eq!(overview.months[0].net.cents(), 287450);
        assert_eq!(overview.months[1].expense_count, 0);

        let output = overview.format_terminal("$");
        assert!(output.contains("2024-01"));
        assert!(output.contains("$2874.50"));
    }
}
