//! Budget Status Report
//!
//! Compares a month's total expenses against the monthly budget.

use serde::Serialize;

use crate::error::FinanceResult;
use crate::models::{Money, MonthKey};
use crate::storage::Storage;

/// Budget status for one month
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BudgetStatus {
    /// The resolved month, or the selector as given when it names no month
    pub month: String,
    pub budget: Money,
    pub total_expenses: Money,
    /// Budget minus expenses; negative when over budget
    pub remaining: Money,
}

impl BudgetStatus {
    pub fn generate(storage: &Storage, month: MonthKey) -> FinanceResult<Self> {
        let budget = storage.budget()?;
        let total_expenses: Money = storage
            .ledger
            .expenses(month)?
            .iter()
            .map(|e| e.amount)
            .sum();

        Ok(Self::new(month.to_string(), budget, total_expenses))
    }

    pub fn new(month: impl Into<String>, budget: Money, total_expenses: Money) -> Self {
        Self {
            month: month.into(),
            budget,
            total_expenses,
            remaining: budget - total_expenses,
        }
    }

    pub fn is_over_budget(&self) -> bool {
        self.remaining.is_negative()
    }

    /// Share of the budget already spent, in percent
    pub fn percent_used(&self) -> f64 {
        if self.budget.is_zero() {
            0.0
        } else {
            (self.total_expenses.cents() as f64 / self.budget.cents() as f64) * 100.0
        }
    }

    /// Format the status for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!("Budget Status: {}\n", self.month));
        output.push_str(&"=".repeat(40));
        output.push('\n');
        output.push_str(&format!(
            "{:<16} {:>14}\n",
            "Budget:",
            self.budget.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "{:<16} {:>14}  ({:.1}%)\n",
            "Spent:",
            self.total_expenses.format_with_symbol(symbol),
            self.percent_used()
        ));

        let label = if self.is_over_budget() {
            "Over budget:"
        } else {
            "Remaining:"
        };
        output.push_str(&format!(
            "{:<16} {:>14}\n",
            label,
            self.remaining.format_with_symbol(symbol)
        ));

        output
    }
}
