//! Expense Report
//!
//! Total expenses for one month with a breakdown by category.

use std::io::Write;

use serde::ser::Serializer;
use serde::Serialize;

use crate::error::{FinanceError, FinanceResult};
use crate::models::{ExpenseLine, ExpenseRecord, Money, MonthKey};
use crate::storage::Storage;

/// Expenses of one category within the report month
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryBreakdown {
    /// Category name (the map key when serialized)
    #[serde(skip)]
    pub category: String,
    pub total: Money,
    pub expenses: Vec<ExpenseLine>,
}

/// Expense Report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpenseReport {
    /// The resolved month, or the selector as given when it names no month
    pub month: String,
    pub total_expenses: Money,
    /// Categories in first-seen order; serialized as a category-keyed map
    #[serde(serialize_with = "serialize_breakdown")]
    pub category_breakdown: Vec<CategoryBreakdown>,
}

fn serialize_breakdown<S: Serializer>(
    breakdown: &[CategoryBreakdown],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_map(breakdown.iter().map(|c| (&c.category, c)))
}

impl ExpenseReport {
    /// Generate the report for a month; an unknown month yields an empty report
    pub fn generate(storage: &Storage, month: MonthKey) -> FinanceResult<Self> {
        let expenses = storage.ledger.expenses(month)?;
        Ok(Self::from_expenses(month, &expenses))
    }

    /// A report with no expenses under an arbitrary month label
    pub fn empty(label: impl Into<String>) -> Self {
        Self {
            month: label.into(),
            total_expenses: Money::zero(),
            category_breakdown: Vec::new(),
        }
    }

    /// Build the report from a month's expenses, in insertion order
    pub fn from_expenses(month: MonthKey, expenses: &[ExpenseRecord]) -> Self {
        let mut breakdown: Vec<CategoryBreakdown> = Vec::new();

        for expense in expenses {
            let position = match breakdown
                .iter()
                .position(|c| c.category == expense.category)
            {
                Some(position) => position,
                None => {
                    breakdown.push(CategoryBreakdown {
                        category: expense.category.clone(),
                        total: Money::zero(),
                        expenses: Vec::new(),
                    });
                    breakdown.len() - 1
                }
            };

            let entry = &mut breakdown[position];
            entry.total += expense.amount;
            entry.expenses.push(expense.to_line());
        }

        Self {
            month: month.to_string(),
            total_expenses: expenses.iter().map(|e| e.amount).sum(),
            category_breakdown: breakdown,
        }
    }

    /// Look up one category's breakdown
    pub fn category(&self, name: &str) -> Option<&CategoryBreakdown> {
        self.category_breakdown.iter().find(|c| c.category == name)
    }

    pub fn expense_count(&self) -> usize {
        self.category_breakdown
            .iter()
            .map(|c| c.expenses.len())
            .sum()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!("Expense Report: {}\n", self.month));
        output.push_str(&"=".repeat(80));
        output.push('\n');

        if self.category_breakdown.is_empty() {
            output.push_str("No expenses recorded for this month.\n");
            return output;
        }

        output.push_str(&format!(
            "{:<12} {:>12}  {:<20} {}\n",
            "Date", "Amount", "Source", "Description"
        ));
        output.push_str(&"-".repeat(80));
        output.push('\n');

        for category in &self.category_breakdown {
            output.push_str(&format!(
                "\n{} ({})\n",
                category.category.to_uppercase(),
                category.total.format_with_symbol(symbol)
            ));

            for line in &category.expenses {
                output.push_str(&format!(
                    "  {:<10} {:>12}  {:<20} {}\n",
                    line.date,
                    line.amount.format_with_symbol(symbol),
                    line.source,
                    line.description
                ));
            }
        }

        output.push_str(&"-".repeat(80));
        output.push('\n');
        output.push_str(&format!(
            "{:<12} {:>12}  ({} expenses)\n",
            "TOTAL",
            self.total_expenses.format_with_symbol(symbol),
            self.expense_count()
        ));

        output
    }

    /// Export the report to CSV format, one row per expense plus a total row
    pub fn export_csv<W: Write>(&self, writer: W) -> FinanceResult<()> {
        let mut csv = csv::Writer::from_writer(writer);
        let export_err = |e: csv::Error| FinanceError::Export(e.to_string());

        csv.write_record(["Month", "Category", "Amount", "Source", "Date", "Description"])
            .map_err(export_err)?;

        let month = self.month.as_str();
        for category in &self.category_breakdown {
            for line in &category.expenses {
                let amount = line.amount.format_plain();
                csv.write_record([
                    month,
                    category.category.as_str(),
                    amount.as_str(),
                    line.source.as_str(),
                    line.date.as_str(),
                    line.description.as_str(),
                ])
                .map_err(export_err)?;
            }
        }

        let total = self.total_expenses.format_plain();
        csv.write_record([month, "TOTAL", total.as_str(), "", "", ""])
            .map_err(export_err)?;

        csv.flush()
            .map_err(|e| FinanceError::Export(e.to_string()))?;
        Ok(())
    }
}
