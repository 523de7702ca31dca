//! Income and expense records
//!
//! The source file overloads its `category` column (it holds the income
//! source on income rows); records are split into two types at load time so
//! nothing downstream has to look at the row type again.

use serde::{Deserialize, Serialize};

use super::money::Money;

/// A single income entry within a month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeRecord {
    pub source: String,
    pub amount: Money,
}

impl IncomeRecord {
    pub fn new(source: impl Into<String>, amount: Money) -> Self {
        Self {
            source: source.into(),
            amount,
        }
    }
}

/// A single expense entry within a month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    pub category: String,
    pub amount: Money,
    pub source: String,
    /// Date as written by the user or the source file ("YYYY-MM-DD")
    pub date: String,
    pub description: String,
}

impl ExpenseRecord {
    /// The category-less view of this expense used in breakdowns
    pub fn to_line(&self) -> ExpenseLine {
        ExpenseLine {
            amount: self.amount,
            source: self.source.clone(),
            date: self.date.clone(),
            description: self.description.clone(),
        }
    }
}

/// An expense listed under its category in a report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseLine {
    pub amount: Money,
    pub source: String,
    pub date: String,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expense_serializes_with_decimal_amount() {
        let expense = ExpenseRecord {
            category: "Coffee".into(),
            amount: Money::from_cents(4550),
            source: "Starbucks".into(),
            date: "2024-01-05".into(),
            description: "Latte".into(),
        };

        let json = serde_json::to_value(&expense).unwrap();
        assert_eq!(json["amount"], 45.5);
        assert_eq!(json["category"], "Coffee");

        let line = serde_json::to_value(expense.to_line()).unwrap();
        assert!(line.get("category").is_none());
        assert_eq!(line["source"], "Starbucks");
    }
}
