//! Tool operations
//!
//! The three externally callable operations, with plain arguments and
//! serializable results. A transport (an MCP server, an HTTP handler, the CLI)
//! calls these and forwards the results as JSON.
//!
//! Month arguments accept "" (current month), "last month"/"previous month",
//! or "YYYY-MM". `today` is the processing date. Any other month argument
//! names no ledger month and reads as an empty one.

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::{FinanceError, FinanceResult};
use crate::models::{Catalog, ExpenseRecord, Money};
use crate::reports::{BudgetStatus, ExpenseReport};
use crate::services::{ExpenseService, MonthSelector};
use crate::storage::Storage;

/// Result of `add_expense`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AddExpenseResponse {
    Success {
        status: &'static str,
        message: String,
        expense: ExpenseRecord,
    },
    Error {
        error: String,
    },
}

impl AddExpenseResponse {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

/// Total expenses for a month with a breakdown by category
pub fn query_expenses(storage: &Storage, month: &str, today: NaiveDate) -> FinanceResult<ExpenseReport> {
    let selector = MonthSelector::parse(month);
    match selector.resolve(today) {
        Some(month) => ExpenseReport::generate(storage, month),
        None => {
            tracing::warn!(selector = month, "Month selector names no ledger month");
            Ok(ExpenseReport::empty(selector.label(today)))
        }
    }
}

/// Add an expense described in free text, e.g. "I just spent $10 on ice cream"
///
/// A description without a usable amount is reported in the response rather
/// than as an `Err`; the ledger is left unchanged in that case. That covers a
/// missing amount, an amount out of range, and an amount that would overflow
/// the month's total.
pub fn add_expense(
    storage: &Storage,
    catalog: &Catalog,
    description: &str,
    date: &str,
    today: NaiveDate,
) -> FinanceResult<AddExpenseResponse> {
    let service = ExpenseService::new(storage, catalog);

    match service.add_from_description(description, Some(date), today) {
        Ok(added) => {
            let expense = added.expense;
            Ok(AddExpenseResponse::Success {
                status: "success",
                message: format!(
                    "Added {} expense for {} at {} on {}",
                    expense.amount, expense.category, expense.source, expense.date
                ),
                expense,
            })
        }
        Err(FinanceError::AmountNotFound) => {
            tracing::warn!(description, "No amount found in expense description");
            Ok(AddExpenseResponse::Error {
                error: FinanceError::AmountNotFound.to_string(),
            })
        }
        Err(e @ FinanceError::AmountTooLarge(_)) => {
            tracing::warn!(description, error = %e, "Expense amount rejected");
            Ok(AddExpenseResponse::Error {
                error: e.to_string(),
            })
        }
        Err(e) => Err(e),
    }
}

/// Remaining budget for a month (negative when over budget)
pub fn budget_status(storage: &Storage, month: &str, today: NaiveDate) -> FinanceResult<BudgetStatus> {
    let selector = MonthSelector::parse(month);
    match selector.resolve(today) {
        Some(month) => BudgetStatus::generate(storage, month),
        None => {
            tracing::warn!(selector = month, "Month selector names no ledger month");
            Ok(BudgetStatus::new(
                selector.label(today),
                storage.budget()?,
                Money::zero(),
            ))
        }
    }
}
