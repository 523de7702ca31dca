//! Service layer for finance-tracker
//!
//! The service layer holds the logic on top of the storage layer: month
//! resolution, free-text expense parsing, and adding expenses.

pub mod expense;
pub mod expense_parser;
pub mod period;

pub use expense::{AddedExpense, ExpenseService};
pub use expense_parser::{extract_amount, ExpenseParser};
pub use period::MonthSelector;
