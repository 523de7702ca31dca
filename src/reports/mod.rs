//! Reports module for finance-tracker
//!
//! Aggregate views over the ledger: the monthly expense report with its
//! category breakdown, budget status, and a month-by-month overview.

pub mod budget_status;
pub mod expenses;
pub mod monthly;

pub use budget_status::BudgetStatus;
pub use expenses::{CategoryBreakdown, ExpenseReport};
pub use monthly::{MonthSummary, MonthlyOverview};
