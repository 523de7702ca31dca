//! Core data models for finance-tracker
//!
//! This module contains the data structures of the ledger domain: money,
//! month keys, income/expense records, the ledger itself, and the
//! categorization catalog.

pub mod catalog;
pub mod ledger;
pub mod money;
pub mod month;
pub mod record;

pub use catalog::{Catalog, SourceGroup, SourceMatch, MISCELLANEOUS, UNKNOWN_SOURCE};
pub use ledger::{Ledger, MonthBucket};
pub use money::Money;
pub use month::MonthKey;
pub use record::{ExpenseLine, ExpenseRecord, IncomeRecord};
