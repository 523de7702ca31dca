//! finance-tracker - Personal finance queries over a monthly CSV ledger
//!
//! This library loads a month-bucketed ledger of income and expense rows from
//! a CSV export and answers three operations over it: the expense breakdown
//! for a month, the remaining budget for a month, and adding an expense
//! described in free text ("Spent $12 at Starbucks").
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, months, records, the catalog)
//! - `storage`: CSV loading and the in-memory ledger store
//! - `services`: Month resolution and expense parsing
//! - `reports`: Expense, budget, and month overview reports
//! - `tools`: The externally callable operations
//! - `cli`: Command handlers and session mode
//!
//! # Example
//!
//! ```rust,ignore
//! use finance_tracker::config::{FinancePaths, Settings};
//! use finance_tracker::storage::Storage;
//!
//! let paths = FinancePaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let mut storage = Storage::new(settings.source_path(&paths), settings.monthly_budget);
//! storage.load_all()?;
//!
//! let report = finance_tracker::tools::query_expenses(&storage, "last month", today)?;
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;
pub mod tools;

pub use error::{FinanceError, FinanceResult};
