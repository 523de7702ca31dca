//! Ledger repository
//!
//! Holds the in-memory ledger loaded from the CSV source. The ledger is
//! mutated only by appending expenses and is never written back.

use std::path::{Path, PathBuf};
use std::sync::RwLock;

use crate::error::FinanceError;
use crate::models::{ExpenseRecord, IncomeRecord, Ledger, MonthBucket, MonthKey};

use super::csv_source::read_ledger;

/// Repository for the month-partitioned ledger
pub struct LedgerRepository {
    path: PathBuf,
    data: RwLock<Ledger>,
}

impl LedgerRepository {
    /// Create an empty repository backed by the given source file
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Ledger::new()),
        }
    }

    /// Create a repository around an existing ledger
    pub fn with_ledger(path: PathBuf, ledger: Ledger) -> Self {
        Self {
            path,
            data: RwLock::new(ledger),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the ledger from the source file, replacing current contents
    pub fn load(&self) -> Result<(), FinanceError> {
        let ledger = read_ledger(&self.path)?;

        let mut data = self.data.write().map_err(|e| {
            FinanceError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        *data = ledger;

        Ok(())
    }

    /// Expenses recorded for a month, in insertion order
    pub fn expenses(&self, month: MonthKey) -> Result<Vec<ExpenseRecord>, FinanceError> {
        let data = self.data.read().map_err(|e| {
            FinanceError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.expenses(month).to_vec())
    }

    /// Income recorded for a month, in insertion order
    pub fn income(&self, month: MonthKey) -> Result<Vec<IncomeRecord>, FinanceError> {
        let data = self.data.read().map_err(|e| {
            FinanceError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.income(month).to_vec())
    }

    /// Append an expense to a month's bucket, creating the bucket if needed
    ///
    /// Fails with [`FinanceError::AmountTooLarge`] when the month total would
    /// overflow; nothing is appended then.
    pub fn add_expense(&self, month: MonthKey, record: ExpenseRecord) -> Result<(), FinanceError> {
        let mut data = self.data.write().map_err(|e| {
            FinanceError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        data.push_expense(month, record)
    }

    /// All month buckets in chronological order
    pub fn months(&self) -> Result<Vec<(MonthKey, MonthBucket)>, FinanceError> {
        let data = self.data.read().map_err(|e| {
            FinanceError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data
            .months()
            .map(|(month, bucket)| (*month, bucket.clone()))
            .collect())
    }

    /// Number of expenses in a month
    pub fn expense_count(&self, month: MonthKey) -> Result<usize, FinanceError> {
        let data = self.data.read().map_err(|e| {
            FinanceError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.expenses(month).len())
    }
}
