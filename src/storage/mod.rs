//! Storage layer for finance-tracker
//!
//! The store is created once at startup from the CSV source and lives for
//! the rest of the process. It owns the ledger and the shared monthly budget.

pub mod csv_source;
pub mod file_io;
pub mod ledger;

pub use csv_source::{
    create_ledger_file, read_ledger, read_ledger_from_reader, SourceColumns, LEDGER_HEADERS,
};
pub use file_io::{read_json, write_json_atomic};
pub use ledger::LedgerRepository;

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::FinanceError;
use crate::models::{Ledger, Money};

/// Main storage coordinator: the ledger plus the process-wide budget
pub struct Storage {
    pub ledger: LedgerRepository,
    budget: RwLock<Money>,
}

impl Storage {
    /// Create a storage instance for a source file (nothing is read yet)
    pub fn new(source: PathBuf, monthly_budget: Money) -> Self {
        Self {
            ledger: LedgerRepository::new(source),
            budget: RwLock::new(monthly_budget),
        }
    }

    /// Create a storage instance around an already-built ledger
    pub fn with_ledger(ledger: Ledger, monthly_budget: Money) -> Self {
        Self {
            ledger: LedgerRepository::with_ledger(PathBuf::new(), ledger),
            budget: RwLock::new(monthly_budget),
        }
    }

    /// Load all data from the source
    pub fn load_all(&mut self) -> Result<(), FinanceError> {
        self.ledger.load()
    }

    /// Current monthly budget
    pub fn budget(&self) -> Result<Money, FinanceError> {
        let budget = self.budget.read().map_err(|e| {
            FinanceError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(*budget)
    }

    /// Replace the monthly budget
    pub fn set_budget(&self, amount: Money) -> Result<(), FinanceError> {
        if amount.is_negative() {
            return Err(FinanceError::Validation(
                "Monthly budget cannot be negative".into(),
            ));
        }

        let mut budget = self.budget.write().map_err(|e| {
            FinanceError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        *budget = amount;
        tracing::debug!(budget = %amount, "Monthly budget updated");
        Ok(())
    }
}
