//! Expense service
//!
//! Adds expenses described in free text to the ledger.

use chrono::NaiveDate;

use crate::error::FinanceResult;
use crate::models::{Catalog, ExpenseRecord, MonthKey};
use crate::storage::Storage;

use super::expense_parser::ExpenseParser;

/// An expense that was appended to the ledger, with the bucket it went into
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddedExpense {
    pub month: MonthKey,
    pub expense: ExpenseRecord,
}

/// Service for adding expenses
pub struct ExpenseService<'a> {
    storage: &'a Storage,
    catalog: &'a Catalog,
}

impl<'a> ExpenseService<'a> {
    pub fn new(storage: &'a Storage, catalog: &'a Catalog) -> Self {
        Self { storage, catalog }
    }

    /// Parse a description and append the expense to the ledger
    ///
    /// The expense is filed under the month of `today`, even when `date`
    /// names a different month. On a parse failure the ledger is untouched.
    pub fn add_from_description(
        &self,
        description: &str,
        date: Option<&str>,
        today: NaiveDate,
    ) -> FinanceResult<AddedExpense> {
        let expense = ExpenseParser::new(self.catalog).parse(description, date, today)?;
        let month = MonthKey::from_date(today);

        self.storage.ledger.add_expense(month, expense.clone())?;
        tracing::info!(
            month = %month,
            amount = %expense.amount,
            category = %expense.category,
            "Added expense"
        );

        Ok(AddedExpense { month, expense })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FinanceError;
    use crate::models::{Ledger, Money};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    #[test]
    fn test_add_appends_to_current_month() {
        let storage = Storage::with_ledger(Ledger::new(), Money::from_cents(500000));
        let catalog = Catalog::default();
        let service = ExpenseService::new(&storage, &catalog);

        let added = service
            .add_from_description("Spent $45.50 at Starbucks for Coffee", None, today())
            .unwrap();

        assert_eq!(added.month.to_string(), "2026-10");
        assert_eq!(storage.ledger.expense_count(added.month).unwrap(), 1);
        assert_eq!(added.expense.date, "2026-10-18");
    }

    #[test]
    fn test_explicit_date_does_not_change_bucket() {
        let storage = Storage::with_ledger(Ledger::new(), Money::from_cents(500000));
        let catalog = Catalog::default();
        let service = ExpenseService::new(&storage, &catalog);

        let added = service
            .add_from_description("$12 lunch break", Some("2024-01-15"), today())
            .unwrap();

        // Filed under the processing month while keeping the historical date
        assert_eq!(added.month.to_string(), "2026-10");
        assert_eq!(added.expense.date, "2024-01-15");
        let jan = MonthKey::parse("2024-01").unwrap();
        assert_eq!(storage.ledger.expense_count(jan).unwrap(), 0);
    }

    #[test]
    fn test_failed_parse_leaves_ledger_untouched() {
        let storage = Storage::with_ledger(Ledger::new(), Money::from_cents(500000));
        let catalog = Catalog::default();
        let service = ExpenseService::new(&storage, &catalog);

        let err = service
            .add_from_description("coffee with friends", None, today())
            .unwrap_err();

        assert!(matches!(err, FinanceError::AmountNotFound));
        assert!(storage.ledger.months().unwrap().is_empty());
    }
}
