//! In-memory ledger model
//!
//! A ledger maps each month to a bucket of income and expense records.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::money::Money;
use crate::error::{FinanceError, FinanceResult};
use super::month::MonthKey;
use super::record::{ExpenseRecord, IncomeRecord};

/// Income and expense records for one month, in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthBucket {
    pub income: Vec<IncomeRecord>,
    pub expenses: Vec<ExpenseRecord>,
}

impl MonthBucket {
    /// Totals are always in range: pushes that would overflow them are refused
    pub fn total_income(&self) -> Money {
        self.income.iter().map(|r| r.amount).sum()
    }

    pub fn total_expenses(&self) -> Money {
        self.expenses.iter().map(|r| r.amount).sum()
    }
}

/// The full collection of month buckets
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    months: BTreeMap<MonthKey, MonthBucket>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the bucket for a month, creating an empty one if absent
    pub fn bucket_mut(&mut self, month: MonthKey) -> &mut MonthBucket {
        self.months.entry(month).or_default()
    }

    pub fn bucket(&self, month: MonthKey) -> Option<&MonthBucket> {
        self.months.get(&month)
    }

    /// Expenses for a month; empty when the month is unknown
    pub fn expenses(&self, month: MonthKey) -> &[ExpenseRecord] {
        self.months
            .get(&month)
            .map(|b| b.expenses.as_slice())
            .unwrap_or(&[])
    }

    /// Income for a month; empty when the month is unknown
    pub fn income(&self, month: MonthKey) -> &[IncomeRecord] {
        self.months
            .get(&month)
            .map(|b| b.income.as_slice())
            .unwrap_or(&[])
    }

    /// Append income to a month
    ///
    /// Fails with [`FinanceError::AmountTooLarge`] if the month's income total
    /// would leave the representable range; the ledger is unchanged then.
    pub fn push_income(&mut self, month: MonthKey, record: IncomeRecord) -> FinanceResult<()> {
        let bucket = self.bucket_mut(month);
        ensure_total(bucket.total_income(), record.amount, "income", month)?;
        bucket.income.push(record);
        Ok(())
    }

    /// Append an expense to a month, with the same range check as income
    pub fn push_expense(&mut self, month: MonthKey, record: ExpenseRecord) -> FinanceResult<()> {
        let bucket = self.bucket_mut(month);
        ensure_total(bucket.total_expenses(), record.amount, "expense", month)?;
        bucket.expenses.push(record);
        Ok(())
    }

    /// Months in chronological order
    pub fn months(&self) -> impl Iterator<Item = (&MonthKey, &MonthBucket)> {
        self.months.iter()
    }

    pub fn month_count(&self) -> usize {
        self.months.len()
    }

    pub fn expense_count(&self) -> usize {
        self.months.values().map(|b| b.expenses.len()).sum()
    }

    pub fn income_count(&self) -> usize {
        self.months.values().map(|b| b.income.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }
}

fn ensure_total(total: Money, amount: Money, kind: &str, month: MonthKey) -> FinanceResult<()> {
    match total.checked_add(amount) {
        Some(_) => Ok(()),
        None => Err(FinanceError::AmountTooLarge(format!(
            "{} total for {} would exceed {}",
            kind,
            month,
            Money::from_cents(i64::MAX)
        ))),
    }
}
