//! Free-text expense parsing
//!
//! Turns a description such as "Spent $45.50 at Starbucks for Coffee" into an
//! [`ExpenseRecord`]: the first number is the amount, and the catalogs supply
//! category and source by substring match.

use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::error::{FinanceError, FinanceResult};
use crate::models::{Catalog, ExpenseRecord, Money, MISCELLANEOUS, UNKNOWN_SOURCE};

fn amount_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\$?([0-9]+(?:\.[0-9]+)?)").expect("valid amount regex"))
}

/// Find the first amount in a description
///
/// Fails with [`FinanceError::AmountNotFound`] when the text holds no number,
/// and with [`FinanceError::AmountTooLarge`] when the first number does not
/// fit in the ledger's amount range.
pub fn extract_amount(description: &str) -> FinanceResult<Money> {
    let digits = amount_re()
        .captures(description)
        .and_then(|caps| caps.get(1))
        .ok_or(FinanceError::AmountNotFound)?
        .as_str();

    Money::parse(digits).map_err(|_| FinanceError::AmountTooLarge(digits.to_string()))
}

/// Parser from free-text descriptions to expense records
pub struct ExpenseParser<'a> {
    catalog: &'a Catalog,
}

impl<'a> ExpenseParser<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Parse a description into an expense
    ///
    /// `explicit_date` is used verbatim when non-empty; otherwise the date is
    /// `today`. Fails only when [`extract_amount`] does.
    pub fn parse(
        &self,
        description: &str,
        explicit_date: Option<&str>,
        today: NaiveDate,
    ) -> FinanceResult<ExpenseRecord> {
        let amount = extract_amount(description)?;
        let (category, source) = self.categorize(description);

        let date = match explicit_date.map(str::trim) {
            Some(date) if !date.is_empty() => date.to_string(),
            _ => today.format("%Y-%m-%d").to_string(),
        };

        tracing::debug!(
            %amount,
            category = %category,
            source = %source,
            date = %date,
            "Parsed expense description"
        );

        Ok(ExpenseRecord {
            category,
            amount,
            source,
            date,
            description: description.to_string(),
        })
    }

    /// Infer (category, source) for a description
    ///
    /// A direct category hit wins. The matched source's own category is used
    /// only when no category name occurs in the text, even if the two
    /// disagree.
    pub fn categorize(&self, description: &str) -> (String, String) {
        let category = self.catalog.match_category(description);

        match self.catalog.match_source(description) {
            Some(hit) => (
                category.unwrap_or(hit.category).to_string(),
                hit.source.to_string(),
            ),
            None => (
                category.unwrap_or(MISCELLANEOUS).to_string(),
                UNKNOWN_SOURCE.to_string(),
            ),
        }
    }
}
