//! Expense CLI command

use std::io::Write;

use crate::error::FinanceResult;
use crate::tools::{self, AddExpenseResponse};

use super::CliContext;

/// Handle `add`
pub fn handle_add_command<W: Write>(
    ctx: &CliContext,
    description: &str,
    date: &str,
    out: &mut W,
) -> FinanceResult<()> {
    let response = tools::add_expense(
        ctx.storage,
        &ctx.settings.catalog,
        description,
        date,
        ctx.today(),
    )?;

    if ctx.json {
        return ctx.write_json(out, &response);
    }

    match response {
        AddExpenseResponse::Success { message, .. } => writeln!(out, "{}", message)?,
        AddExpenseResponse::Error { error } => writeln!(out, "Error: {}", error)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::models::{Ledger, Money, MonthKey};
    use crate::storage::Storage;

    #[test]
    fn test_add_prints_message() {
        let storage = Storage::with_ledger(Ledger::new(), Money::from_cents(500000));
        let settings = Settings::default();
        let ctx = CliContext::new(&storage, &settings, false);

        let mut out = Vec::new();
        handle_add_command(&ctx, "$8 at Blue Bottle", "2024-03-01", &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text.trim(),
            "Added $8.00 expense for Coffee at Blue Bottle on 2024-03-01"
        );

        let current = MonthKey::from_date(ctx.today());
        assert_eq!(storage.ledger.expense_count(current).unwrap(), 1);
    }

    #[test]
    fn test_add_without_amount_prints_error() {
        let storage = Storage::with_ledger(Ledger::new(), Money::from_cents(500000));
        let settings = Settings::default();
        let ctx = CliContext::new(&storage, &settings, true);

        let mut out = Vec::new();
        handle_add_command(&ctx, "some coffee", "", &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["error"], "Could not parse amount");
    }
}
