//! CLI commands for reports
//!
//! Query, budget, and month overview output in terminal or JSON form.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use crate::error::{FinanceError, FinanceResult};
use crate::reports::MonthlyOverview;
use crate::tools;

use super::CliContext;

/// Handle `query`
pub fn handle_query_command<W: Write>(
    ctx: &CliContext,
    month: &str,
    output: Option<PathBuf>,
    out: &mut W,
) -> FinanceResult<()> {
    let report = tools::query_expenses(ctx.storage, month, ctx.today())?;

    if let Some(path) = output {
        let file = File::create(&path).map_err(|e| {
            FinanceError::Export(format!("Failed to create file {}: {}", path.display(), e))
        })?;
        report.export_csv(BufWriter::new(file))?;
        writeln!(out, "Expense report exported to: {}", path.display())?;
    } else if ctx.json {
        ctx.write_json(out, &report)?;
    } else {
        write!(out, "{}", report.format_terminal(ctx.symbol()))?;
    }

    Ok(())
}

/// Handle `budget`
pub fn handle_budget_command<W: Write>(
    ctx: &CliContext,
    month: &str,
    out: &mut W,
) -> FinanceResult<()> {
    let status = tools::budget_status(ctx.storage, month, ctx.today())?;

    if ctx.json {
        ctx.write_json(out, &status)?;
    } else {
        write!(out, "{}", status.format_terminal(ctx.symbol()))?;
    }

    Ok(())
}

/// Handle `months`
pub fn handle_months_command<W: Write>(ctx: &CliContext, out: &mut W) -> FinanceResult<()> {
    let overview = MonthlyOverview::generate(ctx.storage)?;

    if ctx.json {
        ctx.write_json(out, &overview)?;
    } else {
        writeln!(out, "{}", overview.format_terminal(ctx.symbol()))?;
    }

    Ok(())
}
