//! Interactive session mode
//!
//! Reads one command per line and runs it against the loaded ledger, so
//! expenses added during the session show up in later queries. Lines are
//! split with shell quoting rules and parsed with the same clap commands as
//! the command line.

use std::io::{BufRead, Write};

use clap::{Parser, Subcommand};

use crate::error::{FinanceError, FinanceResult};
use crate::models::Money;

use super::{handle_ledger_command, CliContext, LedgerCommands};

#[derive(Parser, Debug)]
#[command(
    name = "session",
    no_binary_name = true,
    disable_version_flag = true,
    help_template = "{subcommands}"
)]
struct SessionLine {
    #[command(subcommand)]
    command: SessionCommand,
}

#[derive(Subcommand, Debug)]
enum SessionCommand {
    #[command(flatten)]
    Ledger(LedgerCommands),

    /// Change the monthly budget for the rest of the session
    SetBudget {
        /// New budget amount, e.g. 4200 or 4200.50
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Leave the session
    #[command(alias = "quit")]
    Exit,
}

/// Run a session until `exit` or end of input
pub fn run_session<R: BufRead, W: Write>(
    ctx: &CliContext,
    input: R,
    out: &mut W,
    prompt: bool,
) -> FinanceResult<()> {
    writeln!(
        out,
        "Finance session. Type 'help' for commands, 'exit' to quit."
    )?;

    let mut lines = input.lines();
    loop {
        if prompt {
            write!(out, "finance> ")?;
            out.flush()?;
        }

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let words = match shell_words::split(line) {
            Ok(words) => words,
            Err(e) => {
                writeln!(out, "Error: {}", e)?;
                continue;
            }
        };

        let parsed = match SessionLine::try_parse_from(words) {
            Ok(parsed) => parsed,
            Err(e) => {
                // Covers `help` as well as usage errors
                write!(out, "{}", e.render())?;
                continue;
            }
        };

        tracing::debug!(command = ?parsed.command, "Session command");

        let result = match parsed.command {
            SessionCommand::Exit => break,
            SessionCommand::SetBudget { amount } => set_budget(ctx, &amount, out),
            SessionCommand::Ledger(cmd) => handle_ledger_command(ctx, cmd, out),
        };

        if let Err(e) = result {
            writeln!(out, "Error: {}", e)?;
        }
    }

    Ok(())
}

fn set_budget<W: Write>(ctx: &CliContext, amount: &str, out: &mut W) -> FinanceResult<()> {
    let budget = Money::parse(amount)
        .map_err(|e| FinanceError::Validation(format!("Invalid budget amount: {}", e)))?;
    ctx.storage.set_budget(budget)?;
    writeln!(
        out,
        "Monthly budget set to {}",
        budget.format_with_symbol(ctx.symbol())
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::models::{Ledger, MonthKey};
    use crate::storage::Storage;

    fn run(storage: &Storage, script: &str) -> String {
        let settings = Settings::default();
        let ctx = CliContext::new(storage, &settings, false);
        let mut out = Vec::new();
        run_session(&ctx, script.as_bytes(), &mut out, false).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_added_expense_visible_in_later_query() {
        let storage = Storage::with_ledger(Ledger::new(), Money::from_cents(500000));
        let output = run(
            &storage,
            "add \"Spent $12 at Starbucks\"\nquery\nbudget\nexit\n",
        );

        assert!(output.contains("Added $12.00 expense for Coffee at Starbucks"));
        assert!(output.contains("COFFEE ($12.00)"));
        assert!(output.contains("$4988.00"));

        let current = MonthKey::from_date(chrono::Local::now().date_naive());
        assert_eq!(storage.ledger.expense_count(current).unwrap(), 1);
    }

    #[test]
    fn test_set_budget() {
        let storage = Storage::with_ledger(Ledger::new(), Money::from_cents(500000));
        let output = run(&storage, "set-budget 1200\n");

        assert!(output.contains("Monthly budget set to"));
        assert_eq!(storage.budget().unwrap().cents(), 120000);
    }

    #[test]
    fn test_errors_do_not_end_session() {
        let storage = Storage::with_ledger(Ledger::new(), Money::from_cents(500000));
        let output = run(
            &storage,
            "query 2024-13\nset-budget -5\nfrobnicate\nadd \"unclosed\nadd \"no amount here\"\nmonths\n",
        );

        assert!(output.contains("Expense Report: 2024-13"));
        assert!(output.contains("Error: Validation error"));
        assert!(output.contains("Error: Could not parse amount"));
        assert_eq!(storage.budget().unwrap().cents(), 500000);
    }

    #[test]
    fn test_exit_stops_reading() {
        let storage = Storage::with_ledger(Ledger::new(), Money::from_cents(500000));
        run(&storage, "exit\nadd \"$5 coffee\"\n");

        let current = MonthKey::from_date(chrono::Local::now().date_naive());
        assert_eq!(storage.ledger.expense_count(current).unwrap(), 0);
    }
}
