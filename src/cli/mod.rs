//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the tool operations.

pub mod expense;
pub mod report;
pub mod session;

pub use expense::handle_add_command;
pub use report::{handle_budget_command, handle_months_command, handle_query_command};
pub use session::run_session;

use std::io::Write;
use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::Subcommand;
use serde::Serialize;

use crate::config::Settings;
use crate::error::FinanceResult;
use crate::storage::Storage;

/// Everything a command handler needs
pub struct CliContext<'a> {
    pub storage: &'a Storage,
    pub settings: &'a Settings,
    /// Print tool results as JSON instead of terminal tables
    pub json: bool,
}

impl<'a> CliContext<'a> {
    pub fn new(storage: &'a Storage, settings: &'a Settings, json: bool) -> Self {
        Self {
            storage,
            settings,
            json,
        }
    }

    /// The processing date
    pub fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }

    pub fn symbol(&self) -> &str {
        &self.settings.currency_symbol
    }

    pub(crate) fn write_json<W: Write, T: Serialize>(&self, out: &mut W, value: &T) -> FinanceResult<()> {
        writeln!(out, "{}", serde_json::to_string_pretty(value)?)?;
        Ok(())
    }
}

/// Ledger subcommands, shared by the command line and session mode
#[derive(Subcommand, Debug)]
pub enum LedgerCommands {
    /// Show total expenses for a month with a breakdown by category
    #[command(alias = "expenses")]
    Query {
        /// Month ("YYYY-MM", "last month"); defaults to the current month
        month: Option<String>,

        /// Export the breakdown to a CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Add an expense from a description, e.g. "Spent $12 at Starbucks"
    Add {
        /// Free-text description containing the amount
        description: String,

        /// Expense date (YYYY-MM-DD); defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Show the remaining budget for a month
    Budget {
        /// Month ("YYYY-MM", "last month"); defaults to the current month
        month: Option<String>,
    },

    /// List every month in the ledger with income and expense totals
    Months,
}

/// Handle a ledger command
pub fn handle_ledger_command<W: Write>(
    ctx: &CliContext,
    cmd: LedgerCommands,
    out: &mut W,
) -> FinanceResult<()> {
    match cmd {
        LedgerCommands::Query { month, output } => {
            handle_query_command(ctx, month.as_deref().unwrap_or(""), output, out)
        }
        LedgerCommands::Add { description, date } => {
            handle_add_command(ctx, &description, date.as_deref().unwrap_or(""), out)
        }
        LedgerCommands::Budget { month } => {
            handle_budget_command(ctx, month.as_deref().unwrap_or(""), out)
        }
        LedgerCommands::Months => handle_months_command(ctx, out),
    }
}
