use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use finance_tracker::cli::{handle_ledger_command, run_session, CliContext, LedgerCommands};
use finance_tracker::config::{FinancePaths, Settings};
use finance_tracker::models::Money;
use finance_tracker::storage::{create_ledger_file, Storage};

#[derive(Parser)]
#[command(
    name = "finance",
    author = "Kaylee Beyene",
    version,
    about = "Personal finance queries over a monthly CSV ledger",
    long_about = "finance answers questions about a CSV export of monthly income \
                  and expenses: what was spent in a month and by category, how \
                  much of the monthly budget is left, and it records new expenses \
                  described in plain text."
)]
struct Cli {
    /// Ledger CSV file (overrides the configured source)
    #[arg(long, env = "FINANCE_TRACKER_CSV", global = true)]
    file: Option<PathBuf>,

    /// Monthly budget (overrides the configured budget)
    #[arg(long = "budget", global = true, allow_hyphen_values = true)]
    monthly_budget: Option<String>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Ledger(LedgerCommands),

    /// Run several commands against one loaded ledger
    #[command(alias = "shell")]
    Session,

    /// Write default settings and an empty ledger file
    Init,

    /// Show current configuration and paths
    Config,
}

fn init_logging(verbose: bool) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if verbose {
        EnvFilter::new("finance_tracker=debug,finance=debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(io::stderr)
                .compact(),
        )
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Initialize paths and settings
    let paths = FinancePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let source = cli
        .file
        .clone()
        .unwrap_or_else(|| settings.source_path(&paths));

    match cli.command {
        Some(Commands::Ledger(cmd)) => {
            let storage = load_storage(source, cli.monthly_budget.as_deref(), &settings)?;
            let ctx = CliContext::new(&storage, &settings, cli.json);
            handle_ledger_command(&ctx, cmd, &mut io::stdout().lock())?;
        }
        Some(Commands::Session) => {
            let storage = load_storage(source, cli.monthly_budget.as_deref(), &settings)?;
            let ctx = CliContext::new(&storage, &settings, cli.json);
            let stdin = io::stdin();
            let prompt = stdin.is_terminal();
            run_session(&ctx, stdin.lock(), &mut io::stdout().lock(), prompt)?;
        }
        Some(Commands::Init) => {
            println!("Initializing finance-tracker at: {}", paths.base_dir().display());
            if paths.is_initialized() {
                println!("Settings already exist: {}", paths.settings_file().display());
            } else {
                settings.save(&paths)?;
                println!("Wrote default settings: {}", paths.settings_file().display());
            }
            if create_ledger_file(&source)? {
                println!("Created empty ledger: {}", source.display());
            } else {
                println!("Ledger already exists: {}", source.display());
            }
            println!("Initialization complete!");
            println!();
            println!("Add rows to the ledger or run 'finance add \"Spent $12 at Starbucks\"'.");
        }
        Some(Commands::Config) => {
            println!("finance-tracker Configuration");
            println!("=============================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Ledger source:    {}", source.display());
            println!();
            println!("Settings:");
            println!(
                "  Monthly budget:  {}",
                settings.monthly_budget.format_with_symbol(&settings.currency_symbol)
            );
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Categories:      {}", settings.catalog.categories.len());
            println!("  Source groups:   {}", settings.catalog.sources.len());
        }
        None => {
            println!("finance - Personal finance queries over a monthly CSV ledger");
            println!();
            println!("Run 'finance --help' for usage information.");
            println!("Run 'finance session' to run several commands against one ledger.");
        }
    }

    Ok(())
}

/// Load the ledger once; it stays in memory for the rest of the process
fn load_storage(source: PathBuf, budget: Option<&str>, settings: &Settings) -> Result<Storage> {
    let budget = match budget {
        Some(amount) => {
            Money::parse(amount).with_context(|| format!("Invalid budget amount: {}", amount))?
        }
        None => settings.monthly_budget,
    };

    let mut storage = Storage::new(source, Money::zero());
    storage.load_all()?;
    storage.set_budget(budget)?;
    Ok(storage)
}
