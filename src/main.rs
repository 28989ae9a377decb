use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use lootlock::cli::{
    handle_budget_command, handle_expense_command, handle_income_command, handle_salary_command,
    handle_snapshot_command, handle_summary_command,
};
use lootlock::config::paths::{LootLockPaths, DATA_DIR_ENV};
use lootlock::config::settings::Settings;
use lootlock::error::TrackerResult;
use lootlock::storage::Storage;

#[derive(Parser)]
#[command(
    name = "lootlock",
    version,
    about = "Personal budget tracker for the terminal",
    long_about = "LootLock keeps named budgets with spending limits, a base salary, \
                  side income, and a monthly overview, all in plain files you can \
                  read and edit yourself."
)]
struct Cli {
    /// Directory holding budgets, income, and settings
    #[arg(long, global = true, env = DATA_DIR_ENV, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Budget management commands
    #[command(subcommand)]
    Budget(lootlock::cli::BudgetCommands),

    /// Expense commands
    #[command(subcommand)]
    Expense(lootlock::cli::ExpenseCommands),

    /// Base salary commands
    #[command(subcommand)]
    Salary(lootlock::cli::SalaryCommands),

    /// Side income commands
    #[command(subcommand)]
    Income(lootlock::cli::IncomeCommands),

    /// Spending per category across every budget
    Summary {
        /// Only count expenses in this month (YYYY-MM)
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Monthly overview commands
    #[command(subcommand)]
    Snapshot(lootlock::cli::SnapshotCommands),

    /// Show recent changes from the audit log
    Audit {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        limit: usize,
    },

    /// Initialize the data directory and default settings
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = match cli.data_dir {
        Some(dir) => LootLockPaths::with_base_dir(dir),
        None => LootLockPaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let storage = Storage::new(paths.clone())?;

    match run(cli.command, &paths, &storage, &settings) {
        Ok(()) => Ok(()),
        // Nothing recorded yet is not a failure
        Err(e) if e.is_empty_state() => {
            println!("{}", e);
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

fn run(
    command: Option<Commands>,
    paths: &LootLockPaths,
    storage: &Storage,
    settings: &Settings,
) -> TrackerResult<()> {
    match command {
        Some(Commands::Budget(cmd)) => handle_budget_command(storage, settings, cmd),
        Some(Commands::Expense(cmd)) => handle_expense_command(storage, settings, cmd),
        Some(Commands::Salary(cmd)) => handle_salary_command(storage, settings, cmd),
        Some(Commands::Income(cmd)) => handle_income_command(storage, settings, cmd),
        Some(Commands::Summary { month }) => handle_summary_command(storage, settings, month),
        Some(Commands::Snapshot(cmd)) => handle_snapshot_command(storage, settings, cmd),
        Some(Commands::Audit { limit }) => {
            let entries = storage.audit().read_recent(limit)?;
            if entries.is_empty() {
                println!("No audit entries yet.");
            }
            for entry in entries {
                println!("{}", entry.format_human_readable());
            }
            Ok(())
        }
        Some(Commands::Init) => {
            println!("Initializing LootLock at: {}", paths.base_dir().display());
            paths.ensure_directories()?;
            settings.save(paths)?;
            println!("Initialization complete!");
            println!();
            println!("Next steps:");
            println!("  lootlock budget create <name> <limit>");
            println!("  lootlock salary set <amount>");
            Ok(())
        }
        Some(Commands::Config) => {
            println!("LootLock Configuration");
            println!("======================");
            println!("Data directory:   {}", paths.base_dir().display());
            println!("Budgets:          {}", paths.budgets_dir().display());
            println!("Audit log:        {}", paths.audit_log().display());
            println!(
                "Initialized:      {}",
                if paths.is_initialized() { "yes" } else { "no" }
            );
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!(
                "  Snapshot categories: {}",
                settings.snapshot_categories.join(", ")
            );
            Ok(())
        }
        None => {
            println!("LootLock - Personal budget tracker");
            println!();
            println!("Run 'lootlock --help' for usage information.");
            Ok(())
        }
    }
}
