use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use tripledger::cli::{
    handle_budget_command, handle_category_command, handle_expense_command, handle_reset_command,
    handle_trip_command, BudgetCommands, CategoryCommands, ExpenseCommands, TripCommands,
};
use tripledger::config::{paths::LedgerPaths, settings::Settings, BudgetMode};
use tripledger::error::LedgerError;
use tripledger::export::export_expenses_csv;
use tripledger::models::Snapshot;
use tripledger::reports::LedgerSummary;
use tripledger::services::Ledger;
use tripledger::storage::SnapshotStore;

#[derive(Parser)]
#[command(
    name = "tripledger",
    version,
    about = "Trip budgeting from the command line",
    long_about = "tripledger tracks one trip's budget: set per-category caps (or a single \
                  trip-wide cap), log expenses against categories, and get totals, remaining \
                  balances, and a spending breakdown. All data stays on this machine."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the data directory and default categories
    Init {
        /// Budgeting mode: "per-category" or "trip-wide"
        #[arg(long)]
        mode: Option<String>,
        /// Allow creating new categories at runtime (trip-wide mode)
        #[arg(long)]
        allow_custom_categories: bool,
    },

    /// Show current configuration and paths
    Config,

    /// Expense management commands
    #[command(subcommand, alias = "exp")]
    Expense(ExpenseCommands),

    /// Category management commands
    #[command(subcommand, alias = "cat")]
    Category(CategoryCommands),

    /// Per-category budget commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Trip-level commands (trip-wide mode)
    #[command(subcommand)]
    Trip(TripCommands),

    /// Show totals, per-category spending, and the breakdown chart
    Summary,

    /// Export the expense register as CSV
    Export {
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Reset the ledger to defaults and erase stored data
    Reset {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = LedgerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let store = SnapshotStore::new(paths.snapshot_file());

    match cli.command {
        Some(Commands::Init {
            mode,
            allow_custom_categories,
        }) => {
            handle_init(&paths, &store, settings, mode, allow_custom_categories)?;
        }

        Some(Commands::Config) => {
            println!("tripledger Configuration");
            println!("========================");
            println!("Config directory: {}", paths.config_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!();
            println!("Settings:");
            println!("  Budget mode:             {:?}", settings.budget_mode);
            println!(
                "  Allow custom categories: {}",
                settings.allow_custom_categories
            );
            println!("  Currency symbol:         {}", settings.currency_symbol);
        }

        Some(Commands::Expense(cmd)) => {
            let mut ledger = Ledger::open(store, settings)?;
            handle_expense_command(&mut ledger, cmd)?;
        }

        Some(Commands::Category(cmd)) => {
            let mut ledger = Ledger::open(store, settings)?;
            handle_category_command(&mut ledger, cmd)?;
        }

        Some(Commands::Budget(cmd)) => {
            let mut ledger = Ledger::open(store, settings)?;
            handle_budget_command(&mut ledger, cmd)?;
        }

        Some(Commands::Trip(cmd)) => {
            let mut ledger = Ledger::open(store, settings)?;
            handle_trip_command(&mut ledger, cmd)?;
        }

        Some(Commands::Summary) => {
            let ledger = Ledger::open(store, settings)?;
            let summary = LedgerSummary::compute(ledger.snapshot(), ledger.mode());
            print!(
                "{}",
                summary.format_terminal(&ledger.settings().currency_symbol)
            );
        }

        Some(Commands::Export { output }) => {
            let ledger = Ledger::open(store, settings)?;
            match output {
                Some(path) => {
                    // Render fully in memory so a failed write never leaves
                    // a truncated file behind
                    let mut buf = Vec::new();
                    export_expenses_csv(ledger.snapshot(), &mut buf)?;
                    if let Err(e) = std::fs::write(&path, &buf) {
                        let _ = std::fs::remove_file(&path);
                        return Err(e.into());
                    }
                    println!(
                        "Exported {} expense(s) to {}",
                        ledger.snapshot().expenses.len(),
                        path.display()
                    );
                }
                None => {
                    let stdout = io::stdout();
                    let mut handle = stdout.lock();
                    export_expenses_csv(ledger.snapshot(), &mut handle)?;
                    handle.flush()?;
                }
            }
        }

        Some(Commands::Reset { yes }) => {
            let mut ledger = Ledger::open(store, settings)?;
            handle_reset_command(&mut ledger, yes)?;
        }

        None => {
            println!("tripledger - Trip budgeting from the command line");
            println!();
            println!("Run 'tripledger --help' for usage information.");
            println!("Run 'tripledger init' to set up a new trip.");
        }
    }

    Ok(())
}

fn handle_init(
    paths: &LedgerPaths,
    store: &SnapshotStore,
    mut settings: Settings,
    mode: Option<String>,
    allow_custom_categories: bool,
) -> Result<()> {
    if let Some(mode) = mode {
        settings.budget_mode = match mode.as_str() {
            "per-category" => BudgetMode::PerCategory,
            "trip-wide" => BudgetMode::TripWide,
            other => {
                return Err(LedgerError::Validation(format!(
                    "Unknown mode '{}'; expected 'per-category' or 'trip-wide'",
                    other
                ))
                .into())
            }
        };
    }
    if allow_custom_categories {
        settings.allow_custom_categories = true;
    }

    paths.ensure_directories()?;
    settings.save(paths)?;

    if !store.exists() {
        store.save(&Snapshot::default())?;
    }

    println!("Initialized tripledger at: {}", paths.base_dir().display());
    println!("Budget mode: {:?}", settings.budget_mode);
    println!();
    println!("Default categories:");
    println!("  Cruise, Lodging, Food, Transportation, Entertainment, Shopping, Misc");
    println!();
    println!("Run 'tripledger budget set <category> <amount>' to set budgets,");
    println!("then 'tripledger expense add <category> <amount>' to log spending.");

    Ok(())
}
