use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use studyledger::cli::{handle_config, handle_summary, handle_transactions, load_ledger};
use studyledger::config::{LedgerPaths, Settings};
use studyledger::tui::run_tui;

#[derive(Parser)]
#[command(
    name = "studyledger",
    version,
    about = "Terminal-based personal finance tracker with a study dashboard",
    long_about = "StudyLedger keeps a session-scoped book of income and expenses and \
                  pairs it with study tools: a pomodoro session timer, a short quiz, \
                  and flashcards. Launch without a subcommand for the interactive TUI."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui {
        /// Seed the ledger from a CSV file instead of the sample data
        #[arg(short, long)]
        import: Option<PathBuf>,
    },

    /// Print income, expense, and balance totals
    Summary {
        /// Seed the ledger from a CSV file instead of the sample data
        #[arg(short, long)]
        import: Option<PathBuf>,
    },

    /// List transactions, optionally filtered
    #[command(alias = "txn")]
    Transactions {
        /// Seed the ledger from a CSV file instead of the sample data
        #[arg(short, long)]
        import: Option<PathBuf>,
        /// Filter by kind ("income" or "expense")
        #[arg(short, long)]
        kind: Option<String>,
        /// Filter by category
        #[arg(short, long)]
        category: Option<String>,
        /// Filter by a case-insensitive description search
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = LedgerPaths::new()?;
    let settings = Settings::load_or_default(&paths)?;

    match cli.command {
        None => {
            let ledger = load_ledger(None)?;
            run_tui(ledger, settings)?;
        }
        Some(Commands::Tui { import }) => {
            let ledger = load_ledger(import.as_deref())?;
            run_tui(ledger, settings)?;
        }
        Some(Commands::Summary { import }) => {
            handle_summary(import.as_deref(), &settings)?;
        }
        Some(Commands::Transactions {
            import,
            kind,
            category,
            search,
        }) => {
            handle_transactions(
                import.as_deref(),
                kind.as_deref(),
                category.as_deref(),
                search.as_deref(),
                &settings,
            )?;
        }
        Some(Commands::Config) => {
            handle_config(&paths, &settings)?;
        }
    }

    Ok(())
}
