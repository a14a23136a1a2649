//! CLI command handlers
//!
//! One-shot commands that build an in-memory ledger (from a CSV seed or the
//! built-in sample data) and print a report. The interactive experience lives
//! in the `tui` module.

use std::path::Path;

use crate::config::{LedgerPaths, Settings};
use crate::display::{format_register, format_summary};
use crate::error::LedgerResult;
use crate::models::TransactionKind;
use crate::services::{import_csv, Ledger, LedgerFilter};

/// Build the session ledger: from a CSV seed if given, otherwise the sample
/// book
pub fn load_ledger(import: Option<&Path>) -> LedgerResult<Ledger> {
    match import {
        Some(path) => import_csv(path),
        None => Ok(Ledger::sample()),
    }
}

/// Handle the `summary` command
pub fn handle_summary(import: Option<&Path>, settings: &Settings) -> LedgerResult<()> {
    let ledger = load_ledger(import)?;
    print!("{}", format_summary(&ledger, &settings.currency_symbol));
    Ok(())
}

/// Handle the `transactions` command
pub fn handle_transactions(
    import: Option<&Path>,
    kind: Option<&str>,
    category: Option<&str>,
    search: Option<&str>,
    settings: &Settings,
) -> LedgerResult<()> {
    let ledger = load_ledger(import)?;

    let mut filter = LedgerFilter::new();
    if let Some(kind) = kind {
        filter = filter.kind(TransactionKind::parse(kind)?);
    }
    if let Some(category) = category {
        filter = filter.category(category);
    }
    if let Some(term) = search {
        filter = filter.search(term);
    }

    let transactions = ledger.filtered(&filter);
    print!(
        "{}",
        format_register(
            &transactions,
            &settings.currency_symbol,
            &settings.date_format
        )
    );
    Ok(())
}

/// Handle the `config` command: print resolved paths and active settings
pub fn handle_config(paths: &LedgerPaths, settings: &Settings) -> LedgerResult<()> {
    println!("Config directory: {}", paths.base_dir().display());
    println!(
        "Settings file:    {} ({})",
        paths.settings_file().display(),
        if paths.settings_file().exists() {
            "present"
        } else {
            "not present, using defaults"
        }
    );
    println!();
    println!("currency_symbol = {}", settings.currency_symbol);
    println!("date_format     = {}", settings.date_format);
    println!("focus_minutes   = {}", settings.focus_minutes);
    println!("break_minutes   = {}", settings.break_minutes);
    Ok(())
}
