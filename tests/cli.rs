//! CLI integration tests
//!
//! Drives the compiled binary end to end. `STUDYLEDGER_DATA_DIR` is pointed
//! at a temp directory so no test touches the real config location.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn cmd(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("studyledger").unwrap();
    cmd.env("STUDYLEDGER_DATA_DIR", data_dir.path());
    cmd
}

fn write_csv(dir: &TempDir, name: &str, body: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, body).unwrap();
    path
}

#[test]
fn summary_with_sample_data() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Balance:"))
        .stdout(predicate::str::contains("Income:"))
        .stdout(predicate::str::contains("Transactions: 3"));
}

#[test]
fn summary_with_imported_csv() {
    let dir = TempDir::new().unwrap();
    let csv = write_csv(
        &dir,
        "book.csv",
        "date,kind,amount,description,category\n\
         2025-06-01,income,1000.00,Paycheck,Salary\n\
         2025-06-02,expense,250.00,Groceries,Food\n",
    );
    cmd(&dir)
        .arg("summary")
        .arg("--import")
        .arg(&csv)
        .assert()
        .success()
        .stdout(predicate::str::contains("$750.00"))
        .stdout(predicate::str::contains("Transactions: 2"));
}

#[test]
fn summary_shows_category_breakdown() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Expenses by category"))
        .stdout(predicate::str::contains("Housing"));
}

#[test]
fn transactions_lists_all_rows() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .arg("transactions")
        .assert()
        .success()
        .stdout(predicate::str::contains("Salary"))
        .stdout(predicate::str::contains("Rent"))
        .stdout(predicate::str::contains("Groceries"));
}

#[test]
fn transactions_filters_by_kind() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .arg("transactions")
        .arg("--kind")
        .arg("expense")
        .assert()
        .success()
        .stdout(predicate::str::contains("Rent"))
        .stdout(predicate::str::contains("Salary").not());
}

#[test]
fn transactions_filters_by_category() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .arg("transactions")
        .arg("--category")
        .arg("Food")
        .assert()
        .success()
        .stdout(predicate::str::contains("Groceries"))
        .stdout(predicate::str::contains("Rent").not());
}

#[test]
fn transactions_search_is_case_insensitive() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .arg("transactions")
        .arg("--search")
        .arg("groc")
        .assert()
        .success()
        .stdout(predicate::str::contains("Groceries"))
        .stdout(predicate::str::contains("Salary").not());
}

#[test]
fn transactions_rejects_unknown_kind() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .arg("transactions")
        .arg("--kind")
        .arg("transfer")
        .assert()
        .failure();
}

#[test]
fn import_rejects_malformed_row() {
    let dir = TempDir::new().unwrap();
    let csv = write_csv(
        &dir,
        "bad.csv",
        "date,kind,amount,description,category\n\
         2025-06-01,income,not-a-number,Paycheck,Salary\n",
    );
    cmd(&dir)
        .arg("summary")
        .arg("--import")
        .arg(&csv)
        .assert()
        .failure();
}

#[test]
fn import_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .arg("summary")
        .arg("--import")
        .arg(dir.path().join("nope.csv"))
        .assert()
        .failure();
}

#[test]
fn config_prints_paths_and_settings() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Config directory:"))
        .stdout(predicate::str::contains(
            dir.path().to_string_lossy().to_string(),
        ));
}

#[test]
fn config_honors_settings_file() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("config.json"),
        r#"{"currency_symbol": "€", "focus_minutes": 50}"#,
    )
    .unwrap();
    cmd(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("€"));
}
