//! StudyLedger - Terminal-based personal finance tracker and study dashboard
//!
//! This library provides the core functionality for the StudyLedger
//! application: an in-memory transaction ledger with report aggregation, and
//! a study dashboard with a pomodoro-style session timer, a multiple-choice
//! mock exam, and a flashcard deck. Session data is held in memory for the
//! lifetime of the process; nothing is persisted.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, transactions)
//! - `services`: Business logic (ledger, reports, CSV seeding)
//! - `study`: Study widgets (session timer, quiz engine, flashcards)
//! - `display`: Table rendering for CLI output
//! - `cli`: CLI command handlers
//! - `tui`: Interactive terminal interface

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod study;
pub mod tui;

pub use error::{LedgerError, LedgerResult};
