//! Terminal User Interface module
//!
//! The interactive face of StudyLedger, built on ratatui. Views cover the
//! finance dashboard, the transaction register, reports, and the study hub;
//! the study widgets (timer, quiz, flashcards) and the transaction form run
//! as dialogs over the active view.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
