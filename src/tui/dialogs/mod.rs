//! TUI Dialogs
//!
//! Modal overlays rendered on top of the active view. Each stateful dialog
//! defines its own state struct, owned by the `ActiveDialog` variant that
//! opened it.

pub mod confirm;
pub mod flashcards;
pub mod help;
pub mod quiz;
pub mod timer;
pub mod transaction;
