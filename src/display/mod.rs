//! Terminal display formatting for CLI output
//!
//! Table rendering for the register and summary commands. The interactive
//! TUI has its own rendering; this module only serves the one-shot CLI
//! commands.

pub mod summary;
pub mod transaction;

pub use summary::format_summary;
pub use transaction::format_register;
