//! Study dashboard widgets
//!
//! The state machines behind the study side of the application: a
//! pomodoro-style session timer, a multiple-choice quiz engine, and a
//! flashcard deck. Each widget owns its state exclusively and is mutated only
//! by its own event handlers; there is no shared state between them.

pub mod fixtures;
pub mod flashcards;
pub mod quiz;
pub mod timer;

pub use flashcards::{Flashcard, FlashcardDeck};
pub use quiz::{Question, QuizEngine, QuizScore};
pub use timer::{SessionTimer, TimerMode};
