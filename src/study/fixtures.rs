//! Static study content
//!
//! The question set and flashcard deck are hard-coded fixtures, not computed.

use super::flashcards::{Flashcard, FlashcardDeck};
use super::quiz::{Question, QuizEngine};

/// The built-in mock exam: three questions across three subjects
pub fn sample_exam() -> QuizEngine {
    QuizEngine::new(vec![
        Question {
            subject: "Civics",
            prompt: "Which of the following is a foundational principle of a constitutional republic?",
            choices: &[
                "Human dignity is a fundamental principle of the state",
                "The head of state holds unlimited executive power",
                "Fundamental rights are absolute and unrestricted",
                "Popular sovereignty is expressed only through voting",
                "The separation of powers is rigid and absolute",
            ],
            correct_index: 0,
        },
        Question {
            subject: "Grammar",
            prompt: "In \"It was expected that everyone would attend the meeting\", the subordinate clause functions as:",
            choices: &[
                "A direct object",
                "The subject of the main clause",
                "A restrictive modifier",
                "An adverbial of time",
                "A predicate complement",
            ],
            correct_index: 1,
        },
        Question {
            subject: "Mathematics",
            prompt: "An urn holds 5 red balls and 3 blue balls. The probability of drawing a red ball is:",
            choices: &["3/8", "5/8", "3/5", "5/3", "1/2"],
            correct_index: 1,
        },
    ])
}

/// The built-in flashcard deck: four cards across four subjects
pub fn sample_deck() -> FlashcardDeck {
    FlashcardDeck::new(vec![
        Flashcard {
            subject: "Civics",
            prompt: "Which principle guarantees that everyone is equal before the law?",
            answer: "The principle of equality (isonomy), a cornerstone of constitutional rights.",
        },
        Flashcard {
            subject: "Grammar",
            prompt: "What is a noun clause acting as a direct object?",
            answer: "A subordinate clause that serves as the direct object of the main verb. \
                     Example: \"I hope that you come.\"",
        },
        Flashcard {
            subject: "Mathematics",
            prompt: "How is the probability of an event calculated?",
            answer: "P(A) = favorable outcomes / total possible outcomes",
        },
        Flashcard {
            subject: "Public Administration",
            prompt: "What are the basic principles of public administration?",
            answer: "Legality, impersonality, morality, publicity, and efficiency.",
        },
    ])
}
