//! Flashcard deck
//!
//! A fixed deck of prompt/answer cards with wrap-around navigation. Moving to
//! a different card always flips back to the prompt side.

/// A single flashcard
#[derive(Debug, Clone)]
pub struct Flashcard {
    /// Subject area shown as a badge
    pub subject: &'static str,
    /// Front of the card
    pub prompt: &'static str,
    /// Back of the card
    pub answer: &'static str,
}

/// A deck of flashcards with a cursor and a visible side
#[derive(Debug, Clone)]
pub struct FlashcardDeck {
    cards: Vec<Flashcard>,
    current: usize,
    show_answer: bool,
}

impl FlashcardDeck {
    /// Create a deck from a non-empty card list
    pub fn new(cards: Vec<Flashcard>) -> Self {
        Self {
            cards,
            current: 0,
            show_answer: false,
        }
    }

    /// The card under the cursor
    pub fn current_card(&self) -> &Flashcard {
        &self.cards[self.current]
    }

    /// Zero-based cursor position
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Number of cards in the deck
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the deck has no cards
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Whether the answer side is currently visible
    pub fn showing_answer(&self) -> bool {
        self.show_answer
    }

    /// Flip the current card between prompt and answer
    pub fn flip(&mut self) {
        self.show_answer = !self.show_answer;
    }

    /// Move to the next card (wrapping), showing its prompt side
    pub fn next(&mut self) {
        self.current = (self.current + 1) % self.cards.len();
        self.show_answer = false;
    }

    /// Move to the previous card (wrapping), showing its prompt side
    pub fn prev(&mut self) {
        self.current = (self.current + self.cards.len() - 1) % self.cards.len();
        self.show_answer = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck() -> FlashcardDeck {
        FlashcardDeck::new(vec![
            Flashcard {
                subject: "A",
                prompt: "p1",
                answer: "a1",
            },
            Flashcard {
                subject: "B",
                prompt: "p2",
                answer: "a2",
            },
            Flashcard {
                subject: "C",
                prompt: "p3",
                answer: "a3",
            },
        ])
    }

    #[test]
    fn test_starts_on_first_prompt() {
        let deck = deck();
        assert_eq!(deck.current_index(), 0);
        assert!(!deck.showing_answer());
        assert_eq!(deck.current_card().prompt, "p1");
    }

    #[test]
    fn test_flip_toggles_side() {
        let mut deck = deck();
        deck.flip();
        assert!(deck.showing_answer());
        deck.flip();
        assert!(!deck.showing_answer());
    }

    #[test]
    fn test_navigation_wraps() {
        let mut deck = deck();
        deck.prev();
        assert_eq!(deck.current_index(), 2);
        deck.next();
        assert_eq!(deck.current_index(), 0);
    }

    #[test]
    fn test_moving_resets_to_prompt_side() {
        let mut deck = deck();
        deck.flip();
        deck.next();
        assert!(!deck.showing_answer());
        deck.flip();
        deck.prev();
        assert!(!deck.showing_answer());
    }
}
