//! Flashcard dialog
//!
//! Card-by-card review of the sample deck. Each card starts on its prompt
//! side; flipping reveals the answer, and moving to another card always
//! lands back on the prompt side.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::study::{fixtures, FlashcardDeck};
use crate::tui::layout::centered_rect_fixed;

/// State for the flashcard dialog.
#[derive(Debug)]
pub struct FlashcardDialogState {
    pub deck: FlashcardDeck,
}

impl FlashcardDialogState {
    pub fn new() -> Self {
        Self {
            deck: fixtures::sample_deck(),
        }
    }
}

impl Default for FlashcardDialogState {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the flashcard dialog as a centered overlay.
pub fn render(frame: &mut Frame, state: &FlashcardDialogState, area: Rect) {
    let dialog_area = centered_rect_fixed(54, 12, area);
    frame.render_widget(Clear, dialog_area);

    let deck = &state.deck;
    let card = deck.current_card();

    let block = Block::default()
        .title(format!(
            " Flashcards — {} of {} ",
            deck.current_index() + 1,
            deck.len()
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(dialog_area);
    frame.render_widget(block, dialog_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // subject + side
            Constraint::Length(1),
            Constraint::Min(3),    // card text
            Constraint::Length(1), // hints
        ])
        .split(inner);

    let side = if deck.showing_answer() {
        Span::styled(" Answer ", Style::default().fg(Color::Black).bg(Color::Green))
    } else {
        Span::styled(" Prompt ", Style::default().fg(Color::Black).bg(Color::Yellow))
    };
    let header = Line::from(vec![
        Span::styled(
            format!(" {} ", card.subject),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        side,
    ]);
    frame.render_widget(Paragraph::new(header), chunks[0]);

    let text = if deck.showing_answer() {
        card.answer
    } else {
        card.prompt
    };
    let body = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(body, chunks[2]);

    let hints = Paragraph::new(Line::from(vec![
        Span::styled("[space]", Style::default().fg(Color::Cyan)),
        Span::raw(" flip  "),
        Span::styled("[h/l]", Style::default().fg(Color::Cyan)),
        Span::raw(" prev/next  "),
        Span::styled("[Esc]", Style::default().fg(Color::Cyan)),
        Span::raw(" close"),
    ]))
    .alignment(Alignment::Center)
    .style(Style::default().fg(Color::Gray));
    frame.render_widget(hints, chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_loads_sample_deck() {
        let state = FlashcardDialogState::new();
        assert_eq!(state.deck.len(), 4);
        assert!(!state.deck.showing_answer());
    }
}
