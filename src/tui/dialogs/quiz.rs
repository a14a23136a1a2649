//! Quiz dialog
//!
//! Runs the sample exam inside a modal overlay. While the quiz is in
//! progress the dialog shows one question at a time with its choices; once
//! the final answer is committed it switches to a results screen with the
//! per-question breakdown and the rounded score.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::study::{fixtures, QuizEngine};
use crate::tui::layout::centered_rect;

/// State for the quiz dialog.
#[derive(Debug)]
pub struct QuizDialogState {
    pub engine: QuizEngine,
}

impl QuizDialogState {
    pub fn new() -> Self {
        Self {
            engine: fixtures::sample_exam(),
        }
    }
}

impl Default for QuizDialogState {
    fn default() -> Self {
        Self::new()
    }
}

const CHOICE_KEYS: [char; 5] = ['1', '2', '3', '4', '5'];

/// Renders the quiz dialog as a centered overlay.
pub fn render(frame: &mut Frame, state: &QuizDialogState, area: Rect) {
    let dialog_area = centered_rect(60, 70, area);
    frame.render_widget(Clear, dialog_area);

    if state.engine.is_completed() {
        render_results(frame, state, dialog_area);
    } else {
        render_question(frame, state, dialog_area);
    }
}

fn render_question(frame: &mut Frame, state: &QuizDialogState, area: Rect) {
    let engine = &state.engine;
    let question = engine.current_question();

    let block = Block::default()
        .title(format!(
            " Quiz — Question {} of {} ",
            engine.current_index() + 1,
            engine.question_count()
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // subject
            Constraint::Length(1),
            Constraint::Length(3), // prompt
            Constraint::Min(5),    // choices
            Constraint::Length(1), // hints
        ])
        .split(inner);

    let subject = Paragraph::new(Span::styled(
        format!(" {} ", question.subject),
        Style::default()
            .fg(Color::Black)
            .bg(Color::Magenta)
            .add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(subject, chunks[0]);

    let prompt = Paragraph::new(question.prompt)
        .style(Style::default().add_modifier(Modifier::BOLD))
        .wrap(Wrap { trim: true });
    frame.render_widget(prompt, chunks[2]);

    let mut lines = Vec::with_capacity(question.choices.len());
    for (index, choice) in question.choices.iter().enumerate() {
        let marker = if engine.selected() == Some(index) {
            "●"
        } else {
            "○"
        };
        let style = if engine.selected() == Some(index) {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        lines.push(Line::from(Span::styled(
            format!(
                " {} [{}] {}",
                marker,
                CHOICE_KEYS.get(index).copied().unwrap_or('?'),
                choice
            ),
            style,
        )));
    }
    frame.render_widget(Paragraph::new(lines), chunks[3]);

    let next_label = if engine.on_last_question() {
        "finish"
    } else {
        "next"
    };
    let key_style = |enabled: bool| {
        if enabled {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    };
    let hints = Paragraph::new(Line::from(vec![
        Span::styled("[1-5]", Style::default().fg(Color::Cyan)),
        Span::raw(" select  "),
        Span::styled("[Enter]", key_style(engine.can_advance())),
        Span::raw(format!(" {}  ", next_label)),
        Span::styled("[p]", key_style(engine.can_retreat())),
        Span::raw(" previous  "),
        Span::styled("[Esc]", Style::default().fg(Color::Cyan)),
        Span::raw(" close"),
    ]))
    .alignment(Alignment::Center)
    .style(Style::default().fg(Color::Gray));
    frame.render_widget(hints, chunks[4]);
}

fn render_results(frame: &mut Frame, state: &QuizDialogState, area: Rect) {
    let engine = &state.engine;

    let block = Block::default()
        .title(" Quiz — Results ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // score
            Constraint::Length(1),
            Constraint::Min(3),   // breakdown
            Constraint::Length(1), // hints
        ])
        .split(inner);

    if let Some(score) = engine.score() {
        let color = if score.percentage >= 70 {
            Color::Green
        } else if score.percentage >= 40 {
            Color::Yellow
        } else {
            Color::Red
        };
        let score_line = Paragraph::new(Span::styled(
            format!(
                "Score: {}/{} correct — {}%",
                score.correct, score.total, score.percentage
            ),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(score_line, chunks[0]);
    }

    let mut lines = Vec::new();
    for result in engine.results() {
        let (mark, color) = if result.is_correct {
            ("✔", Color::Green)
        } else {
            ("✘", Color::Red)
        };
        let answer = match result.answered {
            Some(index) => format!("choice {}", index + 1),
            None => "no answer".to_string(),
        };
        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", mark), Style::default().fg(color)),
            Span::raw(format!("{} — {}", result.subject, answer)),
        ]));
    }
    frame.render_widget(Paragraph::new(lines), chunks[2]);

    let hints = Paragraph::new(Line::from(vec![
        Span::styled("[r]", Style::default().fg(Color::Cyan)),
        Span::raw(" retake  "),
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
    fn test_new_starts_at_first_question() {
        let state = QuizDialogState::new();
        assert_eq!(state.engine.current_index(), 0);
        assert!(!state.engine.is_completed());
        assert!(state.engine.score().is_none());
    }

    #[test]
    fn test_dialog_runs_sample_exam() {
        let state = QuizDialogState::new();
        assert_eq!(state.engine.question_count(), 3);
    }
}
