//! Study hub view
//!
//! Launchpad for the session timer, quiz, and flashcards, plus a recap of
//! what was accomplished this run.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::app::App;

/// Render the study hub
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title(" Study ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // recap
            Constraint::Length(1),
            Constraint::Min(7), // launch cards
        ])
        .split(inner);

    render_recap(frame, app, chunks[0]);
    render_launchers(frame, app, chunks[2]);
}

fn render_recap(frame: &mut Frame, app: &App, area: Rect) {
    let sessions_line = Line::from(vec![
        Span::raw("Focus sessions completed today: "),
        Span::styled(
            app.focus_sessions_total.to_string(),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
    ]);

    let quiz_line = match &app.last_quiz_score {
        Some(score) => Line::from(vec![
            Span::raw("Last quiz: "),
            Span::styled(
                format!("{}/{} correct ({}%)", score.correct, score.total, score.percentage),
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        None => Line::from(Span::styled(
            "No quiz taken yet this run.",
            Style::default().fg(Color::DarkGray),
        )),
    };

    let recap = Paragraph::new(vec![
        Line::from(Span::styled(
            "Progress",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        sessions_line,
        quiz_line,
    ]);
    frame.render_widget(recap, area);
}

fn render_launchers(frame: &mut Frame, app: &App, area: Rect) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
        ])
        .split(area);

    let focus = app.settings.focus_minutes;
    let brk = app.settings.break_minutes;
    render_launcher(
        frame,
        cards[0],
        " Session Timer ",
        "t",
        &format!("{} min focus / {} min break", focus, brk),
        Color::Cyan,
    );
    render_launcher(
        frame,
        cards[1],
        " Quiz ",
        "x",
        "Three questions across subjects",
        Color::Magenta,
    );
    render_launcher(
        frame,
        cards[2],
        " Flashcards ",
        "f",
        "Flip through the sample deck",
        Color::Yellow,
    );
}

fn render_launcher(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    key: &str,
    description: &str,
    color: Color,
) {
    let block = Block::default()
        .title(title)
        .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    let lines = vec![
        Line::from(""),
        Line::from(Span::raw(description.to_string())),
        Line::from(""),
        Line::from(vec![
            Span::raw("Press "),
            Span::styled(
                format!("[{}]", key),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" to open"),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
