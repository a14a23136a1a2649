//! Help dialog
//!
//! Shows contextual keyboard shortcuts

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::{ActiveView, App};
use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let dialog_area = centered_rect(60, 70, area);
    frame.render_widget(Clear, dialog_area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(get_help_lines(app))
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, dialog_area);
}

fn get_help_lines(app: &App) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(vec![Span::styled(
            "Global Keys",
            Style::default()
                .add_modifier(Modifier::BOLD)
                .fg(Color::Yellow),
        )]),
        Line::from(""),
        key_line("q", "Quit application"),
        key_line("?", "Show/hide help"),
        key_line("Tab", "Switch panel focus"),
        key_line("1-4", "Jump to view"),
        key_line("j/k", "Move selection down/up"),
        key_line("t", "Open session timer"),
        key_line("x", "Start a quiz"),
        key_line("f", "Review flashcards"),
        Line::from(""),
    ];

    match app.active_view {
        ActiveView::Dashboard => {
            lines.push(section("Dashboard"));
            lines.push(Line::from(""));
            lines.push(key_line("a", "Add a transaction"));
            lines.push(key_line("Enter", "Apply category filter (sidebar)"));
        }
        ActiveView::Transactions => {
            lines.push(section("Transactions"));
            lines.push(Line::from(""));
            lines.push(key_line("a", "Add a transaction"));
            lines.push(key_line("d", "Delete selected transaction"));
            lines.push(key_line("Enter", "Apply category filter (sidebar)"));
        }
        ActiveView::Reports => {
            lines.push(section("Reports"));
            lines.push(Line::from(""));
            lines.push(Line::from(Span::raw(
                "  Monthly flows and category breakdown of your spending.",
            )));
        }
        ActiveView::Study => {
            lines.push(section("Study"));
            lines.push(Line::from(""));
            lines.push(key_line("t", "Pomodoro session timer"));
            lines.push(key_line("x", "Take the sample quiz"));
            lines.push(key_line("f", "Flip through flashcards"));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press [Esc] or [?] to close",
        Style::default().fg(Color::Gray),
    )));

    lines
}

fn section(title: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        title,
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Yellow),
    ))
}

fn key_line(key: &'static str, description: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:<8}", key), Style::default().fg(Color::Cyan)),
        Span::raw(description),
    ])
}
